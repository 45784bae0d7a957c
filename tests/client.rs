//! Client tests against a minimal one-connection-at-a-time HTTP stub.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use measure_space_mcp::client::{Endpoints, MeasureSpaceClient};
use measure_space_mcp::error::ApiError;
use measure_space_mcp::metadata::UnitSystem;

/// Binds an ephemeral port and answers every request with a canned response.
/// Returns the base URL to point the client at.
async fn spawn_stub(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body,
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}", addr)
}

fn stub_endpoints(base: &str) -> Endpoints {
    Endpoints {
        hourly_weather: format!("{base}/global-hourly-weather-forecast"),
        daily_weather: format!("{base}/global-daily-weather-forecast"),
        daily_climate: format!("{base}/global-daily-climate-forecast"),
        hourly_air_quality: format!("{base}/global-hourly-air-quality-forecast"),
        daily_air_quality: format!("{base}/global-daily-air-quality-forecast"),
        growing_degree_days: format!("{base}/growing-degree-days"),
        growth_stage: format!("{base}/growth-stage"),
        heat_stress_days: format!("{base}/heat-stress-days"),
        frost_stress_days: format!("{base}/frost-stress-days"),
        daily_pollen: format!("{base}/global-daily-pollen-forecast"),
        nearest_city: format!("{base}/nearest-city"),
        autocomplete: format!("{base}/autocomplete"),
    }
}

async fn stub_client(status_line: &'static str, body: &'static str) -> MeasureSpaceClient {
    let base = spawn_stub(status_line, body).await;
    MeasureSpaceClient::with_endpoints(stub_endpoints(&base)).unwrap()
}

#[tokio::test]
async fn successful_call_returns_parsed_json() {
    let client = stub_client("200 OK", r#"{"data": {"tp": [0.2, 0.0]}}"#).await;

    let result = client
        .daily_weather("test-key", 48.85, 2.35, "tp,minT", UnitSystem::Metric)
        .await
        .unwrap();

    assert_eq!(result["data"]["tp"][0], 0.2);
}

#[tokio::test]
async fn non_success_status_is_an_upstream_error() {
    let client = stub_client("500 Internal Server Error", "rate limited").await;

    let err = client
        .daily_weather("test-key", 48.85, 2.35, "tp", UnitSystem::Metric)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Upstream { status: 500, ref body } if body.as_str() == "rate limited"
    ));
    let msg = err.to_string();
    assert!(msg.contains("500"), "message was: {msg}");
    assert!(msg.contains("rate limited"), "message was: {msg}");
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let client = stub_client("200 OK", "<html>definitely not json</html>").await;

    let err = client
        .hourly_air_quality("test-key", 48.85, 2.35, "AQI")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn geocoding_returns_first_match_coordinates() {
    let client = stub_client(
        "200 OK",
        r#"{"results": [{"name": "Paris", "lat": 48.8566, "lon": 2.3522}]}"#,
    )
    .await;

    let (lat, lon) = client.lat_lon_from_city("test-key", "Paris").await.unwrap();

    assert_eq!(lat, Some(48.8566));
    assert_eq!(lon, Some(2.3522));
}

#[tokio::test]
async fn geocoding_without_match_yields_null_coordinates() {
    let client = stub_client("200 OK", r#"{"results": []}"#).await;

    let (lat, lon) = client
        .lat_lon_from_city("test-key", "Nowhereville")
        .await
        .unwrap();

    assert_eq!(lat, None);
    assert_eq!(lon, None);
}

#[tokio::test]
async fn nearest_city_returns_the_match_record() {
    let client = stub_client(
        "200 OK",
        r#"{"results": [{"name": "Paris", "country": "France", "lat": 48.8566, "lon": 2.3522}]}"#,
    )
    .await;

    let result = client.city_from_lat_lon("test-key", 48.85, 2.35).await.unwrap();

    assert_eq!(result["name"], "Paris");
    assert_eq!(result["country"], "France");
}

#[tokio::test]
async fn nearest_city_without_match_yields_not_found_sentinel() {
    let client = stub_client("200 OK", r#"{"results": []}"#).await;

    let result = client.city_from_lat_lon("test-key", 0.0, 0.0).await.unwrap();

    assert_eq!(result, serde_json::Value::String("Not Found".to_string()));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_error() {
    // nothing listens on this port
    let client =
        MeasureSpaceClient::with_endpoints(stub_endpoints("http://127.0.0.1:1")).unwrap();

    let err = client
        .daily_pollen("test-key", 48.85, 2.35)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
}
