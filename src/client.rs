use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;

use crate::constants::{
    AUTOCOMPLETE_URL, DAILY_AIR_QUALITY_URL, DAILY_CLIMATE_URL, DAILY_POLLEN_URL,
    DAILY_WEATHER_URL, FROST_STRESS_DAYS_URL, GROWING_DEGREE_DAYS_URL, GROWTH_STAGE_URL,
    HEAT_STRESS_DAYS_URL, HOURLY_AIR_QUALITY_URL, HOURLY_WEATHER_URL, NEAREST_CITY_URL,
    USER_AGENT,
};
use crate::error::{ApiError, Result};
use crate::metadata::{TemperatureUnit, UnitSystem};
use crate::models::{AutocompleteResponse, NearestCityResponse};

/// Upstream endpoint URLs, one per data category. Defaults to production;
/// overridable so tests can point the client at a stub server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub hourly_weather: String,
    pub daily_weather: String,
    pub daily_climate: String,
    pub hourly_air_quality: String,
    pub daily_air_quality: String,
    pub growing_degree_days: String,
    pub growth_stage: String,
    pub heat_stress_days: String,
    pub frost_stress_days: String,
    pub daily_pollen: String,
    pub nearest_city: String,
    pub autocomplete: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            hourly_weather: HOURLY_WEATHER_URL.to_string(),
            daily_weather: DAILY_WEATHER_URL.to_string(),
            daily_climate: DAILY_CLIMATE_URL.to_string(),
            hourly_air_quality: HOURLY_AIR_QUALITY_URL.to_string(),
            daily_air_quality: DAILY_AIR_QUALITY_URL.to_string(),
            growing_degree_days: GROWING_DEGREE_DAYS_URL.to_string(),
            growth_stage: GROWTH_STAGE_URL.to_string(),
            heat_stress_days: HEAT_STRESS_DAYS_URL.to_string(),
            frost_stress_days: FROST_STRESS_DAYS_URL.to_string(),
            daily_pollen: DAILY_POLLEN_URL.to_string(),
            nearest_city: NEAREST_CITY_URL.to_string(),
            autocomplete: AUTOCOMPLETE_URL.to_string(),
        }
    }
}

/// Stateless client for the MeasureSpace forecast and geocoding endpoints.
/// One GET per call, no retries, no caching.
#[derive(Clone)]
pub struct MeasureSpaceClient {
    client: Arc<Client>,
    endpoints: Endpoints,
}

impl MeasureSpaceClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoints(Endpoints::default())
    }

    pub fn with_endpoints(endpoints: Endpoints) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client: Arc::new(client),
            endpoints,
        })
    }

    /// Makes one GET request with the API-key header and parses the JSON body
    async fn call_api(&self, api_key: &str, url: &str, params: &[(&str, String)]) -> Result<Value> {
        let response = self
            .client
            .get(url)
            .header("X-API-Key", api_key)
            .header(CONTENT_TYPE, "application/json")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let data = serde_json::from_str(&body)?;
        Ok(data)
    }

    pub async fn hourly_weather(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
        variables: &str,
        unit: UnitSystem,
    ) -> Result<Value> {
        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("variables", variables.to_string()),
            ("unit", unit.as_str().to_string()),
        ];
        self.call_api(api_key, &self.endpoints.hourly_weather, &params)
            .await
    }

    pub async fn daily_weather(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
        variables: &str,
        unit: UnitSystem,
    ) -> Result<Value> {
        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("variables", variables.to_string()),
            ("unit", unit.as_str().to_string()),
        ];
        self.call_api(api_key, &self.endpoints.daily_weather, &params)
            .await
    }

    pub async fn daily_climate(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
        variables: &str,
        unit: UnitSystem,
    ) -> Result<Value> {
        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("variables", variables.to_string()),
            ("unit", unit.as_str().to_string()),
        ];
        self.call_api(api_key, &self.endpoints.daily_climate, &params)
            .await
    }

    pub async fn hourly_air_quality(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
        variables: &str,
    ) -> Result<Value> {
        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("variables", variables.to_string()),
        ];
        self.call_api(api_key, &self.endpoints.hourly_air_quality, &params)
            .await
    }

    pub async fn daily_air_quality(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
        variables: &str,
    ) -> Result<Value> {
        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("variables", variables.to_string()),
        ];
        self.call_api(api_key, &self.endpoints.daily_air_quality, &params)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn growing_degree_days(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
        start_date: &str,
        end_date: &str,
        base_temperature: f64,
        lower_cutoff: Option<f64>,
        upper_cutoff: Option<f64>,
        unit: TemperatureUnit,
    ) -> Result<Value> {
        let mut params = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("start_date", start_date.to_string()),
            ("end_date", end_date.to_string()),
            ("base_temperature", base_temperature.to_string()),
        ];
        if let Some(lower) = lower_cutoff {
            params.push(("lower_cutoff", lower.to_string()));
        }
        if let Some(upper) = upper_cutoff {
            params.push(("upper_cutoff", upper.to_string()));
        }
        params.push(("unit", unit.as_str().to_string()));
        self.call_api(api_key, &self.endpoints.growing_degree_days, &params)
            .await
    }

    pub async fn growth_stage(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
        start_date: &str,
        end_date: &str,
        crop_name: &str,
        unit: TemperatureUnit,
    ) -> Result<Value> {
        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("start_date", start_date.to_string()),
            ("end_date", end_date.to_string()),
            ("crop_name", crop_name.to_string()),
            ("unit", unit.as_str().to_string()),
        ];
        self.call_api(api_key, &self.endpoints.growth_stage, &params)
            .await
    }

    pub async fn heat_stress_days(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
        start_date: &str,
        end_date: &str,
        crop_name: Option<&str>,
        heat_stress_threshold: Option<f64>,
    ) -> Result<Value> {
        let mut params = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("start_date", start_date.to_string()),
            ("end_date", end_date.to_string()),
        ];
        if let Some(crop) = crop_name {
            params.push(("crop_name", crop.to_string()));
        }
        if let Some(threshold) = heat_stress_threshold {
            params.push(("heat_stress_threshold", threshold.to_string()));
        }
        self.call_api(api_key, &self.endpoints.heat_stress_days, &params)
            .await
    }

    pub async fn frost_stress_days(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
        start_date: &str,
        end_date: &str,
        frost_stress_threshold: Option<f64>,
    ) -> Result<Value> {
        let mut params = vec![
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
            ("start_date", start_date.to_string()),
            ("end_date", end_date.to_string()),
        ];
        if let Some(threshold) = frost_stress_threshold {
            params.push(("frost_stress_threshold", threshold.to_string()));
        }
        self.call_api(api_key, &self.endpoints.frost_stress_days, &params)
            .await
    }

    pub async fn daily_pollen(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Value> {
        let params = [
            ("latitude", latitude.to_string()),
            ("longitude", longitude.to_string()),
        ];
        self.call_api(api_key, &self.endpoints.daily_pollen, &params)
            .await
    }

    /// Geocodes a free-text location name to coordinates. Requests a single
    /// match; `(None, None)` when nothing matched, which is not an error.
    pub async fn lat_lon_from_city(
        &self,
        api_key: &str,
        location_name: &str,
    ) -> Result<(Option<f64>, Option<f64>)> {
        let params = [
            ("query", location_name.to_string()),
            ("limit", "1".to_string()),
        ];
        let value = self
            .call_api(api_key, &self.endpoints.autocomplete, &params)
            .await?;
        let response: AutocompleteResponse = serde_json::from_value(value)?;

        Ok(match response.results.first() {
            Some(city) => (Some(city.lat), Some(city.lon)),
            None => (None, None),
        })
    }

    /// Reverse geocodes coordinates to the nearest city record. An empty
    /// result set yields the literal string "Not Found" rather than an error.
    pub async fn city_from_lat_lon(
        &self,
        api_key: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<Value> {
        let params = [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("limit", "1".to_string()),
        ];
        let value = self
            .call_api(api_key, &self.endpoints.nearest_city, &params)
            .await?;
        let mut response: NearestCityResponse = serde_json::from_value(value)?;

        if response.results.is_empty() {
            Ok(Value::String("Not Found".to_string()))
        } else {
            Ok(response.results.swap_remove(0))
        }
    }
}
