use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::{TemperatureUnit, UnitSystem};

// ============================================================================
// Geocoding API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    #[serde(default)]
    pub results: Vec<CityMatch>,
}

#[derive(Debug, Deserialize)]
pub struct CityMatch {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub struct NearestCityResponse {
    #[serde(default)]
    pub results: Vec<Value>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct ForecastRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
    /// Unit system: 'metric' or 'imperial'
    #[serde(default)]
    pub unit: UnitSystem,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CoordinatesRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GrowingDegreeDaysRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
    /// Start date in YYYY-MM-DD format
    pub start_date: String,
    /// End date in YYYY-MM-DD format
    pub end_date: String,
    /// Base temperature threshold
    #[serde(default = "default_base_temperature")]
    pub base_temperature: f64,
    /// Lower cutoff temperature
    #[serde(default)]
    pub lower_cutoff: Option<f64>,
    /// Upper cutoff temperature
    #[serde(default)]
    pub upper_cutoff: Option<f64>,
    /// Temperature unit: 'F' or 'C'
    #[serde(default)]
    pub unit: TemperatureUnit,
}

fn default_base_temperature() -> f64 {
    50.0
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GrowthStageRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
    /// Start date in YYYY-MM-DD format
    pub start_date: String,
    /// End date in YYYY-MM-DD format
    pub end_date: String,
    /// Name of the crop (e.g., 'corn', 'soybean', 'wheat')
    pub crop_name: String,
    /// Temperature unit: 'F' or 'C'
    #[serde(default)]
    pub unit: TemperatureUnit,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct HeatStressDaysRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
    /// Start date in YYYY-MM-DD format
    pub start_date: String,
    /// End date in YYYY-MM-DD format
    pub end_date: String,
    /// Name of the crop
    #[serde(default)]
    pub crop_name: Option<String>,
    /// Temperature threshold for heat stress
    #[serde(default)]
    pub heat_stress_threshold: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct FrostStressDaysRequest {
    /// Latitude of the location
    pub latitude: f64,
    /// Longitude of the location
    pub longitude: f64,
    /// Start date in YYYY-MM-DD format
    pub start_date: String,
    /// End date in YYYY-MM-DD format
    pub end_date: String,
    /// Temperature threshold for frost stress
    #[serde(default)]
    pub frost_stress_threshold: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GeocodeCityRequest {
    /// City or location name to geocode
    pub location_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_request_defaults_to_metric() {
        let req: ForecastRequest =
            serde_json::from_str(r#"{"latitude": 48.85, "longitude": 2.35}"#).unwrap();
        assert_eq!(req.unit, UnitSystem::Metric);
    }

    #[test]
    fn unit_system_accepts_lowercase_names() {
        let req: ForecastRequest = serde_json::from_str(
            r#"{"latitude": 0.0, "longitude": 0.0, "unit": "imperial"}"#,
        )
        .unwrap();
        assert_eq!(req.unit, UnitSystem::Imperial);
    }

    #[test]
    fn gdd_request_defaults() {
        let req: GrowingDegreeDaysRequest = serde_json::from_str(
            r#"{"latitude": 41.0, "longitude": -93.0, "start_date": "2025-04-01", "end_date": "2025-09-01"}"#,
        )
        .unwrap();
        assert_eq!(req.base_temperature, 50.0);
        assert_eq!(req.unit, TemperatureUnit::F);
        assert!(req.lower_cutoff.is_none());
        assert!(req.upper_cutoff.is_none());
    }

    #[test]
    fn autocomplete_response_tolerates_missing_results() {
        let res: AutocompleteResponse = serde_json::from_str("{}").unwrap();
        assert!(res.results.is_empty());
    }
}
