/// Per-category API keys for the upstream endpoints.
///
/// Keys are read from the environment at startup. A missing variable becomes
/// an empty string; presence is not validated here, so a bad key surfaces as
/// an upstream authentication failure rather than a startup error.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub geocoding_api_key: String,
    pub hourly_weather_api_key: String,
    pub daily_weather_api_key: String,
    pub daily_climate_api_key: String,
    pub air_quality_api_key: String,
    pub agriculture_api_key: String,
    pub pollen_api_key: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            geocoding_api_key: env_or_empty("GEOCODING_API_KEY"),
            hourly_weather_api_key: env_or_empty("HOURLY_WEATHER_API_KEY"),
            daily_weather_api_key: env_or_empty("DAILY_WEATHER_API_KEY"),
            daily_climate_api_key: env_or_empty("DAILY_CLIMATE_API_KEY"),
            air_quality_api_key: env_or_empty("AIR_QUALITY_API_KEY"),
            agriculture_api_key: env_or_empty("AGRICULTURE_API_KEY"),
            pollen_api_key: env_or_empty("POLLEN_API_KEY"),
        }
    }

    /// Placeholder keys so the tool schemas can be scanned without real
    /// credentials. Calls made with this config fail upstream.
    pub fn sandbox() -> Self {
        Self {
            geocoding_api_key: "sandbox-key".to_string(),
            hourly_weather_api_key: "sandbox-key".to_string(),
            daily_weather_api_key: "sandbox-key".to_string(),
            daily_climate_api_key: "sandbox-key".to_string(),
            air_quality_api_key: "sandbox-key".to_string(),
            agriculture_api_key: "sandbox-key".to_string(),
            pollen_api_key: "sandbox-key".to_string(),
        }
    }
}

fn env_or_empty(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sandbox_config_has_placeholder_keys() {
        let config = ServerConfig::sandbox();
        assert_eq!(config.geocoding_api_key, "sandbox-key");
        assert_eq!(config.pollen_api_key, "sandbox-key");
    }
}
