use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde_json::{json, Value};

use crate::client::MeasureSpaceClient;
use crate::config::ServerConfig;
use crate::constants::{
    DAILY_AIR_QUALITY_VARS, DAILY_CLIMATE_VARS, DAILY_WEATHER_VARS, FROST_STRESS_DAYS_VARS,
    GROWING_DEGREE_DAYS_VARS, GROWTH_STAGE_VARS, HEAT_STRESS_DAYS_VARS, HOURLY_AIR_QUALITY_VARS,
    HOURLY_WEATHER_VARS,
};
use crate::metadata::{load_metadata, UnitSystem};
use crate::models::{
    CoordinatesRequest, ForecastRequest, FrostStressDaysRequest, GeocodeCityRequest,
    GrowingDegreeDaysRequest, GrowthStageRequest, HeatStressDaysRequest,
};

/// MCP service exposing the MeasureSpace forecast and geocoding endpoints
/// as tools
#[derive(Clone)]
pub struct MeasureSpace {
    client: MeasureSpaceClient,
    config: ServerConfig,
    tool_router: ToolRouter<Self>,
}

impl MeasureSpace {
    pub fn new(config: ServerConfig) -> Result<Self> {
        Ok(Self {
            client: MeasureSpaceClient::new()?,
            config,
            tool_router: Self::tool_router(),
        })
    }

    /// Builds the service with placeholder credentials, for schema scanning
    /// without real API keys
    pub fn sandbox() -> Result<Self> {
        Self::new(ServerConfig::sandbox())
    }

    /// Renders any JSON value as a single pretty-printed text block
    fn text_result(payload: &Value) -> Result<CallToolResult, McpError> {
        let text = serde_json::to_string_pretty(payload).map_err(|e| {
            McpError::internal_error(format!("Failed to serialize result: {}", e), None)
        })?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Forecast tools always pair the upstream result with the metadata for
    /// the variables they requested
    fn forecast_result(result: Value, variables: &str, unit: UnitSystem) -> Result<CallToolResult, McpError> {
        let metadata = load_metadata(variables, unit);
        Self::text_result(&json!({ "result": result, "metadata": metadata }))
    }
}

#[tool_handler]
impl ServerHandler for MeasureSpace {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "measure-space-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "This is a weather, climate, air quality, agriculture and geocoding server. \
                You can get weather, climate, air quality and pollen forecasts, agriculture \
                metrics, and geocoding information by calling the available tools."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl MeasureSpace {
    #[tool(description = "Get daily weather forecast for next 15 days.")]
    async fn daily_weather_forecast(
        &self,
        Parameters(request): Parameters<ForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting daily weather forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self
            .client
            .daily_weather(
                &self.config.daily_weather_api_key,
                request.latitude,
                request.longitude,
                DAILY_WEATHER_VARS,
                request.unit,
            )
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to fetch daily weather forecast: {}", e), None)
            })?;

        Self::forecast_result(result, DAILY_WEATHER_VARS, request.unit)
    }

    #[tool(description = "Get hourly weather forecast for next 5 days.")]
    async fn hourly_weather_forecast(
        &self,
        Parameters(request): Parameters<ForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting hourly weather forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self
            .client
            .hourly_weather(
                &self.config.hourly_weather_api_key,
                request.latitude,
                request.longitude,
                HOURLY_WEATHER_VARS,
                request.unit,
            )
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to fetch hourly weather forecast: {}", e), None)
            })?;

        Self::forecast_result(result, HOURLY_WEATHER_VARS, request.unit)
    }

    #[tool(description = "Get daily climate forecast for next 9 months.")]
    async fn daily_climate_forecast(
        &self,
        Parameters(request): Parameters<ForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting daily climate forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self
            .client
            .daily_climate(
                &self.config.daily_climate_api_key,
                request.latitude,
                request.longitude,
                DAILY_CLIMATE_VARS,
                request.unit,
            )
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to fetch daily climate forecast: {}", e), None)
            })?;

        Self::forecast_result(result, DAILY_CLIMATE_VARS, request.unit)
    }

    #[tool(description = "Get hourly air quality forecast for next 4 days.")]
    async fn hourly_air_quality_forecast(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting hourly air quality forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self
            .client
            .hourly_air_quality(
                &self.config.air_quality_api_key,
                request.latitude,
                request.longitude,
                HOURLY_AIR_QUALITY_VARS,
            )
            .await
            .map_err(|e| {
                McpError::internal_error(
                    format!("Failed to fetch hourly air quality forecast: {}", e),
                    None,
                )
            })?;

        Self::forecast_result(result, HOURLY_AIR_QUALITY_VARS, UnitSystem::Metric)
    }

    #[tool(description = "Get daily air quality forecast for next 4 days.")]
    async fn daily_air_quality_forecast(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting daily air quality forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self
            .client
            .daily_air_quality(
                &self.config.air_quality_api_key,
                request.latitude,
                request.longitude,
                DAILY_AIR_QUALITY_VARS,
            )
            .await
            .map_err(|e| {
                McpError::internal_error(
                    format!("Failed to fetch daily air quality forecast: {}", e),
                    None,
                )
            })?;

        Self::forecast_result(result, DAILY_AIR_QUALITY_VARS, UnitSystem::Metric)
    }

    #[tool(description = "Get growing degree days (GDD) for given latitude and longitude.")]
    async fn growing_degree_days(
        &self,
        Parameters(request): Parameters<GrowingDegreeDaysRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting growing degree days for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self
            .client
            .growing_degree_days(
                &self.config.agriculture_api_key,
                request.latitude,
                request.longitude,
                &request.start_date,
                &request.end_date,
                request.base_temperature,
                request.lower_cutoff,
                request.upper_cutoff,
                request.unit,
            )
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to fetch growing degree days: {}", e), None)
            })?;

        Self::forecast_result(result, GROWING_DEGREE_DAYS_VARS, request.unit.unit_system())
    }

    #[tool(description = "Get crop growth stage for given latitude and longitude.")]
    async fn growth_stage(
        &self,
        Parameters(request): Parameters<GrowthStageRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting growth stage for crop: {}",
            request.crop_name
        );

        let result = self
            .client
            .growth_stage(
                &self.config.agriculture_api_key,
                request.latitude,
                request.longitude,
                &request.start_date,
                &request.end_date,
                &request.crop_name,
                request.unit,
            )
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to fetch growth stage: {}", e), None)
            })?;

        Self::forecast_result(result, GROWTH_STAGE_VARS, request.unit.unit_system())
    }

    #[tool(description = "Get heat stress days for given latitude and longitude.")]
    async fn heat_stress_days(
        &self,
        Parameters(request): Parameters<HeatStressDaysRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting heat stress days for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self
            .client
            .heat_stress_days(
                &self.config.agriculture_api_key,
                request.latitude,
                request.longitude,
                &request.start_date,
                &request.end_date,
                request.crop_name.as_deref(),
                request.heat_stress_threshold,
            )
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to fetch heat stress days: {}", e), None)
            })?;

        Self::forecast_result(result, HEAT_STRESS_DAYS_VARS, UnitSystem::Metric)
    }

    #[tool(description = "Get frost stress days for given latitude and longitude.")]
    async fn frost_stress_days(
        &self,
        Parameters(request): Parameters<FrostStressDaysRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting frost stress days for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self
            .client
            .frost_stress_days(
                &self.config.agriculture_api_key,
                request.latitude,
                request.longitude,
                &request.start_date,
                &request.end_date,
                request.frost_stress_threshold,
            )
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to fetch frost stress days: {}", e), None)
            })?;

        Self::forecast_result(result, FROST_STRESS_DAYS_VARS, UnitSystem::Metric)
    }

    #[tool(description = "Get daily pollen forecast for next 5 days.")]
    async fn daily_pollen_forecast(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting daily pollen forecast for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self
            .client
            .daily_pollen(
                &self.config.pollen_api_key,
                request.latitude,
                request.longitude,
            )
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to fetch daily pollen forecast: {}", e), None)
            })?;

        Self::text_result(&result)
    }

    #[tool(description = "Find the latitude and longitude for a given city name.")]
    async fn convert_city_to_latitude_longitude(
        &self,
        Parameters(request): Parameters<GeocodeCityRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Geocoding location: {}", request.location_name);

        let (latitude, longitude) = self
            .client
            .lat_lon_from_city(&self.config.geocoding_api_key, &request.location_name)
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to geocode location: {}", e), None)
            })?;

        Self::text_result(&json!({ "latitude": latitude, "longitude": longitude }))
    }

    #[tool(description = "Find the nearest city for given latitude and longitude.")]
    async fn find_nearest_city_from_latitude_longitude(
        &self,
        Parameters(request): Parameters<CoordinatesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Finding nearest city for coordinates: {}, {}",
            request.latitude,
            request.longitude
        );

        let result = self
            .client
            .city_from_lat_lon(
                &self.config.geocoding_api_key,
                request.latitude,
                request.longitude,
            )
            .await
            .map_err(|e| {
                McpError::internal_error(format!("Failed to find nearest city: {}", e), None)
            })?;

        Self::text_result(&result)
    }
}
