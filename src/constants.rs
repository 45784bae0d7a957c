/// User agent string for HTTP requests
pub const USER_AGENT: &str = "measure-space-mcp/0.1.0";

// ============================================================================
// Upstream endpoint URLs (AWS API Gateway, one per data category)
// ============================================================================

pub const HOURLY_WEATHER_URL: &str =
    "https://q0np6mu0vi.execute-api.us-east-1.amazonaws.com/prd/global-hourly-weather-forecast";
pub const DAILY_WEATHER_URL: &str =
    "https://4y0sy5lved.execute-api.us-east-1.amazonaws.com/prd/global-daily-weather-forecast";
pub const DAILY_CLIMATE_URL: &str =
    "https://d43arqqeh8.execute-api.us-east-1.amazonaws.com/prd/global-daily-climate-forecast";
pub const HOURLY_AIR_QUALITY_URL: &str =
    "https://pawsqe3sob.execute-api.us-east-1.amazonaws.com/prd/global-hourly-air-quality-forecast";
pub const DAILY_AIR_QUALITY_URL: &str =
    "https://pawsqe3sob.execute-api.us-east-1.amazonaws.com/prd/global-daily-air-quality-forecast";
pub const GROWING_DEGREE_DAYS_URL: &str =
    "https://jm1t8b6xs3.execute-api.us-east-1.amazonaws.com/prd/growing-degree-days";
pub const GROWTH_STAGE_URL: &str =
    "https://jm1t8b6xs3.execute-api.us-east-1.amazonaws.com/prd/growth-stage";
pub const HEAT_STRESS_DAYS_URL: &str =
    "https://jm1t8b6xs3.execute-api.us-east-1.amazonaws.com/prd/heat-stress-days";
pub const FROST_STRESS_DAYS_URL: &str =
    "https://jm1t8b6xs3.execute-api.us-east-1.amazonaws.com/prd/frost-stress-days";
pub const DAILY_POLLEN_URL: &str =
    "https://x2vqf07au9.execute-api.us-east-1.amazonaws.com/prd/global-daily-pollen-forecast";
pub const NEAREST_CITY_URL: &str =
    "https://ncstsm9hel.execute-api.us-east-1.amazonaws.com/prd/nearest-city";
pub const AUTOCOMPLETE_URL: &str =
    "https://ncstsm9hel.execute-api.us-east-1.amazonaws.com/prd/autocomplete";

// ============================================================================
// Fixed variable selections, one per forecast tool
// ============================================================================

// Each string is both the upstream `variables` query parameter and the input
// to metadata resolution, so a tool's metadata keys match exactly what it
// requested.

pub const DAILY_WEATHER_VARS: &str =
    "tp,minT,maxT,timezone,sunrise,sunset,meanWindSpeed,meanWindDegree,minApparentT,maxApparentT";
pub const HOURLY_WEATHER_VARS: &str =
    "tp,t2m,timezone,windSpeed,windDegree,r2,d2m,sde,vis,sp,tcc,apparentT";
pub const DAILY_CLIMATE_VARS: &str = "t2m,tmin,tmax,u10,v10,sh2,st,soilw,prate,dswrf";
pub const HOURLY_AIR_QUALITY_VARS: &str = "CO,NO,NO2,SO2,O3,PM25,PM10,AQI,DP";
pub const DAILY_AIR_QUALITY_VARS: &str = "AQI,maxPM25,maxPM10,maxO3,maxSO2,maxNO2,maxNO,maxCO";
pub const GROWING_DEGREE_DAYS_VARS: &str = "gdd";
pub const GROWTH_STAGE_VARS: &str = "gdd_accumulated,gdd_required_to_next_stage";
pub const HEAT_STRESS_DAYS_VARS: &str = "heat_stress_threshold";
pub const FROST_STRESS_DAYS_VARS: &str = "frost_stress_threshold";
