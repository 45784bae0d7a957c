use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Unit system applied to forecast values and metadata unit strings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

/// Temperature unit for agriculture tools ('F' or 'C')
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub enum TemperatureUnit {
    #[default]
    F,
    C,
}

impl TemperatureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::F => "F",
            TemperatureUnit::C => "C",
        }
    }

    /// Unit system used when resolving metadata for agriculture tools
    pub fn unit_system(&self) -> UnitSystem {
        match self {
            TemperatureUnit::C => UnitSystem::Metric,
            TemperatureUnit::F => UnitSystem::Imperial,
        }
    }
}

/// Description and unit string for one variable code. A `None` half means the
/// code is missing from that table, which is a valid partial result, not an
/// error. `None` halves are omitted from the serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
}

/// Best-effort lookup of description and unit for one variable code.
/// Codes are case-sensitive and must match the table keys exactly.
pub fn variable_metadata(code: &str, unit: UnitSystem) -> VariableMetadata {
    VariableMetadata {
        description: description_of(code),
        unit: unit_of(code, unit),
    }
}

/// Resolves a comma-separated variable list into per-code metadata records.
/// Codes are trimmed; first-occurrence order is preserved; unknown codes
/// still get an entry (with both halves omitted) rather than being dropped.
pub fn load_metadata(input_vars: &str, unit: UnitSystem) -> Map<String, Value> {
    let mut metadata = Map::new();
    for code in input_vars.split(',').map(str::trim) {
        if metadata.contains_key(code) {
            continue;
        }
        let record = variable_metadata(code, unit);
        if record.description.is_none() && record.unit.is_none() {
            tracing::debug!("no metadata for {}", code);
        }
        // serialization of VariableMetadata cannot fail
        let value = serde_json::to_value(&record).unwrap_or(Value::Null);
        metadata.insert(code.to_string(), value);
    }
    metadata
}

/// Converts variable code to human-readable description
fn description_of(code: &str) -> Option<&'static str> {
    let description = match code {
        "weatherCode" => "weather code used for weather icons",
        "timezone" => "time zone name",
        "sunrise" => "sunrise time",
        "sunset" => "sunset time",
        "tp" => "total precipitation",
        "minT" => "daily minimum temperature",
        "maxT" => "daily maximum temperature",
        "meanT" => "daily mean temperature",
        "meanUWind" => "daily mean eastward wind",
        "meanVWind" => "daily mean northward wind",
        "meanwindSpeed" => "daily mean wind speed",
        "meanwindDegree" => "daily mean wind direction (0-north, 180-south, clockwise)",
        "meanRH" => "daily mean relative humidity",
        "meanDP" => "daily mean dew point temperature",
        "snow" => "daily accumulated snow depth",
        "sunshine" => "daily accumulated sunshine duration",
        "solarR" => "daily accumulated downward shortwave radiation flux",
        "meanVis" => "daily mean visibility",
        "pressure" => "daily mean pressure",
        "meanST" => "daily mean top soil temperature",
        "maxST" => "daily maximum top soil temperature",
        "minST" => "daily minimum top soil temperature",
        "meanSoilw" => "daily mean top soil moisture",
        "crain" => "rain (1) or not (0)",
        "csnow" => "snow (1) or not (0)",
        "cicep" => "ice pellets (1) or not (0)",
        "cfrzr" => "freezing rain (1) or not (0)",
        "meanTcc" => "daily mean total cloud cover",
        "maxPrate" => "daily max precipitation rate",
        "maxCape" => "daily max surface convective available potential energy",
        "precipType" => "precipitation type (0-no precip, 1-rain, 2-snow, 3-freezing rain, 4-ice pellets)",
        "minApparentT" => "minimum apparent temperature (i.e. feels-like temperature)",
        "maxApparentT" => "maximum apparent temperature (i.e. feels-like temperature)",
        "t2m" => "2m air temperature",
        "tmin" => "daily minimum air temperature",
        "tmax" => "daily maximum air temperature",
        "u10" => "10m eastward wind",
        "v10" => "10m northward wind",
        "sh2" => "daily mean specific humidity",
        "st" => "top soil temperature",
        "soilw" => "top soil moisture",
        "prate" => "precipitation rate",
        "sdwe" => "daily total water equivalent snow depth",
        "dswrf" => "downward shortwave radiation flux",
        "CO" => "carbon monoxide concentration",
        "NO" => "nitric monoxide concentration",
        "NO2" => "nitrogen monoxide concentration",
        "SO2" => "sulfur monoxide concentration",
        "O3" => "ozone concentration",
        "PM25" => "particulate matter 2.5 concentration",
        "PM10" => "particulate matter 10 concentration",
        "AQI" => "air quality index",
        "DP" => "dominant pollutant according to AQI",
        "meanCO" => "daily mean carbon monoxide concentration",
        "meanNO" => "daily mean nitric monoxide concentration",
        "meanNO2" => "daily mean nitrogen monoxide concentration",
        "meanSO2" => "daily mean sulfur monoxide concentration",
        "meanO3" => "daily mean ozone concentration",
        "meanPM25" => "daily mean particulate matter 2.5 concentration",
        "meanPM10" => "daily mean particulate matter 10 concentration",
        "maxCO" => "daily maximum carbon monoxide concentration",
        "maxNO" => "daily maximum nitric monoxide concentration",
        "maxNO2" => "daily maximum nitrogen monoxide concentration",
        "maxSO2" => "daily maximum sulfur monoxide concentration",
        "maxO3" => "daily maximum ozone concentration",
        "maxPM25" => "daily maximum particulate matter 2.5 concentration",
        "maxPM10" => "daily maximum particulate matter 10 concentration",
        _ => return None,
    };
    Some(description)
}

/// Converts variable code to its unit string in the given unit system
fn unit_of(code: &str, unit: UnitSystem) -> Option<&'static str> {
    match unit {
        UnitSystem::Metric => metric_unit_of(code),
        UnitSystem::Imperial => imperial_unit_of(code),
    }
}

fn metric_unit_of(code: &str) -> Option<&'static str> {
    let unit = match code {
        "tp" => "mm",
        "t2m" => "C",
        "u10" => "km/h",
        "v10" => "km/h",
        "windSpeed" => "km/h",
        "windDegree" => "degree",
        "r2" => "%",
        "d2m" => "C",
        "sde" => "m",
        "sunsd" => "s",
        "dswrf" => "w/m^2",
        "vis" => "km",
        "sp" => "Pa",
        "st" => "C",
        "crain" => "0/1",
        "csnow" => "0/1",
        "cicep" => "0/1",
        "cfrzr" => "0/1",
        "tcc" => "%",
        "prate" => "kg/m^2/s",
        "cape" => "J/kg",
        "precipType" => "0/1/2/3/4",
        "apparentT" => "C",
        "minT" => "C",
        "maxT" => "C",
        "meanT" => "C",
        "meanUWind" => "km/h",
        "meanVWind" => "km/h",
        "meanwindSpeed" => "km/h",
        "meanwindDegree" => "degree",
        "meanRH" => "%",
        "meanDP" => "C",
        "snow" => "m",
        "sunshine" => "s",
        "solarR" => "w/m^2",
        "meanVis" => "km",
        "pressure" => "Pa",
        "meanST" => "C",
        "maxST" => "C",
        "minST" => "C",
        "meanTcc" => "%",
        "maxPrate" => "kg/m^2/s",
        "maxCape" => "J/kg",
        "minApparentT" => "C",
        "maxApparentT" => "C",
        "tmin" => "C",
        "tmax" => "C",
        "sh2" => "%",
        "sdwe" => "m",
        "CO" => "µg/m^3",
        "NO" => "µg/m^3",
        "NO2" => "µg/m^3",
        "SO2" => "µg/m^3",
        "O3" => "µg/m^3",
        "PM25" => "µg/m^3",
        "PM10" => "µg/m^3",
        "meanCO" => "µg/m^3",
        "meanNO" => "µg/m^3",
        "meanNO2" => "µg/m^3",
        "meanSO2" => "µg/m^3",
        "meanO3" => "µg/m^3",
        "meanPM25" => "µg/m^3",
        "meanPM10" => "µg/m^3",
        "maxCO" => "µg/m^3",
        "maxNO" => "µg/m^3",
        "maxNO2" => "µg/m^3",
        "maxSO2" => "µg/m^3",
        "maxO3" => "µg/m^3",
        "maxPM25" => "µg/m^3",
        "maxPM10" => "µg/m^3",
        _ => return None,
    };
    Some(unit)
}

fn imperial_unit_of(code: &str) -> Option<&'static str> {
    let unit = match code {
        "tp" => "inch",
        "t2m" => "F",
        "u10" => "miles/h",
        "v10" => "miles/h",
        "windSpeed" => "miles/h",
        "windDegree" => "degree",
        "r2" => "%",
        "d2m" => "F",
        "sde" => "inch",
        "sunsd" => "s",
        "dswrf" => "w/m^2",
        "vis" => "miles",
        "sp" => "Pa",
        "st" => "F",
        "crain" => "0/1",
        "csnow" => "0/1",
        "cicep" => "0/1",
        "cfrzr" => "0/1",
        "tcc" => "%",
        "prate" => "kg/m^2/s",
        "cape" => "J/kg",
        "precipType" => "0/1/2/3/4",
        "apparentT" => "F",
        "minT" => "F",
        "maxT" => "F",
        "meanT" => "F",
        "meanUWind" => "miles/h",
        "meanVWind" => "miles/h",
        "meanwindSpeed" => "miles/h",
        "meanwindDegree" => "degree",
        "meanRH" => "%",
        "meanDP" => "F",
        "snow" => "inch",
        "sunshine" => "s",
        "solarR" => "w/m^2",
        "meanVis" => "miles",
        "pressure" => "Pa",
        "meanST" => "F",
        "maxST" => "F",
        "minST" => "F",
        "meanTcc" => "%",
        "maxPrate" => "kg/m^2/s",
        "maxCape" => "J/kg",
        "minApparentT" => "F",
        "maxApparentT" => "F",
        "tmin" => "F",
        "tmax" => "F",
        "sh2" => "%",
        "sdwe" => "inch",
        "CO" => "µg/m^3",
        "NO" => "µg/m^3",
        "NO2" => "µg/m^3",
        "SO2" => "µg/m^3",
        "O3" => "µg/m^3",
        "PM25" => "µg/m^3",
        "PM10" => "µg/m^3",
        "meanCO" => "µg/m^3",
        "meanNO" => "µg/m^3",
        "meanNO2" => "µg/m^3",
        "meanSO2" => "µg/m^3",
        "meanO3" => "µg/m^3",
        "meanPM25" => "µg/m^3",
        "meanPM10" => "µg/m^3",
        "maxCO" => "µg/m^3",
        "maxNO" => "µg/m^3",
        "maxNO2" => "µg/m^3",
        "maxSO2" => "µg/m^3",
        "maxO3" => "µg/m^3",
        "maxPM25" => "µg/m^3",
        "maxPM10" => "µg/m^3",
        _ => return None,
    };
    Some(unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DAILY_WEATHER_VARS;

    #[test]
    fn known_code_has_description_and_unit() {
        let md = variable_metadata("t2m", UnitSystem::Metric);
        assert_eq!(md.description, Some("2m air temperature"));
        assert_eq!(md.unit, Some("C"));
    }

    #[test]
    fn unit_follows_unit_system() {
        assert_eq!(variable_metadata("t2m", UnitSystem::Metric).unit, Some("C"));
        assert_eq!(variable_metadata("t2m", UnitSystem::Imperial).unit, Some("F"));
        assert_eq!(variable_metadata("tp", UnitSystem::Metric).unit, Some("mm"));
        assert_eq!(variable_metadata("tp", UnitSystem::Imperial).unit, Some("inch"));
    }

    #[test]
    fn unknown_code_yields_empty_record_not_error() {
        let md = variable_metadata("bogus", UnitSystem::Metric);
        assert_eq!(md.description, None);
        assert_eq!(md.unit, None);
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!(variable_metadata("T2M", UnitSystem::Metric).description.is_none());
        assert!(variable_metadata("aqi", UnitSystem::Metric).description.is_none());
    }

    #[test]
    fn description_without_unit_is_tolerated() {
        // `timezone` has a description but no unit in either table
        let md = variable_metadata("timezone", UnitSystem::Metric);
        assert_eq!(md.description, Some("time zone name"));
        assert_eq!(md.unit, None);
    }

    #[test]
    fn unit_without_description_is_tolerated() {
        // hourly codes like `windSpeed` carry units but no description
        let md = variable_metadata("windSpeed", UnitSystem::Metric);
        assert_eq!(md.description, None);
        assert_eq!(md.unit, Some("km/h"));
    }

    #[test]
    fn load_metadata_trims_and_preserves_order() {
        let metadata = load_metadata(" t2m ,AQI, bogus ", UnitSystem::Metric);
        let keys: Vec<&str> = metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["t2m", "AQI", "bogus"]);
        assert_eq!(metadata["t2m"]["unit"], "C");
        assert_eq!(metadata["AQI"]["description"], "air quality index");
        // unknown code still gets an entry, with both halves omitted
        assert_eq!(metadata["bogus"], serde_json::json!({}));
    }

    #[test]
    fn load_metadata_dedupes_repeated_codes() {
        let metadata = load_metadata("t2m,tp,t2m", UnitSystem::Metric);
        assert_eq!(metadata.len(), 2);
    }

    #[test]
    fn daily_weather_vars_all_present() {
        let metadata = load_metadata(DAILY_WEATHER_VARS, UnitSystem::Imperial);
        let expected: Vec<&str> = DAILY_WEATHER_VARS.split(',').collect();
        let keys: Vec<&str> = metadata.keys().map(String::as_str).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn temperature_unit_maps_to_unit_system() {
        assert_eq!(TemperatureUnit::C.unit_system(), UnitSystem::Metric);
        assert_eq!(TemperatureUnit::F.unit_system(), UnitSystem::Imperial);
    }
}
