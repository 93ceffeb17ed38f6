use serde::{Deserialize, Serialize};

use crate::error::MappingError;
use crate::tool::{base, Tool};

pub const WTTR_API_BASE: &str = "https://wttr.in";

/// Location queried when the caller does not name one
pub const DEFAULT_LOCATION: &str = "SantoDomingo";

/// wttr.in `format=j1` response (only the parts we read)
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WttrResponse {
    pub current_condition: Vec<WttrCondition>,
    #[serde(default)]
    pub nearest_area: Vec<WttrArea>,
}

/// wttr.in reports every number as a string
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WttrCondition {
    #[serde(rename = "temp_C")]
    pub temp_c: String,
    #[serde(rename = "FeelsLikeC")]
    pub feels_like_c: String,
    pub humidity: String,
    #[serde(rename = "windspeedKmph")]
    pub windspeed_kmph: String,
    #[serde(rename = "weatherDesc")]
    pub weather_desc: Vec<WttrValue>,
    #[serde(rename = "localObsDateTime", default)]
    pub local_obs_date_time: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WttrArea {
    #[serde(rename = "areaName", default)]
    pub area_name: Vec<WttrValue>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct WttrValue {
    pub value: String,
}

/// Coarse icon category derived from the free-text description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherIcon {
    Rainy,
    Cloudy,
    Sunny,
}

impl WeatherIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherIcon::Rainy => "rainy",
            WeatherIcon::Cloudy => "cloudy",
            WeatherIcon::Sunny => "sunny",
        }
    }
}

/// Keyword rules, checked in order; the first rule with a matching keyword wins.
const ICON_RULES: &[(&[&str], WeatherIcon)] = &[
    (&["rain", "shower"], WeatherIcon::Rainy),
    (&["cloud"], WeatherIcon::Cloudy),
    (&["clear", "sunny"], WeatherIcon::Sunny),
];

const DEFAULT_ICON: WeatherIcon = WeatherIcon::Cloudy;

/// Pick an icon for a weather description (case-insensitive substring match)
pub fn classify_description(description: &str) -> WeatherIcon {
    let desc = description.to_lowercase();
    ICON_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| desc.contains(k)))
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Current conditions at one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeatherSnapshot {
    pub area: Option<String>,
    pub temperature_c: i32,
    pub feels_like_c: i32,
    pub humidity: u32,
    pub wind_speed_kmph: u32,
    pub description: String,
    pub icon: WeatherIcon,
    pub observed_at: Option<String>,
}

fn parse_number<N: std::str::FromStr>(field: &'static str, raw: &str) -> Result<N, MappingError> {
    raw.trim()
        .parse()
        .map_err(|_| MappingError::Shape(format!("`{field}` is not a number: {raw:?}")))
}

/// Transform a wttr.in response into a weather snapshot
///
/// Only the first entry of `current_condition` (and of its `weatherDesc`) is
/// read.
pub fn transform_weather(response: WttrResponse) -> Result<WeatherSnapshot, MappingError> {
    let current = response
        .current_condition
        .into_iter()
        .next()
        .ok_or(MappingError::Empty("current_condition"))?;

    let description = current
        .weather_desc
        .into_iter()
        .next()
        .map(|d| d.value.trim().to_string())
        .ok_or(MappingError::Empty("weatherDesc"))?;

    let area = response
        .nearest_area
        .into_iter()
        .next()
        .and_then(|a| a.area_name.into_iter().next())
        .map(|v| v.value);

    Ok(WeatherSnapshot {
        area,
        temperature_c: parse_number("temp_C", &current.temp_c)?,
        feels_like_c: parse_number("FeelsLikeC", &current.feels_like_c)?,
        humidity: parse_number("humidity", &current.humidity)?,
        wind_speed_kmph: parse_number("windspeedKmph", &current.windspeed_kmph)?,
        icon: classify_description(&description),
        description,
        observed_at: current.local_obs_date_time,
    })
}

/// location -> current weather lookup against wttr.in
#[derive(Debug, Clone)]
pub struct WeatherTool {
    pub base_url: String,
}

impl Default for WeatherTool {
    fn default() -> Self {
        Self {
            base_url: WTTR_API_BASE.to_string(),
        }
    }
}

impl Tool for WeatherTool {
    type Output = WeatherSnapshot;
    const NAME: &'static str = "weather";

    fn build_url(&self, input: &str) -> String {
        format!(
            "{}/{}?format=j1",
            base(&self.base_url),
            urlencoding::encode(input)
        )
    }

    fn map(&self, payload: &serde_json::Value) -> Result<WeatherSnapshot, MappingError> {
        let response = WttrResponse::deserialize(payload)?;
        transform_weather(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    fn payload(description: &str) -> serde_json::Value {
        json!({
            "current_condition": [{
                "FeelsLikeC": "34",
                "humidity": "74",
                "temp_C": "30",
                "weatherDesc": [{"value": description}],
                "windspeedKmph": "17",
                "localObsDateTime": "2026-10-19 10:12 AM"
            }],
            "nearest_area": [{"areaName": [{"value": "Santo Domingo"}]}]
        })
    }

    #[test]
    fn test_build_url() {
        assert_eq!(
            WeatherTool::default().build_url(DEFAULT_LOCATION),
            "https://wttr.in/SantoDomingo?format=j1"
        );
    }

    #[test]
    fn test_map_snapshot() {
        let snapshot = WeatherTool::default()
            .map(&payload("Partly cloudy"))
            .unwrap();

        assert_eq!(snapshot.area.as_deref(), Some("Santo Domingo"));
        assert_eq!(snapshot.temperature_c, 30);
        assert_eq!(snapshot.feels_like_c, 34);
        assert_eq!(snapshot.humidity, 74);
        assert_eq!(snapshot.wind_speed_kmph, 17);
        assert_eq!(snapshot.description, "Partly cloudy");
        assert_eq!(snapshot.icon, WeatherIcon::Cloudy);
        assert_eq!(snapshot.observed_at.as_deref(), Some("2026-10-19 10:12 AM"));
    }

    #[test]
    fn test_map_reads_first_condition_only() {
        let mut value = payload("Sunny");
        value["current_condition"]
            .as_array_mut()
            .unwrap()
            .push(json!({
                "FeelsLikeC": "1", "humidity": "1", "temp_C": "1",
                "weatherDesc": [{"value": "Heavy rain"}], "windspeedKmph": "1"
            }));

        let snapshot = WeatherTool::default().map(&value).unwrap();
        assert_eq!(snapshot.icon, WeatherIcon::Sunny);
        assert_eq!(snapshot.temperature_c, 30);
    }

    #[test]
    fn test_map_negative_temperature() {
        let mut value = payload("Clear");
        value["current_condition"][0]["temp_C"] = json!("-3");
        let snapshot = WeatherTool::default().map(&value).unwrap();
        assert_eq!(snapshot.temperature_c, -3);
    }

    #[test]
    fn test_map_without_area() {
        let mut value = payload("Clear");
        value.as_object_mut().unwrap().remove("nearest_area");
        let snapshot = WeatherTool::default().map(&value).unwrap();
        assert_eq!(snapshot.area, None);
    }

    #[test]
    fn test_map_empty_conditions_is_malformed() {
        let err = WeatherTool::default()
            .map(&json!({"current_condition": []}))
            .unwrap_err();
        assert_eq!(err, MappingError::Empty("current_condition"));
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_map_non_numeric_field_is_malformed() {
        let mut value = payload("Clear");
        value["current_condition"][0]["humidity"] = json!("n/a");
        let err = WeatherTool::default().map(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_map_missing_description_is_malformed() {
        let mut value = payload("Clear");
        value["current_condition"][0]["weatherDesc"] = json!([]);
        let err = WeatherTool::default().map(&value).unwrap_err();
        assert_eq!(err, MappingError::Empty("weatherDesc"));
    }

    #[test]
    fn test_classify_rain_and_shower() {
        assert_eq!(classify_description("Light rain"), WeatherIcon::Rainy);
        assert_eq!(classify_description("Patchy rain nearby"), WeatherIcon::Rainy);
        assert_eq!(classify_description("Light Shower"), WeatherIcon::Rainy);
    }

    #[test]
    fn test_classify_rain_beats_cloud() {
        assert_eq!(
            classify_description("Cloudy with rain showers"),
            WeatherIcon::Rainy
        );
    }

    #[test]
    fn test_classify_cloud_beats_clear() {
        assert_eq!(
            classify_description("Clearing, partly CLOUDY"),
            WeatherIcon::Cloudy
        );
    }

    #[test]
    fn test_classify_sunny_and_clear() {
        assert_eq!(classify_description("Sunny"), WeatherIcon::Sunny);
        assert_eq!(classify_description("clear"), WeatherIcon::Sunny);
    }

    #[test]
    fn test_classify_defaults_to_cloudy() {
        assert_eq!(classify_description("Mist"), WeatherIcon::Cloudy);
        assert_eq!(classify_description(""), WeatherIcon::Cloudy);
    }
}
