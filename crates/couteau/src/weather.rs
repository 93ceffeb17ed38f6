use crate::prelude::*;
use crate::render::{rule, Render};
use colored::Colorize;
use couteau_core::weather::{WeatherIcon, WeatherSnapshot, DEFAULT_LOCATION};

#[derive(Debug, clap::Args, Clone)]
pub struct Options {
    /// wttr.in location (city name, airport code, coordinates...)
    #[arg(short, long, env = "COUTEAU_LOCATION", default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: Options, global: crate::Global) -> Result<()> {
    let tool = crate::config::EndpointConfig::from_env().weather_tool();
    crate::render::run_once(tool, &options.location, options.json, &global).await
}

fn icon_glyph(icon: WeatherIcon) -> &'static str {
    match icon {
        WeatherIcon::Rainy => "🌧",
        WeatherIcon::Cloudy => "☁",
        WeatherIcon::Sunny => "☀",
    }
}

impl Render for WeatherSnapshot {
    fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{}\n", rule().bright_cyan()));
        out.push_str(&format!(
            "{} {}\n",
            icon_glyph(self.icon),
            self.area
                .as_deref()
                .unwrap_or("Current weather")
                .white()
                .bold()
        ));
        out.push_str(&format!("{}\n", rule().bright_cyan()));
        out.push_str(&format!(
            "{}°C  {}\n",
            self.temperature_c.to_string().bright_yellow().bold(),
            self.description
        ));
        out.push_str(&format!(
            "{}: {}°C | {}: {}% | {}: {} km/h",
            "Feels like".green(),
            self.feels_like_c,
            "Humidity".green(),
            self.humidity,
            "Wind".green(),
            self.wind_speed_kmph
        ));
        if let Some(observed) = &self.observed_at {
            out.push_str(&format!("\n{}", format!("Observed {observed}").bright_black()));
        }
        out
    }
}
