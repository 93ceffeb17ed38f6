use couteau_core::age::{AgeTool, AGIFY_API_BASE};
use couteau_core::gender::{GenderTool, GENDERIZE_API_BASE};
use couteau_core::news::NewsTool;
use couteau_core::pokemon::{PokemonTool, POKEAPI_BASE};
use couteau_core::universities::{UniversitiesTool, UNIVERSITIES_API_BASE};
use couteau_core::weather::{WeatherTool, WTTR_API_BASE};

/// API base URLs, overridable from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub genderize: String,
    pub agify: String,
    pub universities: String,
    pub wttr: String,
    pub pokeapi: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            genderize: GENDERIZE_API_BASE.to_string(),
            agify: AGIFY_API_BASE.to_string(),
            universities: UNIVERSITIES_API_BASE.to_string(),
            wttr: WTTR_API_BASE.to_string(),
            pokeapi: POKEAPI_BASE.to_string(),
        }
    }
}

impl EndpointConfig {
    /// Load configuration from environment variables
    ///
    /// Every variable is optional and falls back to the public endpoint:
    /// COUTEAU_GENDERIZE_URL, COUTEAU_AGIFY_URL, COUTEAU_UNIVERSITIES_URL,
    /// COUTEAU_WTTR_URL, COUTEAU_POKEAPI_URL.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let pick = |key: &str, fallback: String| {
            var(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
        };

        Self {
            genderize: pick("COUTEAU_GENDERIZE_URL", defaults.genderize),
            agify: pick("COUTEAU_AGIFY_URL", defaults.agify),
            universities: pick("COUTEAU_UNIVERSITIES_URL", defaults.universities),
            wttr: pick("COUTEAU_WTTR_URL", defaults.wttr),
            pokeapi: pick("COUTEAU_POKEAPI_URL", defaults.pokeapi),
        }
    }

    pub fn gender_tool(&self) -> GenderTool {
        GenderTool {
            base_url: self.genderize.clone(),
        }
    }

    pub fn age_tool(&self) -> AgeTool {
        AgeTool {
            base_url: self.agify.clone(),
        }
    }

    pub fn universities_tool(&self) -> UniversitiesTool {
        UniversitiesTool {
            base_url: self.universities.clone(),
        }
    }

    pub fn weather_tool(&self) -> WeatherTool {
        WeatherTool {
            base_url: self.wttr.clone(),
        }
    }

    pub fn pokemon_tool(&self) -> PokemonTool {
        PokemonTool {
            base_url: self.pokeapi.clone(),
        }
    }

    /// The news tool takes the whole feed URL as its input
    pub fn news_tool(&self) -> NewsTool {
        NewsTool
    }
}
