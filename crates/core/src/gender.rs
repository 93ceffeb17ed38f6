use serde::{Deserialize, Serialize};

use crate::error::MappingError;
use crate::tool::{base, Tool};

pub const GENDERIZE_API_BASE: &str = "https://api.genderize.io";

/// genderize.io response
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GenderizeResponse {
    pub name: String,
    pub gender: Option<String>,
    pub probability: f64,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

/// Gender prediction for a name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenderResult {
    pub name: String,
    pub gender: Gender,
    pub probability: f64,
    pub count: u64,
}

impl GenderResult {
    /// Probability as a whole percentage, e.g. 0.987 -> 99
    pub fn probability_percent(&self) -> u8 {
        (self.probability.clamp(0.0, 1.0) * 100.0).round() as u8
    }
}

/// Transform a genderize.io response into a typed prediction
///
/// A `null` gender means the service has no opinion about the name; that is
/// reported as `Indeterminate` instead of rendering a guess.
pub fn transform_gender(response: GenderizeResponse) -> Result<GenderResult, MappingError> {
    let gender = match response.gender.as_deref() {
        None => return Err(MappingError::Indeterminate),
        Some("male") => Gender::Male,
        Some("female") => Gender::Female,
        Some(other) => {
            return Err(MappingError::Shape(format!("unknown gender `{other}`")));
        }
    };

    Ok(GenderResult {
        name: response.name,
        gender,
        probability: response.probability,
        count: response.count,
    })
}

/// name -> gender lookup against genderize.io
#[derive(Debug, Clone)]
pub struct GenderTool {
    pub base_url: String,
}

impl Default for GenderTool {
    fn default() -> Self {
        Self {
            base_url: GENDERIZE_API_BASE.to_string(),
        }
    }
}

impl Tool for GenderTool {
    type Output = GenderResult;
    const NAME: &'static str = "gender";

    fn build_url(&self, input: &str) -> String {
        format!(
            "{}/?name={}",
            base(&self.base_url),
            urlencoding::encode(input)
        )
    }

    fn map(&self, payload: &serde_json::Value) -> Result<GenderResult, MappingError> {
        let response = GenderizeResponse::deserialize(payload)?;
        transform_gender(response)
    }
}
