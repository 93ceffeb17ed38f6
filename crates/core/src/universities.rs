use serde::{Deserialize, Serialize};

use crate::error::MappingError;
use crate::tool::{base, Tool};

pub const UNIVERSITIES_API_BASE: &str = "http://universities.hipolabs.com";

/// University entry from the hipolabs search API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HipolabsUniversity {
    pub name: String,
    pub country: String,
    #[serde(default)]
    pub alpha_two_code: Option<String>,
    #[serde(rename = "state-province", default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default)]
    pub web_pages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct University {
    pub name: String,
    pub country: String,
    /// ISO 3166-1 alpha-2 code, when the API provides one
    pub country_code: Option<String>,
    pub state_province: Option<String>,
    pub domains: Vec<String>,
    pub web_pages: Vec<String>,
}

impl University {
    pub fn primary_domain(&self) -> Option<&str> {
        self.domains.first().map(String::as_str)
    }

    pub fn website(&self) -> Option<&str> {
        self.web_pages.first().map(String::as_str)
    }
}

/// Universities found for a country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UniversityList {
    pub total: usize,
    pub universities: Vec<University>,
}

/// Transform the hipolabs search result into a university list
///
/// An empty array is a valid answer from the API (unknown country, or a
/// country name not in English) and is reported as `NotFound`.
pub fn transform_universities(
    entries: Vec<HipolabsUniversity>,
) -> Result<UniversityList, MappingError> {
    if entries.is_empty() {
        return Err(MappingError::NotFound);
    }

    let universities: Vec<University> = entries
        .into_iter()
        .map(|entry| University {
            name: entry.name,
            country: entry.country,
            country_code: entry.alpha_two_code,
            state_province: entry.state_province,
            domains: entry.domains,
            web_pages: entry.web_pages,
        })
        .collect();

    Ok(UniversityList {
        total: universities.len(),
        universities,
    })
}

/// country -> universities lookup against universities.hipolabs.com
#[derive(Debug, Clone)]
pub struct UniversitiesTool {
    pub base_url: String,
}

impl Default for UniversitiesTool {
    fn default() -> Self {
        Self {
            base_url: UNIVERSITIES_API_BASE.to_string(),
        }
    }
}

impl Tool for UniversitiesTool {
    type Output = UniversityList;
    const NAME: &'static str = "universities";

    fn build_url(&self, input: &str) -> String {
        format!(
            "{}/search?country={}",
            base(&self.base_url),
            urlencoding::encode(input)
        )
    }

    fn map(&self, payload: &serde_json::Value) -> Result<UniversityList, MappingError> {
        let entries = Vec::<HipolabsUniversity>::deserialize(payload)?;
        transform_universities(entries)
    }
}
