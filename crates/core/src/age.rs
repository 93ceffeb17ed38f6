use serde::{Deserialize, Serialize};

use crate::error::MappingError;
use crate::tool::{base, Tool};

pub const AGIFY_API_BASE: &str = "https://api.agify.io";

/// agify.io response
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AgifyResponse {
    pub name: String,
    pub age: Option<u32>,
    pub count: u64,
}

/// Coarse bucket used to label an estimated age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeCategory {
    Young,
    Adult,
    Senior,
}

impl AgeCategory {
    pub fn from_age(age: u32) -> Self {
        if age < 18 {
            AgeCategory::Young
        } else if age < 60 {
            AgeCategory::Adult
        } else {
            AgeCategory::Senior
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeCategory::Young => "Young",
            AgeCategory::Adult => "Adult",
            AgeCategory::Senior => "Senior",
        }
    }

    /// Accent color for the category badge
    pub fn color(&self) -> &'static str {
        match self {
            AgeCategory::Young => "#4ade80",
            AgeCategory::Adult => "#667eea",
            AgeCategory::Senior => "#f59e0b",
        }
    }
}

/// Age estimate for a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeResult {
    pub name: String,
    pub age: u32,
    pub count: u64,
    pub category: AgeCategory,
}

/// Transform an agify.io response into an age estimate
///
/// Rare names come back with `age: null`; there is nothing to show for them.
pub fn transform_age(response: AgifyResponse) -> Result<AgeResult, MappingError> {
    let age = response.age.ok_or(MappingError::Indeterminate)?;

    Ok(AgeResult {
        name: response.name,
        age,
        count: response.count,
        category: AgeCategory::from_age(age),
    })
}

/// name -> age lookup against agify.io
#[derive(Debug, Clone)]
pub struct AgeTool {
    pub base_url: String,
}

impl Default for AgeTool {
    fn default() -> Self {
        Self {
            base_url: AGIFY_API_BASE.to_string(),
        }
    }
}

impl Tool for AgeTool {
    type Output = AgeResult;
    const NAME: &'static str = "age";

    fn build_url(&self, input: &str) -> String {
        format!(
            "{}/?name={}",
            base(&self.base_url),
            urlencoding::encode(input)
        )
    }

    fn map(&self, payload: &serde_json::Value) -> Result<AgeResult, MappingError> {
        let response = AgifyResponse::deserialize(payload)?;
        transform_age(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_build_url() {
        assert_eq!(
            AgeTool::default().build_url("Carlos"),
            "https://api.agify.io/?name=Carlos"
        );
    }

    #[test]
    fn test_map_with_age() {
        let payload = json!({"name": "Carlos", "age": 47, "count": 50000});
        let result = AgeTool::default().map(&payload).unwrap();

        assert_eq!(result.name, "Carlos");
        assert_eq!(result.age, 47);
        assert_eq!(result.count, 50000);
        assert_eq!(result.category, AgeCategory::Adult);
    }

    #[test]
    fn test_map_null_age_has_no_result() {
        let payload = json!({"name": "Carlos", "age": null, "count": 50});
        let err = AgeTool::default().map(&payload).unwrap_err();

        assert_eq!(err, MappingError::Indeterminate);
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_map_missing_name_is_malformed() {
        let payload = json!({"age": 30, "count": 5});
        let err = AgeTool::default().map(&payload).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_map_negative_age_is_malformed() {
        let payload = json!({"name": "Ana", "age": -4, "count": 5});
        assert!(matches!(
            AgeTool::default().map(&payload),
            Err(MappingError::Shape(_))
        ));
    }

    #[test]
    fn test_category_boundaries() {
        assert_eq!(AgeCategory::from_age(0), AgeCategory::Young);
        assert_eq!(AgeCategory::from_age(17), AgeCategory::Young);
        assert_eq!(AgeCategory::from_age(18), AgeCategory::Adult);
        assert_eq!(AgeCategory::from_age(59), AgeCategory::Adult);
        assert_eq!(AgeCategory::from_age(60), AgeCategory::Senior);
        assert_eq!(AgeCategory::from_age(99), AgeCategory::Senior);
    }

    #[test]
    fn test_category_colors() {
        assert_eq!(AgeCategory::Young.color(), "#4ade80");
        assert_eq!(AgeCategory::Adult.color(), "#667eea");
        assert_eq!(AgeCategory::Senior.color(), "#f59e0b");
    }
}
