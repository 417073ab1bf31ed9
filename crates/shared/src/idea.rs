//! The idea record and its creation inputs.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A single generated business concept.
///
/// Everything except `is_favorite` is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub id: u64,
    pub industry: String,
    pub budget: String,
    pub tone: String,
    /// The generated descriptive paragraph.
    pub narrative: String,
    /// Five candidate brand names.
    pub names: Vec<String>,
    /// Three social media captions.
    pub captions: Vec<String>,
    /// Three to five category tags.
    pub tags: Vec<String>,
    /// Human-readable timestamp, set once.
    pub created_at: String,
    pub is_favorite: bool,
}

impl Idea {
    /// Lowercased haystack for substring search: industry, narrative and
    /// joined tags, matching what the history filter looks at.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.industry,
            self.narrative,
            self.tags.join(" ")
        )
        .to_lowercase()
    }
}

/// Validated user input for one generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaRequest {
    pub industry: String,
    pub budget: String,
    pub tone: String,
}

impl IdeaRequest {
    /// Industry and budget are required; tone falls back to `"default"`.
    pub fn new(
        industry: &str,
        budget: &str,
        tone: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let industry = industry.trim();
        let budget = budget.trim();
        if industry.is_empty() {
            return Err(ValidationError::MissingIndustry);
        }
        if budget.is_empty() {
            return Err(ValidationError::MissingBudget);
        }
        let tone = match tone.map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => "default".to_string(),
        };
        Ok(Self {
            industry: industry.to_string(),
            budget: budget.to_string(),
            tone,
        })
    }
}

/// The four generated fields the model must return.
///
/// The wire key for the narrative is `idea`, matching the instructed
/// output shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdeaFields {
    #[serde(rename = "idea")]
    pub narrative: String,
    pub names: Vec<String>,
    pub captions: Vec<String>,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_requires_industry_and_budget() {
        assert_eq!(
            IdeaRequest::new("", "5000", None),
            Err(ValidationError::MissingIndustry)
        );
        assert_eq!(
            IdeaRequest::new("bakery", "  ", None),
            Err(ValidationError::MissingBudget)
        );
    }

    #[test]
    fn request_defaults_tone() {
        let req = IdeaRequest::new("bakery", "5000", None).unwrap();
        assert_eq!(req.tone, "default");
        let req = IdeaRequest::new("bakery", "5000", Some("  ")).unwrap();
        assert_eq!(req.tone, "default");
        let req = IdeaRequest::new("bakery", "5000", Some("playful")).unwrap();
        assert_eq!(req.tone, "playful");
    }

    #[test]
    fn fields_deserialize_from_wire_shape() {
        let json = r#"{
            "idea": "A sourdough subscription service.",
            "names": ["a", "b", "c", "d", "e"],
            "captions": ["x", "y", "z"],
            "tags": ["artisan", "local", "subscription"]
        }"#;
        let fields: IdeaFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.narrative, "A sourdough subscription service.");
        assert_eq!(fields.names.len(), 5);
    }
}
