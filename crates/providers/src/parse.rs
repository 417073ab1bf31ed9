//! Strict decoding of model output into idea fields.
//!
//! The model is instructed to answer with a JSON object but often wraps
//! it in Markdown code fences or prose. We cut out the outermost object,
//! decode it, and validate every field explicitly; a half-parsed idea is
//! worse than none, so there is no partial recovery.

use shared::error::GenerationError;
use shared::idea::IdeaFields;

/// Expected counts from the prompt contract.
const NAME_COUNT: usize = 5;
const CAPTION_COUNT: usize = 3;
const TAG_RANGE: std::ops::RangeInclusive<usize> = 3..=5;

pub fn parse_idea_fields(raw: &str) -> Result<IdeaFields, GenerationError> {
    let cleaned = strip_code_fences(raw);
    let json_str = extract_json_object(cleaned)
        .ok_or_else(|| GenerationError::MalformedOutput("no JSON object found".into()))?;

    let fields: IdeaFields = serde_json::from_str(json_str)
        .map_err(|e| GenerationError::MalformedOutput(e.to_string()))?;

    validate(&fields)?;
    Ok(fields)
}

fn validate(fields: &IdeaFields) -> Result<(), GenerationError> {
    if fields.narrative.trim().is_empty() {
        return Err(GenerationError::InvalidField("idea"));
    }
    if fields.names.len() != NAME_COUNT || fields.names.iter().any(|n| n.trim().is_empty()) {
        return Err(GenerationError::InvalidField("names"));
    }
    if fields.captions.len() != CAPTION_COUNT
        || fields.captions.iter().any(|c| c.trim().is_empty())
    {
        return Err(GenerationError::InvalidField("captions"));
    }
    if !TAG_RANGE.contains(&fields.tags.len())
        || fields.tags.iter().any(|t| t.trim().is_empty())
    {
        return Err(GenerationError::InvalidField("tags"));
    }
    Ok(())
}

/// Drop ```json / ``` fence lines if the whole answer is fenced.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// The outermost `{...}` span, so prose around the object is tolerated.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}
