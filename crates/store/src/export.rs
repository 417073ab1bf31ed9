//! On-demand export of a collection to a JSON file.
//!
//! Pure read-only projection; never mutates store state.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use shared::idea::Idea;

pub const HISTORY_EXPORT_NAME: &str = "business-ideas-history.json";
pub const FAVORITES_EXPORT_NAME: &str = "business-ideas-favorites.json";

/// Write the ideas as pretty-printed JSON. Exporting an empty collection
/// is refused so the user is not handed an empty file silently.
pub fn export_to_file(ideas: &[Idea], path: &Path) -> Result<()> {
    if ideas.is_empty() {
        bail!("nothing to export");
    }
    let json = serde_json::to_string_pretty(ideas)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idea(id: u64) -> Idea {
        Idea {
            id,
            industry: "bakery".into(),
            budget: "5000".into(),
            tone: "default".into(),
            narrative: "A sourdough subscription service.".into(),
            names: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
            captions: vec!["x".into(), "y".into(), "z".into()],
            tags: vec!["artisan".into(), "local".into(), "subscription".into()],
            created_at: "2026-01-01 12:00:00".into(),
            is_favorite: false,
        }
    }

    #[test]
    fn exported_file_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(HISTORY_EXPORT_NAME);
        let ideas = vec![idea(1), idea(2)];
        export_to_file(&ideas, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let loaded: Vec<Idea> = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded, ideas);
    }

    #[test]
    fn empty_export_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FAVORITES_EXPORT_NAME);
        assert!(export_to_file(&[], &path).is_err());
        assert!(!path.exists());
    }
}
