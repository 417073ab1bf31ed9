//! On-disk snapshots of the two idea collections.
//!
//! Two fixed records, written independently. A crash between the two
//! writes can leave them briefly inconsistent; `load` never fails, it
//! only degrades to empty collections, so the next start still works.

use std::fs;
use std::path::PathBuf;

use shared::idea::Idea;
use tracing::warn;

const HISTORY_RECORD: &str = "business-idea-history.json";
const FAVORITES_RECORD: &str = "business-idea-favorites.json";

pub struct Persistence {
    base_path: PathBuf,
}

impl Persistence {
    /// Store under the per-user data directory.
    pub fn open_default() -> Self {
        let base_path = directories::ProjectDirs::from("com.local", "Ideaforge", "Ideaforge")
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("./data"));
        Self { base_path }
    }

    /// Store under an explicit directory (tests, portable installs).
    pub fn at(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Overwrite both records. Each write is all-or-nothing per record;
    /// failures are logged and swallowed so a full disk never poisons an
    /// already-completed mutation.
    pub fn save(&self, history: &[Idea], favorites: &[Idea]) {
        self.write_record(HISTORY_RECORD, history);
        self.write_record(FAVORITES_RECORD, favorites);
    }

    /// Read both records. Missing or corrupt records come back empty.
    pub fn load(&self) -> (Vec<Idea>, Vec<Idea>) {
        (
            self.read_record(HISTORY_RECORD),
            self.read_record(FAVORITES_RECORD),
        )
    }

    fn write_record(&self, name: &str, ideas: &[Idea]) {
        if let Err(e) = fs::create_dir_all(&self.base_path) {
            warn!(error = %e, "could not create data directory");
            return;
        }
        let path = self.base_path.join(name);
        match serde_json::to_string_pretty(ideas) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    warn!(record = name, error = %e, "could not write record");
                }
            }
            Err(e) => warn!(record = name, error = %e, "could not serialize record"),
        }
    }

    fn read_record(&self, name: &str) -> Vec<Idea> {
        let path = self.base_path.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(ideas) => ideas,
                Err(e) => {
                    warn!(record = name, error = %e, "corrupt record, starting empty");
                    Vec::new()
                }
            },
            // Absent record is the normal first-run case.
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::idea::Idea;

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
    fn round_trips_both_records() {
        let dir = tempfile::tempdir().unwrap();
        let persist = Persistence::at(dir.path().to_path_buf());
        let history = vec![idea(2), idea(1)];
        let favorites = vec![idea(1)];
        persist.save(&history, &favorites);
        let (h, f) = persist.load();
        assert_eq!(h, history);
        assert_eq!(f, favorites);
    }

    #[test]
    fn missing_records_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let persist = Persistence::at(dir.path().join("nothing-here"));
        let (h, f) = persist.load();
        assert!(h.is_empty());
        assert!(f.is_empty());
    }

    #[test]
    fn corrupt_record_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let persist = Persistence::at(dir.path().to_path_buf());
        persist.save(&[idea(1)], &[]);
        std::fs::write(dir.path().join("business-idea-history.json"), "{not json").unwrap();
        let (h, f) = persist.load();
        assert!(h.is_empty());
        assert!(f.is_empty());
    }
}
