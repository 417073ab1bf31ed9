//! The in-memory collections of generated and favorited ideas.
//!
//! Every mutating operation snapshots both collections through the
//! persistence adapter before returning, so an interruption never loses
//! a mutation the caller already observed.

use chrono::Local;
use shared::idea::{Idea, IdeaFields, IdeaRequest};

use crate::chat::ChatContextManager;
use crate::persist::Persistence;

/// Which collection an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    History,
    Favorites,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub generated: usize,
    pub favorited: usize,
}

pub struct IdeaStore {
    history: Vec<Idea>,
    favorites: Vec<Idea>,
    /// Id of the most recent generation, eligible as "current idea" chat
    /// context. Not persisted across restarts.
    current: Option<u64>,
    next_id: u64,
    persist: Persistence,
}

impl IdeaStore {
    /// Load both collections once at startup.
    pub fn open(persist: Persistence) -> Self {
        let (history, favorites) = persist.load();
        let next_id = history.iter().map(|i| i.id + 1).max().unwrap_or(0);
        Self {
            history,
            favorites,
            current: None,
            next_id,
            persist,
        }
    }

    pub fn history(&self) -> &[Idea] {
        &self.history
    }

    pub fn favorites(&self) -> &[Idea] {
        &self.favorites
    }

    pub fn find(&self, id: u64) -> Option<&Idea> {
        self.history.iter().find(|i| i.id == id)
    }

    pub fn current_idea(&self) -> Option<&Idea> {
        self.current.and_then(|id| self.find(id))
    }

    pub fn stats(&self) -> Stats {
        Stats {
            generated: self.history.len(),
            favorited: self.favorites.len(),
        }
    }

    /// Creation-time-derived ids, bumped so two generations landing in
    /// the same millisecond still get distinct, increasing ids.
    fn mint_id(&mut self) -> u64 {
        let now = Local::now().timestamp_millis().max(0) as u64;
        let id = now.max(self.next_id);
        self.next_id = id + 1;
        id
    }

    /// Store a successfully generated idea at the front of history and
    /// make it the current idea. Input is already validated upstream.
    pub fn record_idea(&mut self, request: IdeaRequest, fields: IdeaFields) -> &Idea {
        let id = self.mint_id();
        let idea = Idea {
            id,
            industry: request.industry,
            budget: request.budget,
            tone: request.tone,
            narrative: fields.narrative,
            names: fields.names,
            captions: fields.captions,
            tags: fields.tags,
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            is_favorite: false,
        };
        self.history.insert(0, idea);
        self.current = Some(id);
        self.snapshot();
        &self.history[0]
    }

    /// Flip the favorite state of a history entry and return the new
    /// state. Unknown ids are a no-op returning false.
    ///
    /// The resulting state is derived from Favorites membership, not the
    /// stored flag, so repeated toggles self-correct even if the two ever
    /// drifted. Un-favoriting removes every matching entry, which also
    /// cleans up any prior accidental duplicate.
    pub fn toggle_favorite(&mut self, id: u64) -> bool {
        let Some(pos) = self.history.iter().position(|i| i.id == id) else {
            return false;
        };
        let now_favorite = !self.favorites.iter().any(|f| f.id == id);
        self.history[pos].is_favorite = now_favorite;
        if now_favorite {
            self.favorites.push(self.history[pos].clone());
        } else {
            self.favorites.retain(|f| f.id != id);
        }
        self.snapshot();
        now_favorite
    }

    /// Remove from Favorites only; the history entry stays, unflagged.
    pub fn remove_favorite(&mut self, id: u64) {
        self.favorites.retain(|f| f.id != id);
        if let Some(entry) = self.history.iter_mut().find(|i| i.id == id) {
            entry.is_favorite = false;
        }
        self.snapshot();
    }

    /// Empty both collections and drop the current idea and any chat
    /// context referencing it. Irreversible.
    pub fn clear_all(&mut self, chat: &mut ChatContextManager) {
        self.history.clear();
        self.favorites.clear();
        self.current = None;
        chat.deselect();
        self.snapshot();
    }

    /// Case-insensitive substring match over industry, narrative and
    /// joined tags. Preserves source ordering; an empty term matches all.
    pub fn search(&self, collection: Collection, term: &str) -> Vec<&Idea> {
        let term = term.to_lowercase();
        let source = match collection {
            Collection::History => &self.history,
            Collection::Favorites => &self.favorites,
        };
        source
            .iter()
            .filter(|idea| term.is_empty() || idea.search_text().contains(&term))
            .collect()
    }

    fn snapshot(&self) {
        self.persist.save(&self.history, &self.favorites);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::ChatContext;
    use shared::idea::{IdeaFields, IdeaRequest};

    fn store() -> (tempfile::TempDir, IdeaStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = IdeaStore::open(Persistence::at(dir.path().to_path_buf()));
        (dir, store)
    }

    fn fields(tag: &str) -> IdeaFields {
        IdeaFields {
            narrative: format!("A {tag} business."),
            names: vec!["a".into(), "b".into(), "c".into(), "d".into(), "e".into()],
            captions: vec!["x".into(), "y".into(), "z".into()],
            tags: vec![tag.into(), "local".into(), "subscription".into()],
        }
    }

    fn record(store: &mut IdeaStore, industry: &str, tag: &str) -> u64 {
        let req = IdeaRequest::new(industry, "5000", None).unwrap();
        store.record_idea(req, fields(tag)).id
    }

    #[test]
    fn record_prepends_and_starts_unfavorited() {
        let (_dir, mut s) = store();
        record(&mut s, "bakery", "artisan");
        let second = record(&mut s, "fitness", "wellness");
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.history()[0].id, second);
        assert!(!s.history()[0].is_favorite);
        assert!(s.favorites().is_empty());
        assert_eq!(s.current_idea().unwrap().id, second);
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let (_dir, mut s) = store();
        let mut last = 0;
        for _ in 0..50 {
            let id = record(&mut s, "bakery", "artisan");
            assert!(id > last, "id {id} not greater than {last}");
            last = id;
        }
    }

    #[test]
    fn toggle_parity_and_no_duplicate_favorites() {
        let (_dir, mut s) = store();
        let id = record(&mut s, "bakery", "artisan");
        for round in 1..=5 {
            let state = s.toggle_favorite(id);
            let odd = round % 2 == 1;
            assert_eq!(state, odd);
            assert_eq!(s.find(id).unwrap().is_favorite, odd);
            assert_eq!(s.favorites().len(), usize::from(odd));
        }
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let (_dir, mut s) = store();
        record(&mut s, "bakery", "artisan");
        assert!(!s.toggle_favorite(42));
        assert!(s.favorites().is_empty());
    }

    #[test]
    fn favorite_is_a_deep_copy_of_the_history_entry() {
        let (_dir, mut s) = store();
        let id = record(&mut s, "bakery", "artisan");
        assert!(s.toggle_favorite(id));
        let fav = &s.favorites()[0];
        let hist = s.find(id).unwrap();
        assert_eq!(fav, hist);
        assert!(fav.is_favorite && hist.is_favorite);
    }

    #[test]
    fn remove_favorite_keeps_history() {
        let (_dir, mut s) = store();
        let id = record(&mut s, "bakery", "artisan");
        s.toggle_favorite(id);
        s.remove_favorite(id);
        assert!(s.favorites().is_empty());
        let hist = s.find(id).unwrap();
        assert!(!hist.is_favorite);
        assert!(s
            .search(Collection::Favorites, "bakery")
            .is_empty());
    }

    #[test]
    fn clear_all_resets_everything() {
        let (_dir, mut s) = store();
        for i in 0..3 {
            record(&mut s, &format!("industry{i}"), "artisan");
        }
        let id = s.history()[0].id;
        s.toggle_favorite(id);
        let mut chat = ChatContextManager::new();
        chat.select_history(s.find(id).unwrap());
        s.clear_all(&mut chat);
        assert!(s.history().is_empty());
        assert!(s.favorites().is_empty());
        assert!(s.current_idea().is_none());
        assert_eq!(*chat.context(), ChatContext::NoContext);
    }

    #[test]
    fn search_matches_tags_case_insensitively() {
        let (_dir, mut s) = store();
        record(&mut s, "bakery", "artisan");
        let id = record(&mut s, "fitness", "WELLNESS");
        let hits = s.search(Collection::History, "wellness");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, id);
    }

    #[test]
    fn empty_term_matches_all_in_order() {
        let (_dir, mut s) = store();
        record(&mut s, "bakery", "artisan");
        record(&mut s, "fitness", "wellness");
        let hits = s.search(Collection::History, "");
        assert_eq!(hits.len(), 2);
        assert!(hits[0].id > hits[1].id);
    }

    #[test]
    fn mutations_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let mut s = IdeaStore::open(Persistence::at(dir.path().to_path_buf()));
            let id = record(&mut s, "bakery", "artisan");
            s.toggle_favorite(id);
            id
        };
        let s = IdeaStore::open(Persistence::at(dir.path().to_path_buf()));
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.favorites().len(), 1);
        assert!(s.find(id).unwrap().is_favorite);
        // Reopened stores keep minting ids past the persisted ones.
        let mut s = s;
        let new_id = record(&mut s, "fitness", "wellness");
        assert!(new_id > id);
    }
}
