use std::collections::HashMap;

use uuid::Uuid;

use crate::session::{AnalysisSession, Condition};

/// Key the serialized history is stored under in the host key-value store.
pub const HISTORY_KEY: &str = "analysis-history";

/// Key-value backend the ledger persists through.
///
/// The app adapts `eframe::Storage` to this; tests use `MemoryStore`. Views
/// only ever see the ledger itself, never the backing store.
pub trait HistoryStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: String);
}

/// In-memory store, for tests and headless use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_owned(), value);
    }
}

/// History filter: everything, or one condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConditionFilter {
    #[default]
    All,
    Only(Condition),
}

impl ConditionFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Conditions",
            Self::Only(condition) => condition.short_label(),
        }
    }

    fn matches(self, session: &AnalysisSession) -> bool {
        match self {
            Self::All => true,
            Self::Only(condition) => session.condition == condition,
        }
    }
}

/// The ordered, persisted collection of completed analyses, newest first.
#[derive(Debug, Default)]
pub struct SessionLedger {
    sessions: Vec<AnalysisSession>,
    dirty: bool,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the ledger from a raw stored value. A missing or malformed
    /// value yields an empty ledger rather than an error; there is no
    /// migration path to attempt.
    pub fn from_stored(raw: Option<&str>) -> Self {
        let sessions = match raw {
            None => Vec::new(),
            Some(json) => match serde_json::from_str(json) {
                Ok(sessions) => sessions,
                Err(err) => {
                    log::warn!("discarding malformed analysis history: {err}");
                    Vec::new()
                }
            },
        };
        Self {
            sessions,
            dirty: false,
        }
    }

    pub fn load(store: &dyn HistoryStore) -> Self {
        Self::from_stored(store.read(HISTORY_KEY).as_deref())
    }

    /// Write the full session sequence back to the store.
    pub fn save_to(&mut self, store: &mut dyn HistoryStore) {
        match serde_json::to_string(&self.sessions) {
            Ok(json) => {
                store.write(HISTORY_KEY, json);
                self.dirty = false;
            }
            Err(err) => log::error!("failed to serialize analysis history: {err}"),
        }
    }

    /// True when there are mutations not yet flushed to the store.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn sessions(&self) -> &[AnalysisSession] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&AnalysisSession> {
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Insert a freshly completed session at the head of the ledger.
    pub fn append(&mut self, session: AnalysisSession) {
        log::info!(
            "recording analysis of {} ({})",
            session.source_name,
            session.condition.short_label()
        );
        self.sessions.insert(0, session);
        self.dirty = true;
    }

    /// Sessions matching the filter, in ledger order (newest first).
    pub fn filter(&self, filter: ConditionFilter) -> Vec<&AnalysisSession> {
        self.sessions.iter().filter(|s| filter.matches(s)).collect()
    }

    /// Delete one session. Removing an id that is not present is a no-op.
    pub fn remove(&mut self, id: Uuid) {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        if self.sessions.len() != before {
            self.dirty = true;
        }
    }

    pub fn clear(&mut self) {
        if !self.sessions.is_empty() {
            self.sessions.clear();
            self.dirty = true;
        }
    }
}

/// The pair of history entries picked for side-by-side comparison.
///
/// Holds at most two ids in selection order. Picking a third evicts the
/// oldest pick; picking a selected id again deselects it.
#[derive(Debug, Clone, Default)]
pub struct CompareSelection {
    selected: Vec<Uuid>,
}

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: Uuid) {
        if let Some(pos) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(pos);
        } else if self.selected.len() >= 2 {
            self.selected = vec![self.selected[1], id];
        } else {
            self.selected.push(id);
        }
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Both picks, in selection order, once two are chosen.
    pub fn pair(&self) -> Option<(Uuid, Uuid)> {
        match self.selected.as_slice() {
            [first, second] => Some((*first, *second)),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
