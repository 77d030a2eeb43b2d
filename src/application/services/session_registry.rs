use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::domain::StudySet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

/// In-process store of per-session study sets.
///
/// Replaces the hosting framework's page-state mapping with explicit
/// ownership: handlers go through this registry, nothing else holds
/// session state.
#[derive(Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, StudySet>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, StudySet>> {
        match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Insert or replace the study set for a session.
    pub fn put(&self, id: SessionId, study_set: StudySet) {
        self.lock().insert(id, study_set);
    }

    pub fn get(&self, id: SessionId) -> Option<StudySet> {
        self.lock().get(&id).cloned()
    }

    /// Apply `f` to the session's study set, if present.
    pub fn update<T>(&self, id: SessionId, f: impl FnOnce(&mut StudySet) -> T) -> Option<T> {
        self.lock().get_mut(&id).map(f)
    }

    pub fn remove(&self, id: SessionId) -> bool {
        self.lock().remove(&id).is_some()
    }
}
