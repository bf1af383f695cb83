use std::rc::Rc;

use tracing::debug;

use super::session::{SESSION_STORAGE_KEY, Session};
use crate::storage::{KeyValueStore, StorageError};

/// Reads and writes the session placeholder as JSON under [`SESSION_STORAGE_KEY`].
#[derive(Clone)]
pub struct SessionRepository {
    store: Rc<dyn KeyValueStore>,
}

impl SessionRepository {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Overwrite the stored session wholesale.
    pub fn save(&self, session: &Session) -> Result<(), StorageError> {
        let json = serde_json::to_string(session)?;
        self.store.set(SESSION_STORAGE_KEY, &json)?;
        debug!("Stored session for {}", session.email);
        Ok(())
    }

    pub fn load(&self) -> Result<Option<Session>, StorageError> {
        match self.store.get(SESSION_STORAGE_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn setup() -> (Rc<MemoryStore>, SessionRepository) {
        let store = Rc::new(MemoryStore::new());
        let repo = SessionRepository::new(store.clone());
        (store, repo)
    }

    #[test]
    fn test_load_without_entry() {
        let (_, repo) = setup();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let (store, repo) = setup();
        let session = Session::for_email("admin@desa.go.id");

        repo.save(&session).unwrap();

        assert_eq!(repo.load().unwrap(), Some(session));
        assert_eq!(
            store.get(SESSION_STORAGE_KEY).unwrap().as_deref(),
            Some(r#"{"email":"admin@desa.go.id","name":"admin","role":"village_official"}"#)
        );
    }

    #[test]
    fn test_save_replaces_previous_session() {
        let (store, repo) = setup();
        repo.save(&Session::for_email("admin@desa.go.id")).unwrap();
        repo.save(&Session::for_email("sekdes@desa.go.id")).unwrap();

        let loaded = repo.load().unwrap().unwrap();
        assert_eq!(loaded.name, "sekdes");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_load_rejects_malformed_entry() {
        let (store, repo) = setup();
        store.set(SESSION_STORAGE_KEY, "not json").unwrap();

        assert!(matches!(repo.load(), Err(StorageError::Serialization(_))));
    }
}
