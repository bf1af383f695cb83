use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use super::busy::BusyGuard;
use super::credentials::Credentials;
use super::error::LoginError;
use super::repository::SessionRepository;
use super::session::Session;

/// Simulated network latency of a login attempt.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Source of the simulated delay.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Mock login: accepts any non-empty email/password pair and records a
/// session placeholder. There is no credential check.
#[derive(Clone)]
pub struct DemoLogin {
    sessions: SessionRepository,
    timer: Rc<dyn Timer>,
    latency: Duration,
}

impl DemoLogin {
    pub fn new(sessions: SessionRepository, timer: Rc<dyn Timer>, latency: Duration) -> Self {
        Self {
            sessions,
            timer,
            latency,
        }
    }

    pub fn sessions(&self) -> &SessionRepository {
        &self.sessions
    }

    /// Run one submit of the login form.
    ///
    /// `on_busy` is only touched once the fields pass the presence check; it
    /// receives `true` before the delay and `false` on every exit after that.
    pub async fn submit<F>(
        &self,
        email: &str,
        password: &str,
        on_busy: F,
    ) -> Result<Session, LoginError>
    where
        F: FnMut(bool),
    {
        let credentials = Credentials::parse(email, password)?;
        let _busy = BusyGuard::enter(on_busy);

        self.timer.sleep(self.latency).await;

        let session = Session::for_email(credentials.email);
        self.sessions.save(&session).map_err(|e| {
            warn!("Failed to store session: {}", e);
            LoginError::from(e)
        })?;

        info!("Demo login for {} as {:?}", session.email, session.role);
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::session::{Role, SESSION_STORAGE_KEY};
    use crate::storage::{KeyValueStore, MemoryStore, StorageError};
    use std::cell::RefCell;

    /// Records each requested delay and the busy state seen while sleeping.
    #[derive(Default)]
    struct RecordingTimer {
        busy_log: Rc<RefCell<Vec<bool>>>,
        sleeps: RefCell<Vec<(Duration, Option<bool>)>>,
    }

    #[async_trait(?Send)]
    impl Timer for RecordingTimer {
        async fn sleep(&self, duration: Duration) {
            let busy = self.busy_log.borrow().last().copied();
            self.sleeps.borrow_mut().push((duration, busy));
        }
    }

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn demo_login(store: Rc<dyn KeyValueStore>) -> (DemoLogin, Rc<RecordingTimer>) {
        let timer = Rc::new(RecordingTimer::default());
        let login = DemoLogin::new(
            SessionRepository::new(store),
            timer.clone(),
            DEFAULT_LATENCY,
        );
        (login, timer)
    }

    #[tokio::test]
    async fn test_successful_login_stores_session() {
        let store = Rc::new(MemoryStore::new());
        let (login, timer) = demo_login(store.clone());
        let busy_log = timer.busy_log.clone();

        let session = login
            .submit("admin@desa.go.id", "password123", |busy| {
                busy_log.borrow_mut().push(busy)
            })
            .await
            .unwrap();

        assert_eq!(session.name, "admin");
        assert_eq!(session.role, Role::VillageOfficial);
        assert_eq!(
            store.get(SESSION_STORAGE_KEY).unwrap().as_deref(),
            Some(r#"{"email":"admin@desa.go.id","name":"admin","role":"village_official"}"#)
        );
        assert_eq!(*busy_log.borrow(), vec![true, false]);
        assert_eq!(
            *timer.sleeps.borrow(),
            vec![(DEFAULT_LATENCY, Some(true))]
        );
    }

    #[tokio::test]
    async fn test_empty_field_writes_nothing() {
        let store = Rc::new(MemoryStore::new());
        let (login, timer) = demo_login(store.clone());
        let busy_log = timer.busy_log.clone();

        let result = login
            .submit("", "x", |busy| busy_log.borrow_mut().push(busy))
            .await;

        assert!(matches!(result, Err(LoginError::MissingCredentials)));
        assert!(store.is_empty());
        assert!(busy_log.borrow().is_empty());
        assert!(timer.sleeps.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_storage_failure_resets_busy_flag() {
        let (login, timer) = demo_login(Rc::new(FailingStore));
        let busy_log = timer.busy_log.clone();

        let result = login
            .submit("admin@desa.go.id", "password123", |busy| {
                busy_log.borrow_mut().push(busy)
            })
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, LoginError::Storage(_)));
        assert_eq!(err.to_string(), "Login gagal. Silakan coba lagi.");
        assert_eq!(*busy_log.borrow(), vec![true, false]);
        assert_eq!(timer.sleeps.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_repeat_login_overwrites_session() {
        let store = Rc::new(MemoryStore::new());
        let (login, _timer) = demo_login(store.clone());

        login.submit("admin@desa.go.id", "a", |_| {}).await.unwrap();
        login.submit("bendahara@desa.go.id", "b", |_| {}).await.unwrap();

        let stored = login.sessions().load().unwrap().unwrap();
        assert_eq!(stored.email, "bendahara@desa.go.id");
        assert_eq!(stored.name, "bendahara");
        assert_eq!(store.len(), 1);
    }
}
