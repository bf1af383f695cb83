pub mod auth;
pub mod routes;
pub mod storage;

pub use auth::{
    Credentials, DemoLogin, LoginError, LoginFeedback, NoticeKind, Role, Session,
    SessionRepository, Timer, DEFAULT_LATENCY, SESSION_STORAGE_KEY,
};
pub use routes::{LANDING_REDIRECT, Redirect};
pub use storage::{KeyValueStore, MemoryStore, StorageError};
