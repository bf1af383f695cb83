// Demo-only login flow: nothing here authenticates anyone.
pub mod busy;
pub mod credentials;
pub mod demo_login;
pub mod error;
pub mod feedback;
pub mod repository;
pub mod session;

// Re-export commonly used types
pub use busy::BusyGuard;
pub use credentials::Credentials;
pub use demo_login::{DEFAULT_LATENCY, DemoLogin, Timer};
pub use error::LoginError;
pub use feedback::{LoginFeedback, NoticeKind};
pub use repository::SessionRepository;
pub use session::{Role, SESSION_STORAGE_KEY, Session};
