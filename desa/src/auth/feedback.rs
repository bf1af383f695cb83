use super::error::LoginError;
use super::session::Session;
use crate::routes::Redirect;

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login berhasil!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// What the login view shows and where it goes after a submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginFeedback {
    pub kind: NoticeKind,
    pub message: String,
    pub redirect: Option<Redirect>,
}

impl From<&Result<Session, LoginError>> for LoginFeedback {
    fn from(result: &Result<Session, LoginError>) -> Self {
        match result {
            Ok(_) => Self {
                kind: NoticeKind::Success,
                message: LOGIN_SUCCESS_MESSAGE.to_string(),
                redirect: Some(Redirect::Dashboard),
            },
            Err(err) => Self {
                kind: NoticeKind::Error,
                message: err.to_string(),
                redirect: None,
            },
        }
    }
}
