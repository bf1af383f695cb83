use super::error::LoginError;

/// A login attempt that passed the presence check.
///
/// Only the email survives; the password is checked for presence and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
}

impl Credentials {
    /// Both fields must be non-empty. Whitespace counts as content.
    pub fn parse(email: &str, password: &str) -> Result<Self, LoginError> {
        if email.is_empty() || password.is_empty() {
            return Err(LoginError::MissingCredentials);
        }

        Ok(Self {
            email: email.to_string(),
        })
    }
}
