use serde::{Deserialize, Serialize};

/// Key of the persisted session entry in client-local storage.
pub const SESSION_STORAGE_KEY: &str = "user";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    VillageOfficial,
}

/// Placeholder session written by the demo login.
///
/// It stands in for a real authenticated identity and carries no proof of
/// one: nothing checks the password and nothing expires the entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl Session {
    pub fn for_email(email: impl Into<String>) -> Self {
        let email = email.into();
        let name = display_name(&email).to_string();
        Self {
            email,
            name,
            role: Role::VillageOfficial,
        }
    }
}

/// Everything before the first `@`, or the whole address when there is none.
pub fn display_name(email: &str) -> &str {
    email.split_once('@').map_or(email, |(local, _)| local)
}
