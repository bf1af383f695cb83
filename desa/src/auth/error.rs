use thiserror::Error;

use crate::storage::StorageError;

/// Display strings are the user-facing copy shown in the login toast.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error("Email dan password harus diisi!")]
    MissingCredentials,

    #[error("Login gagal. Silakan coba lagi.")]
    Storage(#[from] StorageError),
}
