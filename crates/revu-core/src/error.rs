use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RevuError {
    #[error("credential file not found: {0}")]
    CredentialFileNotFound(PathBuf),

    #[error("failed to read credential file {path}: {source}")]
    CredentialFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("credential is empty")]
    EmptyCredential,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("no code snippet provided")]
    BlankSubmission,

    #[error("API error: {0}")]
    Api(String),
}

impl RevuError {
    /// Whether this error halts the session (credential/configuration tier)
    /// rather than allowing another submission attempt.
    pub fn is_fatal(&self) -> bool {
        match self {
            RevuError::CredentialFileNotFound(_)
            | RevuError::CredentialFileRead { .. }
            | RevuError::EmptyCredential
            | RevuError::Config(_) => true,
            RevuError::BlankSubmission | RevuError::Api(_) => false,
        }
    }
}
