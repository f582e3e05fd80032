//! Credential acquisition and validation.
//!
//! One parameterized provider covers both acquisition modes so the file and
//! interactive flows cannot drift apart: file mode is resolved entirely here,
//! interactive mode funnels whatever the operator typed through the same
//! [`validate_credential`] check.

use std::path::{Path, PathBuf};

use crate::error::RevuError;

/// Where the API credential comes from. Modes are fixed per invocation, not
/// switched mid-session.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// The operator types the credential into a masked prompt.
    Interactive,
    /// The credential is the trimmed contents of a plain text file.
    File(PathBuf),
}

/// Validate a raw credential string: trim whitespace, reject empty.
///
/// Returns the trimmed credential. Empty-after-trim input is the caller's
/// signal to either halt (file mode) or keep waiting (interactive mode).
pub fn validate_credential(raw: &str) -> Result<String, RevuError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RevuError::EmptyCredential);
    }
    Ok(trimmed.to_string())
}

/// Load and validate a credential from a file source.
///
/// # Errors
///
/// - [`RevuError::CredentialFileNotFound`] if the file does not exist.
/// - [`RevuError::CredentialFileRead`] for any other read failure.
/// - [`RevuError::EmptyCredential`] if the contents are blank after trimming.
///
/// All three are fatal: the session must halt rather than retry.
pub fn load_credential(path: &Path) -> Result<String, RevuError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RevuError::CredentialFileNotFound(path.to_path_buf())
        } else {
            RevuError::CredentialFileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    validate_credential(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn validate_trims_surrounding_whitespace() {
        let key = validate_credential("  sk-test-123\n").unwrap();
        assert_eq!(key, "sk-test-123");
    }

    #[test]
    fn validate_rejects_empty_input() {
        assert!(matches!(
            validate_credential(""),
            Err(RevuError::EmptyCredential)
        ));
    }

    #[test]
    fn validate_rejects_whitespace_only_input() {
        assert!(matches!(
            validate_credential("   \n\t  "),
            Err(RevuError::EmptyCredential)
        ));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("api_key.txt");

        match load_credential(&path) {
            Err(RevuError::CredentialFileNotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected CredentialFileNotFound, got: {other:?}"),
        }
    }

    #[test]
    fn load_whitespace_only_file_is_empty_credential() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("api_key.txt");
        std::fs::write(&path, "   \n").unwrap();

        assert!(matches!(
            load_credential(&path),
            Err(RevuError::EmptyCredential)
        ));
    }

    #[test]
    fn load_valid_file_returns_trimmed_key() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("api_key.txt");
        std::fs::write(&path, "AIza-fake-key\n").unwrap();

        assert_eq!(load_credential(&path).unwrap(), "AIza-fake-key");
    }

    #[test]
    fn file_errors_are_fatal() {
        let tmp = TempDir::new().unwrap();
        let err = load_credential(&tmp.path().join("nope.txt")).unwrap_err();
        assert!(err.is_fatal());
    }
}
