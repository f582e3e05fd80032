use std::path::PathBuf;

use dialoguer::Password;
use revu_core::{
    load_credential, validate_credential, CredentialSource, GeminiClient, ReviewSession,
};

use crate::output::Reporter;

/// How many empty entries the masked prompt tolerates before giving up.
/// An empty entry is a wait state, not an error, so the prompt re-asks.
const MAX_PROMPT_ATTEMPTS: u32 = 3;

/// Acquire a credential and arm a review session.
///
/// One path serves both modes: file mode resolves through the core loader,
/// interactive mode through the masked prompt, and both end at the same
/// configure step. Returns `None` after reporting the error; every failure
/// here is fatal for the session.
pub fn arm_session(
    key_file: Option<&str>,
    model: Option<&str>,
    reporter: &mut Reporter,
) -> Option<ReviewSession> {
    let source = match key_file {
        Some(path) => CredentialSource::File(PathBuf::from(path)),
        None => CredentialSource::Interactive,
    };

    let credential = match source {
        CredentialSource::File(path) => match load_credential(&path) {
            Ok(key) => key,
            Err(e) => {
                reporter.error(&format!("{e}"));
                return None;
            }
        },
        CredentialSource::Interactive => prompt_credential(reporter)?,
    };

    match GeminiClient::configure(credential, model.map(str::to_string)) {
        Ok(client) => Some(ReviewSession::new(Box::new(client))),
        Err(e) => {
            reporter.error(&format!("{e}"));
            None
        }
    }
}

/// Masked interactive credential entry.
fn prompt_credential(reporter: &mut Reporter) -> Option<String> {
    for _ in 0..MAX_PROMPT_ATTEMPTS {
        let entry = Password::new()
            .with_prompt("Enter your Google API key")
            .allow_empty_password(true)
            .interact();

        match entry {
            Ok(raw) => match validate_credential(&raw) {
                Ok(key) => return Some(key),
                Err(_) => reporter.warning("Please enter an API key to proceed"),
            },
            Err(e) => {
                reporter.error(&format!("failed to read API key: {e}"));
                return None;
            }
        }
    }

    reporter.error("no API key provided");
    None
}
