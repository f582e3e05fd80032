use dialoguer::Editor;
use revu_core::RevuError;

use crate::commands::{credential::arm_session, start_spinner};
use crate::output::Reporter;

/// Run the `revu session` command: an interactive loop of submissions.
///
/// The credential is acquired once; each iteration opens an editor for the
/// next snippet. Blank submissions and API failures are per-iteration and
/// non-sticky. Closing the editor without saving ends the session.
pub fn run_session(key_file: Option<&str>, model: Option<&str>, reporter: &mut Reporter) -> bool {
    let Some(mut session) = arm_session(key_file, model, reporter) else {
        return false;
    };

    reporter.info(&format!(
        "Review session with {} ({}). Close the editor without saving to quit.",
        session.provider_name(),
        session.model_name()
    ));

    loop {
        let submission = match Editor::new().edit("") {
            Ok(Some(text)) => text,
            Ok(None) => break,
            Err(e) => {
                reporter.error(&format!("failed to open editor: {e}"));
                return false;
            }
        };

        let spinner = start_spinner(reporter.mode());
        let outcome = session.review(&submission);
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }

        match outcome {
            Ok(report) => reporter.result("AI Review", &report.review_text),
            Err(RevuError::BlankSubmission) => {
                reporter.warning("Please enter a code snippet first");
            }
            Err(e) => {
                reporter.error(&format!("An error occurred while reviewing the code: {e}"));
            }
        }
    }

    reporter.success("Session ended");
    true
}
