use revu_core::RevuError;

use crate::commands::{credential::arm_session, start_spinner};
use crate::output::Reporter;

/// Run the `revu review` command: one submission, one call, one result.
///
/// The submission comes from `file` if given, otherwise from stdin. The
/// credential comes from `key_file` or the masked prompt.
pub fn run_review(
    file: Option<&str>,
    key_file: Option<&str>,
    model: Option<&str>,
    reporter: &mut Reporter,
) -> bool {
    let Some(mut session) = arm_session(key_file, model, reporter) else {
        return false;
    };

    let submission = match read_submission(file) {
        Ok(text) => text,
        Err(e) => {
            reporter.error(&format!("failed to read submission: {e}"));
            return false;
        }
    };

    reporter.info(&format!(
        "Reviewing with {} ({})",
        session.provider_name(),
        session.model_name()
    ));

    let spinner = start_spinner(reporter.mode());
    let outcome = session.review(&submission);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    match outcome {
        Ok(report) => {
            reporter.result("AI Review", &report.review_text);
            true
        }
        Err(RevuError::BlankSubmission) => {
            reporter.warning("Please provide a code snippet to review");
            false
        }
        Err(e) => {
            reporter.error(&format!("An error occurred while reviewing the code: {e}"));
            false
        }
    }
}

/// Read the submission from a file, or stdin when no file is given.
fn read_submission(file: Option<&str>) -> std::io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => std::io::read_to_string(std::io::stdin()),
    }
}
