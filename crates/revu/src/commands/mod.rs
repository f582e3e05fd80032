use std::time::Duration;

use indicatif::ProgressBar;

use crate::output::OutputMode;

pub mod credential;
pub mod review;
pub mod session;

/// Start the in-flight spinner, human mode only.
///
/// The spinner is purely an operator affordance: the review call itself is
/// blocking and the caller clears the spinner as soon as it returns.
pub fn start_spinner(mode: OutputMode) -> Option<ProgressBar> {
    if mode != OutputMode::Human {
        return None;
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Reviewing your code...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}
