//! Review session state and the single review operation.
//!
//! A [`ReviewSession`] is the explicit context object holding the armed
//! provider: constructing one is what it means for the credential phase to
//! have succeeded. All per-submission state lives here, private to the
//! session, so concurrent sessions cannot observe each other.

use crate::error::RevuError;
use crate::provider::LlmProvider;

/// Per-session state, advanced by [`ReviewSession::review`].
///
/// The in-flight phase is not a variant: `review` is a blocking call, so the
/// session is observably busy exactly while that call is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Armed and waiting for a submission. Also the state a blank submission
    /// returns to without any provider call.
    AwaitingSubmission,
    /// The last submission produced review text.
    Rendered,
    /// The last submission failed at the provider. Non-sticky: the next
    /// submission is attempted normally.
    RequestFailed,
}

/// The result of one successful review action.
#[derive(Debug, Clone)]
pub struct ReviewReport {
    /// Provider used for the review (e.g., "gemini").
    pub provider_name: String,
    /// Model used for the review (e.g., "gemini-2.0-flash").
    pub model_name: String,
    /// The full review text returned by the service, verbatim.
    pub review_text: String,
}

/// An armed review session: a configured provider plus submission state.
pub struct ReviewSession {
    provider: Box<dyn LlmProvider>,
    state: SessionState,
}

impl ReviewSession {
    /// Create a session around an armed provider.
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self {
            provider,
            state: SessionState::AwaitingSubmission,
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Provider name, for operator-facing status lines.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Model identifier, for operator-facing status lines.
    pub fn model_name(&self) -> &str {
        self.provider.model()
    }

    /// Review one submission with exactly one provider call.
    ///
    /// A submission that is empty after trimming is rejected as
    /// [`RevuError::BlankSubmission`] without touching the provider.
    /// Otherwise the submission is sent as-is (the trim is a check, not a
    /// transformation) and the returned text is passed through untouched,
    /// including an empty success response.
    ///
    /// Provider failures become [`RevuError::Api`] and leave the session
    /// usable: the next call starts from a clean slate.
    pub fn review(&mut self, submission: &str) -> Result<ReviewReport, RevuError> {
        if submission.trim().is_empty() {
            self.state = SessionState::AwaitingSubmission;
            return Err(RevuError::BlankSubmission);
        }

        match self.provider.generate(submission) {
            Ok(review_text) => {
                self.state = SessionState::Rendered;
                Ok(ReviewReport {
                    provider_name: self.provider.name().to_string(),
                    model_name: self.provider.model().to_string(),
                    review_text,
                })
            }
            Err(e) => {
                self.state = SessionState::RequestFailed;
                Err(e)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
