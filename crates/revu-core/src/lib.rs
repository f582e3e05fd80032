pub mod credential;
pub mod error;
pub mod instruction;
pub mod provider;
pub mod session;

pub use credential::{load_credential, validate_credential, CredentialSource};
pub use error::RevuError;
pub use instruction::REVIEW_INSTRUCTION;
pub use provider::{GeminiClient, LlmProvider, MockProvider};
pub use session::{ReviewReport, ReviewSession, SessionState};
