//! LLM provider abstraction for code review.
//!
//! The only real provider targets the Gemini generateContent API. The
//! `generate` method is synchronous (using `reqwest::blocking`) because each
//! review action is a single sequential call and async buys nothing here.

use crate::error::RevuError;
use crate::instruction::REVIEW_INSTRUCTION;

/// Trait for LLM API providers.
///
/// Implementations must be `Send + Sync` so a provider can back concurrent
/// sessions; each call is independent and carries no shared mutable state.
pub trait LlmProvider: Send + Sync {
    /// Send a user submission and return the review text.
    ///
    /// The reviewer instruction is bound at provider construction, not
    /// passed per call, so the submission cannot replace it.
    fn generate(&self, submission: &str) -> Result<String, RevuError>;

    /// Provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Model identifier being used (e.g., "gemini-2.0-flash").
    fn model(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Gemini
// ---------------------------------------------------------------------------

/// Client for the Google Gemini generateContent API.
///
/// Holds the credential, the model name, and the HTTP client; the reviewer
/// instruction travels as `system_instruction` on every request.
#[derive(Debug)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl GeminiClient {
    /// Default model when none is specified.
    pub const DEFAULT_MODEL: &'static str = "gemini-2.0-flash";

    /// Configure a client with a validated credential.
    ///
    /// This is the one-time arming step: a credential that cannot form a
    /// valid request (embedded whitespace or control characters) is rejected
    /// here as [`RevuError::Config`], a fatal error distinct from the
    /// per-request [`RevuError::Api`] failures `generate` can return.
    pub fn configure(api_key: String, model: Option<String>) -> Result<Self, RevuError> {
        if api_key.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(RevuError::Config(
                "credential contains whitespace or control characters".into(),
            ));
        }

        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| RevuError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            api_key,
            model: model.unwrap_or_else(|| Self::DEFAULT_MODEL.to_string()),
            client,
        })
    }
}

impl LlmProvider for GeminiClient {
    fn generate(&self, submission: &str) -> Result<String, RevuError> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let body = serde_json::json!({
            "system_instruction": {
                "parts": [{"text": REVIEW_INSTRUCTION}]
            },
            "contents": [
                {"parts": [{"text": submission}]}
            ]
        });

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .map_err(|e| RevuError::Api(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(RevuError::Api(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .map_err(|e| RevuError::Api(format!("failed to parse response: {e}")))?;

        json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| RevuError::Api("no text in response".into()))
    }

    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// ---------------------------------------------------------------------------
// Mock (for testing)
// ---------------------------------------------------------------------------

/// A mock LLM provider that replays scripted responses and records every
/// submission it receives. For use in tests.
pub struct MockProvider {
    script: std::sync::Mutex<std::collections::VecDeque<Result<String, String>>>,
    calls: std::sync::Mutex<Vec<String>>,
}

impl MockProvider {
    /// Create a mock provider that always returns the given response text.
    pub fn new(response: impl Into<String>) -> Self {
        Self::scripted(vec![Ok(response.into())])
    }

    /// Create a mock provider that always fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::scripted(vec![Err(message.into())])
    }

    /// Create a mock provider that replays `responses` in order; once only
    /// one remains, that response repeats for every further call.
    ///
    /// Must be non-empty.
    pub fn scripted(responses: Vec<Result<String, String>>) -> Self {
        assert!(!responses.is_empty(), "mock needs at least one response");
        Self {
            script: std::sync::Mutex::new(responses.into()),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// The submissions this provider has been asked to review, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl LlmProvider for MockProvider {
    fn generate(&self, submission: &str) -> Result<String, RevuError> {
        self.calls.lock().unwrap().push(submission.to_string());
        let mut script = self.script.lock().unwrap();
        let response = if script.len() > 1 {
            script.pop_front().unwrap()
        } else {
            script.front().cloned().unwrap()
        };
        match response {
            Ok(text) => Ok(text),
            Err(message) => Err(RevuError::Api(message)),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_provider_returns_expected_response() {
        let provider = MockProvider::new("Looks correct.");
        let result = provider.generate("print(1+1)").unwrap();
        assert_eq!(result, "Looks correct.");
    }

    #[test]
    fn mock_provider_records_submissions() {
        let provider = MockProvider::new("ok");
        provider.generate("fn main() {}").unwrap();
        provider.generate("let x = 1;").unwrap();
        assert_eq!(provider.calls(), vec!["fn main() {}", "let x = 1;"]);
    }

    #[test]
    fn scripted_mock_replays_responses_then_repeats_the_last() {
        let provider = MockProvider::scripted(vec![
            Err("HTTP 500: transient".into()),
            Ok("All good.".into()),
        ]);

        assert!(provider.generate("code").is_err());
        assert_eq!(provider.generate("code").unwrap(), "All good.");
        assert_eq!(provider.generate("code").unwrap(), "All good.");
    }

    #[test]
    fn failing_mock_returns_api_error_with_message() {
        let provider = MockProvider::failing("quota exceeded");
        match provider.generate("code") {
            Err(RevuError::Api(msg)) => assert!(msg.contains("quota exceeded")),
            other => panic!("Expected Api error, got: {other:?}"),
        }
    }

    #[test]
    fn gemini_client_default_model() {
        let client = GeminiClient::configure("AIza-fake-key".into(), None).unwrap();
        assert_eq!(client.model(), "gemini-2.0-flash");
        assert_eq!(client.name(), "gemini");
    }

    #[test]
    fn gemini_client_custom_model() {
        let client =
            GeminiClient::configure("AIza-fake-key".into(), Some("gemini-1.5-pro".into())).unwrap();
        assert_eq!(client.model(), "gemini-1.5-pro");
    }

    #[test]
    fn configure_rejects_credential_with_embedded_whitespace() {
        let result = GeminiClient::configure("key with spaces".into(), None);
        match result {
            Err(RevuError::Config(_)) => {}
            other => panic!("Expected Config error, got: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn configure_rejects_credential_with_control_characters() {
        let result = GeminiClient::configure("key\u{0007}bell".into(), None);
        assert!(matches!(result, Err(RevuError::Config(_))));
    }

    #[test]
    fn configure_failure_is_fatal() {
        let err = GeminiClient::configure("bad key".into(), None).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn provider_trait_is_object_safe() {
        let provider: Box<dyn LlmProvider> = Box::new(MockProvider::new("test"));
        assert_eq!(provider.name(), "mock");
        assert_eq!(provider.generate("anything").unwrap(), "test");
    }
}
