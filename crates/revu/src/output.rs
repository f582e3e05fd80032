use colored::*;
use serde::Serialize;

/// Output mode for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
    Quiet,
}

/// Accumulated JSON result entry.
#[derive(Debug, Serialize, Clone)]
pub struct JsonResultEntry {
    #[serde(rename = "type")]
    pub result_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Accumulated JSON output.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub results: Vec<JsonResultEntry>,
}

/// Reporter handles all output formatting.
///
/// Credentials must never pass through any of these methods.
pub struct Reporter {
    mode: OutputMode,
    json_results: Vec<JsonResultEntry>,
}

impl Reporter {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            json_results: Vec::new(),
        }
    }

    /// Returns the current output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn error(&mut self, message: &str) {
        match self.mode {
            OutputMode::Human => {
                eprintln!("{} {}", "ERROR:".red(), message);
            }
            OutputMode::Json => {
                self.json_results.push(JsonResultEntry {
                    result_type: "error".to_string(),
                    message: message.to_string(),
                    details: None,
                });
            }
            OutputMode::Quiet => {
                eprintln!("{} {}", "ERROR:".red(), message);
            }
        }
    }

    pub fn warning(&mut self, message: &str) {
        match self.mode {
            OutputMode::Human => {
                eprintln!("{} {}", "WARNING:".yellow(), message);
            }
            OutputMode::Json => {
                self.json_results.push(JsonResultEntry {
                    result_type: "warning".to_string(),
                    message: message.to_string(),
                    details: None,
                });
            }
            OutputMode::Quiet => {}
        }
    }

    pub fn success(&mut self, message: &str) {
        match self.mode {
            OutputMode::Human => {
                println!("{} {}", "✓".green(), message);
            }
            OutputMode::Json => {
                self.json_results.push(JsonResultEntry {
                    result_type: "success".to_string(),
                    message: message.to_string(),
                    details: None,
                });
            }
            OutputMode::Quiet => {}
        }
    }

    pub fn info(&mut self, message: &str) {
        match self.mode {
            OutputMode::Human => {
                println!("{} {}", "INFO:".blue(), message);
            }
            OutputMode::Json => {
                self.json_results.push(JsonResultEntry {
                    result_type: "info".to_string(),
                    message: message.to_string(),
                    details: None,
                });
            }
            OutputMode::Quiet => {}
        }
    }

    pub fn section(&mut self, title: &str) {
        if self.mode == OutputMode::Human {
            println!("{}", format!("=== {title} ===").cyan());
        }
    }

    /// Render a review body verbatim under the current section.
    ///
    /// In JSON mode the body travels as the `details` field so it is never
    /// re-wrapped or truncated.
    pub fn result(&mut self, heading: &str, body: &str) {
        match self.mode {
            OutputMode::Human => {
                self.section(heading);
                println!("{body}");
            }
            OutputMode::Json => {
                self.json_results.push(JsonResultEntry {
                    result_type: "result".to_string(),
                    message: heading.to_string(),
                    details: Some(body.to_string()),
                });
            }
            OutputMode::Quiet => {
                println!("{body}");
            }
        }
    }

    pub fn finish(&self) {
        if self.mode == OutputMode::Json {
            let output = JsonOutput {
                results: self.json_results.clone(),
            };
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                println!("{json}");
            }
        }
    }
}
