use serde::{Deserialize, Serialize};

/// Shown when a run succeeds without logging anything.
pub const NO_OUTPUT_PLACEHOLDER: &str = "✔ Code executed successfully (no console output)";

/// Prefix of every rendered failure.
pub const ERROR_PREFIX: &str = "❌ Error: ";

/// Message used when a failure carries no message of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Result from sandbox execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunReport {
    /// Lines passed to `console.log`, in call order
    pub logs: Vec<String>,
    /// Error message if construction or execution threw
    pub error: Option<String>,
}

impl RunReport {
    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Text shown in the console panel.
    ///
    /// A failure replaces whatever was logged before it.
    pub fn render(&self) -> String {
        if let Some(ref error) = self.error {
            return format!("{ERROR_PREFIX}{error}");
        }

        if self.logs.is_empty() {
            return NO_OUTPUT_PLACEHOLDER.to_string();
        }

        self.logs.join("\n")
    }
}
