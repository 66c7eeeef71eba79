//! In-memory state of one editor session.
//!
//! Each handler reads the current snapshot and replaces one field with the
//! result. The session is owned by a single thread; nothing here is shared.

use crate::{format, help, sandbox};

/// Console panel text before anything has run.
pub const OUTPUT_PLACEHOLDER: &str = "Console output will appear here...";

/// Help panel text before any question has been asked.
pub const HELP_REPLY_PLACEHOLDER: &str = "Ask something like: semicolon, run, error...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub code: String,
    pub output: String,
    pub help_open: bool,
    pub help_query: String,
    pub help_reply: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// Append one line to the buffer, newline-separated.
    pub fn append_line(&mut self, line: &str) {
        if !self.code.is_empty() {
            self.code.push('\n');
        }
        self.code.push_str(line);
    }

    pub fn clear_code(&mut self) {
        self.code.clear();
    }

    /// Run the buffer and replace the console output.
    pub fn run(&mut self) -> &str {
        self.output = sandbox::run_code(&self.code);
        &self.output
    }

    /// Rewrite the buffer with auto-fix.
    pub fn auto_fix(&mut self) -> &str {
        self.code = format::auto_fix(&self.code);
        &self.code
    }

    pub fn open_help(&mut self) {
        self.help_open = true;
    }

    pub fn close_help(&mut self) {
        self.help_open = false;
    }

    pub fn set_help_query(&mut self, query: impl Into<String>) {
        self.help_query = query.into();
    }

    /// Answer the current help query.
    pub fn ask_help(&mut self) -> &str {
        self.help_reply = help::lookup(&self.help_query);
        &self.help_reply
    }

    pub fn output_display(&self) -> &str {
        if self.output.is_empty() {
            OUTPUT_PLACEHOLDER
        } else {
            &self.output
        }
    }

    pub fn help_reply_display(&self) -> &str {
        if self.help_reply.is_empty() {
            HELP_REPLY_PLACEHOLDER
        } else {
            &self.help_reply
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_line_separates_with_newline() {
        let mut session = Session::new();
        session.append_line("let a = 1");
        session.append_line("let b = 2");
        assert_eq!(session.code, "let a = 1\nlet b = 2");
    }

    #[test]
    fn test_placeholders_until_first_result() {
        let session = Session::new();
        assert_eq!(session.output_display(), OUTPUT_PLACEHOLDER);
        assert_eq!(session.help_reply_display(), HELP_REPLY_PLACEHOLDER);
    }
}
