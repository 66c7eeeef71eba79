use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static COMMAND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:([A-Za-z]+)(?:\s+(.*))?$").unwrap());

/// Lines starting with this enter the buffer with one `:` removed.
pub const LITERAL_PREFIX: &str = "::";

/// What one interactive line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run,
    Fix,
    OpenHelp,
    CloseHelp,
    Ask(String),
    Show,
    Clear,
    Quit,
    Unknown(String),
    /// Not a command: a line of code for the buffer
    Code(String),
}

pub fn detect_command(line: &str) -> Command {
    let trimmed = line.trim();

    if trimmed.starts_with(LITERAL_PREFIX) {
        return Command::Code(line.replacen(LITERAL_PREFIX, ":", 1));
    }

    let Some(caps) = COMMAND_RE.captures(trimmed) else {
        return Command::Code(line.to_string());
    };

    let name = caps[1].to_lowercase();
    let rest = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();

    match name.as_str() {
        "run" => Command::Run,
        "fix" => Command::Fix,
        "help" => Command::OpenHelp,
        "close" => Command::CloseHelp,
        "ask" => Command::Ask(rest.to_string()),
        "show" => Command::Show,
        "clear" => Command::Clear,
        "quit" | "q" => Command::Quit,
        _ => Command::Unknown(name),
    }
}

/// Read source text from `path`, or from stdin when the path is absent or `-`.
pub fn load_source(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file {}", path.display())),
        _ => {
            let mut code = String::new();
            std::io::stdin()
                .read_to_string(&mut code)
                .context("Failed to read source from stdin")?;
            Ok(code)
        }
    }
}
