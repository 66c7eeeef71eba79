//! Interactive session: code lines fill the buffer, `:commands` act on it.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::config::DisplayConfig;
use crate::input::{Command, detect_command};
use crate::output::terminal;
use crate::session::Session;

/// Which panel a command changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The line went into the buffer; nothing to redraw
    Buffered,
    Console,
    Code,
    Help,
    Unknown(String),
    Quit,
}

/// Apply one command to the session.
pub fn apply(session: &mut Session, command: Command) -> Effect {
    match command {
        Command::Code(line) => {
            session.append_line(&line);
            Effect::Buffered
        }
        Command::Run => {
            session.run();
            Effect::Console
        }
        Command::Fix => {
            session.auto_fix();
            Effect::Code
        }
        Command::Show => Effect::Code,
        Command::Clear => {
            session.clear_code();
            Effect::Code
        }
        Command::OpenHelp => {
            session.open_help();
            Effect::Help
        }
        Command::CloseHelp => {
            session.close_help();
            Effect::Help
        }
        Command::Ask(query) => {
            session.open_help();
            session.set_help_query(query);
            session.ask_help();
            Effect::Help
        }
        Command::Unknown(name) => Effect::Unknown(name),
        Command::Quit => Effect::Quit,
    }
}

/// Drive a session from stdin until `:quit` or end of input.
pub fn run_repl(display: &DisplayConfig) -> Result<()> {
    let mut session = Session::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    terminal::print_header();

    loop {
        print!("{}", display.prompt);
        io::stdout().flush().context("Failed to flush prompt")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        match apply(&mut session, detect_command(&line)) {
            Effect::Buffered => {}
            Effect::Console => terminal::print_console(&session),
            Effect::Code => terminal::print_code(&session.code),
            Effect::Help if session.help_open => terminal::print_help_panel(&session, display),
            Effect::Help => terminal::print_notice("Help panel closed."),
            Effect::Unknown(name) => {
                tracing::warn!(command = %name, "unknown command");
                terminal::print_notice(&format!("Unknown command :{name}"));
            }
            Effect::Quit => break,
        }
    }

    Ok(())
}
