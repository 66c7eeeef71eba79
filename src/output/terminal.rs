use colored::*;

use crate::config::DisplayConfig;
use crate::sandbox::{ERROR_PREFIX, NO_OUTPUT_PLACEHOLDER};
use crate::session::Session;

const PANEL_WIDTH: usize = 58;

pub fn print_header() {
    println!("{}", "┌─────────────────────────────────────────────────────────────┐".bright_black());
    println!("│  {:<59}│", "Code Editor".bold());
    println!("│  {:<59}│", "Type JavaScript, then :run, :fix, :help or :quit");
    println!("│  {:<59}│", "Start a line with :: to enter a code line beginning with :");
    println!("{}", "└─────────────────────────────────────────────────────────────┘".bright_black());
    println!();
}

pub fn print_console(session: &Session) {
    println!("{}", "── Console ──────────────────────────────────────────────────".bright_black());
    print_output(session.output_display());
    println!();
}

/// Print a console panel body, colored by outcome.
pub fn print_output(output: &str) {
    if output.starts_with(ERROR_PREFIX) {
        println!("{}", output.red());
    } else if output == NO_OUTPUT_PLACEHOLDER {
        println!("{}", output.green());
    } else {
        println!("{}", output);
    }
}

pub fn print_help_panel(session: &Session, display: &DisplayConfig) {
    if !session.help_open {
        return;
    }

    println!("{}", "── Help Panel ───────────────────────────────────────────────".bright_black());

    if !session.help_query.is_empty() {
        println!("  {} {}", "?".cyan(), session.help_query.bright_black());
        println!();
    }

    print_reply(session.help_reply_display(), display);
    println!();
}

/// Print a help answer, as markdown when enabled.
pub fn print_reply(reply: &str, display: &DisplayConfig) {
    if display.markdown {
        reply_skin(display).print_text(reply);
        return;
    }

    for paragraph in reply.lines() {
        for line in textwrap::wrap(paragraph, PANEL_WIDTH) {
            println!("  {}", line);
        }
    }
}

/// Markdown skin for help answers; unstyled when color is off.
pub fn reply_skin(display: &DisplayConfig) -> termimad::MadSkin {
    if display.color {
        termimad::MadSkin::default()
    } else {
        termimad::MadSkin::no_style()
    }
}

pub fn print_code(code: &str) {
    println!("{}", "── Code ─────────────────────────────────────────────────────".bright_black());

    if code.is_empty() {
        println!("{}", "Write your JavaScript code here...".bright_black());
    } else {
        for (i, line) in code.split('\n').enumerate() {
            println!("{} │ {}", format!("{:>3}", i + 1).bright_black(), line.bright_cyan());
        }
    }

    println!();
}

pub fn print_notice(message: &str) {
    println!("{}", message.yellow());
}
