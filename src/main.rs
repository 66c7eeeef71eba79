use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use codepad::config::{Config, load_config};
use codepad::output::terminal;
use codepad::{auto_fix, execute_snippet, input, logging, lookup, repl};

#[derive(Parser, Debug)]
#[command(name = "codepad", version)]
#[command(about = "JavaScript scratchpad with auto-fix, sandboxed run and a help FAQ")]
struct Args {
    #[command(subcommand)]
    command: Option<Cmd>,

    /// Configuration file (defaults to ./codepad.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Print help answers as plain text instead of markdown
    #[arg(long, global = true)]
    plain: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Rewrite a snippet with the auto-fix rules
    Fix {
        /// Source file, or `-` for stdin
        path: Option<PathBuf>,
    },
    /// Execute a snippet with a captured console
    Run {
        /// Source file, or `-` for stdin
        path: Option<PathBuf>,

        /// Print the run report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask the help FAQ a question
    Ask {
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Start an interactive session (default)
    Repl,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if args.no_color {
        config.display.color = false;
    }
    if args.plain {
        config.display.markdown = false;
    }
    apply_display(&config);

    match args.command.unwrap_or(Cmd::Repl) {
        Cmd::Fix { path } => {
            let code = input::load_source(path.as_deref())?;
            println!("{}", auto_fix(&code));
        }
        Cmd::Run { path, json } => {
            let code = input::load_source(path.as_deref())?;
            let report = execute_snippet(&code);
            if json {
                let text = serde_json::to_string_pretty(&report)
                    .context("Failed to serialize run report")?;
                println!("{}", text);
            } else {
                terminal::print_output(&report.render());
            }
        }
        Cmd::Ask { query } => {
            let reply = lookup(&query.join(" "));
            terminal::print_reply(&reply, &config.display);
        }
        Cmd::Repl => repl::run_repl(&config.display)?,
    }

    Ok(())
}

fn apply_display(config: &Config) {
    if !config.display.color {
        colored::control::set_override(false);
    }
}
