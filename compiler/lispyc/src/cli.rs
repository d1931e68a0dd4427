//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::DEFAULT_PROMPT;

#[derive(Parser, Debug)]
#[command(name = "lispy", version, about = "Lispy: an interactive evaluator for a small Lisp")]
pub struct Cli {
    /// Evaluate each line of FILE instead of starting the REPL
    pub file: Option<PathBuf>,

    /// Evaluate one expression, print the result and exit
    #[arg(short, long, value_name = "EXPR")]
    pub eval: Option<String>,

    /// Dispatch on the head symbol's name instead of resolving symbols
    #[arg(long)]
    pub symbolic: bool,

    /// History file for the REPL
    #[arg(long, env = "LISPY_HISTORY", value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Do not read or write a history file
    #[arg(long)]
    pub no_history: bool,

    /// Prompt shown before each line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    /// Skip the startup banner
    #[arg(short, long)]
    pub quiet: bool,
}
