//! REPL configuration.

use std::path::PathBuf;

use lispy_eval::{EvalMode, Interpreter};

use crate::cli::Cli;

pub const DEFAULT_PROMPT: &str = "lispy> ";

/// Settings for one REPL session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    /// History file; `None` keeps history in memory only.
    pub history: Option<PathBuf>,
    /// Print the version banner on startup.
    pub banner: bool,
    pub mode: EvalMode,
}

impl ReplConfig {
    /// Fresh interpreter in the configured mode.
    pub fn interpreter(&self) -> Interpreter {
        Interpreter::builder().mode(self.mode).build()
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            history: None,
            banner: true,
            mode: EvalMode::default(),
        }
    }
}

impl From<&Cli> for ReplConfig {
    fn from(cli: &Cli) -> Self {
        ReplConfig {
            prompt: cli.prompt.clone(),
            history: if cli.no_history {
                None
            } else {
                cli.history.clone()
            },
            banner: !cli.quiet,
            mode: if cli.symbolic {
                EvalMode::Symbolic
            } else {
                EvalMode::Resolved
            },
        }
    }
}
