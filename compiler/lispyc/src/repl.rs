//! Read-eval-print loop.
//!
//! [`process_line`] is the whole per-line behaviour; [`run_repl`] only adds
//! the line editor and history around it, and [`run_file`] feeds it lines
//! from a file.

use std::ops::Range;
use std::path::Path;

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use lispy_eval::{Interpreter, Value};
use lispy_parse::{parse, ParseError};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::config::ReplConfig;
use crate::error::ReplError;
use crate::print_handler::PrintHandler;

/// Source name used in diagnostics for interactive input.
pub const STDIN_NAME: &str = "<stdin>";

/// Line that ends the session.
pub const EXIT_COMMAND: &str = "exit";

/// What happened to one input line.
#[derive(Clone, Debug, PartialEq)]
pub enum LineOutcome {
    /// Blank line; nothing evaluated.
    Skip,
    /// The exit command.
    Exit,
    /// Parsed and evaluated; the result has been printed.
    Evaluated(Value),
    /// Did not parse; the diagnostic has been printed.
    ParseFailed,
}

impl LineOutcome {
    /// False for parse failures and error results.
    pub fn succeeded(&self) -> bool {
        match self {
            LineOutcome::Skip | LineOutcome::Exit => true,
            LineOutcome::Evaluated(value) => !value.is_error(),
            LineOutcome::ParseFailed => false,
        }
    }
}

/// Parse, evaluate and print one line.
pub fn process_line(interp: &mut Interpreter, line: &str, out: &PrintHandler) -> LineOutcome {
    process_named_line(interp, STDIN_NAME, line, out)
}

fn process_named_line(
    interp: &mut Interpreter,
    source_name: &str,
    line: &str,
    out: &PrintHandler,
) -> LineOutcome {
    let line = line.trim();
    if line.is_empty() {
        return LineOutcome::Skip;
    }
    if line == EXIT_COMMAND {
        return LineOutcome::Exit;
    }

    match parse(line) {
        Ok(ast) => {
            let value = interp.eval_ast(&ast);
            out.println(&value.to_string());
            LineOutcome::Evaluated(value)
        }
        Err(err) => {
            tracing::debug!(error = %err, "parse failed");
            out.eprintln(&render_parse_error(&err, source_name, line));
            LineOutcome::ParseFailed
        }
    }
}

/// Render a parse error as an annotated source snippet (no colour).
///
/// Falls back to the one-line `name:line:col: error: ...` form if the
/// report cannot be written.
pub fn render_parse_error(err: &ParseError, source_name: &str, input: &str) -> String {
    let span = err.span();
    let mut report =
        Report::<(&str, Range<usize>)>::build(ReportKind::Error, source_name, span.start)
            .with_config(
                Config::default()
                    .with_color(false)
                    .with_index_type(IndexType::Byte),
            )
            .with_message(err.to_string())
            .with_label(Label::new((source_name, span.range())).with_message(err.to_string()));
    if let Some(open) = err.opened_at() {
        report = report
            .with_label(Label::new((source_name, open.range())).with_message("opened here"));
    }

    let mut buf = Vec::new();
    match report
        .finish()
        .write((source_name, Source::from(input)), &mut buf)
    {
        Ok(()) => String::from_utf8_lossy(&buf).trim_end().to_string(),
        Err(_) => err.render(source_name, input),
    }
}

/// Version banner shown when the REPL starts.
pub fn banner() -> String {
    format!(
        "Lispy version {}\nType '{EXIT_COMMAND}' to exit",
        env!("CARGO_PKG_VERSION")
    )
}

/// Whether an input line is worth recalling: not blank and not `exit`.
pub fn is_history_entry(line: &str) -> bool {
    let line = line.trim();
    !line.is_empty() && line != EXIT_COMMAND
}

/// Interactive session until `exit`, Ctrl-C or Ctrl-D.
pub fn run_repl(config: &ReplConfig, out: &PrintHandler) -> Result<(), ReplError> {
    let mut interp = config.interpreter();
    let mut editor = DefaultEditor::new()?;

    if let Some(path) = &config.history {
        if let Err(err) = editor.load_history(path) {
            tracing::debug!(path = %path.display(), error = %err, "no history loaded");
        }
    }

    if config.banner {
        out.println(&banner());
        out.println("");
    }

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                if is_history_entry(&line) {
                    editor.add_history_entry(line.as_str())?;
                }
                if process_line(&mut interp, &line, out) == LineOutcome::Exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(path) = &config.history {
        editor.save_history(path)?;
    }
    Ok(())
}

/// Evaluate `path` line by line, as if typed at the prompt.
///
/// Returns the number of lines that failed to parse or evaluated to an
/// error. Stops early at an `exit` line.
pub fn run_file(
    path: &Path,
    interp: &mut Interpreter,
    out: &PrintHandler,
) -> Result<usize, ReplError> {
    let source = std::fs::read_to_string(path).map_err(|source| ReplError::File {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path.display().to_string();

    let mut failures = 0;
    for line in source.lines() {
        let outcome = process_named_line(interp, &name, line, out);
        if outcome == LineOutcome::Exit {
            break;
        }
        if !outcome.succeeded() {
            failures += 1;
        }
    }
    tracing::debug!(path = %name, failures, "file evaluated");
    Ok(failures)
}
