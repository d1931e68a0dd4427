//! Output sink for REPL results and diagnostics.
//!
//! Results go through `println`, diagnostics through `eprintln`. The
//! `Buffer` variant captures both streams separately for tests.

use parking_lot::Mutex;

/// Where printed results and diagnostics go.
#[derive(Debug)]
pub enum PrintHandler {
    /// Results to stdout, diagnostics to stderr.
    Stdout,
    /// Captured in memory.
    Buffer {
        out: Mutex<String>,
        err: Mutex<String>,
    },
}

impl PrintHandler {
    pub fn stdout() -> Self {
        PrintHandler::Stdout
    }

    pub fn buffer() -> Self {
        PrintHandler::Buffer {
            out: Mutex::new(String::new()),
            err: Mutex::new(String::new()),
        }
    }

    /// Print a line (with newline) to the result stream.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer { out, .. } => push_line(&mut out.lock(), msg),
        }
    }

    /// Print a line (with newline) to the diagnostic stream.
    pub fn eprintln(&self, msg: &str) {
        match self {
            Self::Stdout => eprintln!("{msg}"),
            Self::Buffer { err, .. } => push_line(&mut err.lock(), msg),
        }
    }

    /// Captured results. Always empty for `Stdout`.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer { out, .. } => out.lock().clone(),
        }
    }

    /// Captured diagnostics. Always empty for `Stdout`.
    pub fn get_errors(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer { err, .. } => err.lock().clone(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer { out, err } = self {
            out.lock().clear();
            err.lock().clear();
        }
    }
}

impl Default for PrintHandler {
    fn default() -> Self {
        Self::stdout()
    }
}

fn push_line(buf: &mut String, msg: &str) {
    buf.push_str(msg);
    buf.push('\n');
}
