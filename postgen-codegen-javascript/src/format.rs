//! Hand-off to an external formatter for the written modules.

use std::{
    io,
    path::Path,
    process::{Child, Command, Stdio},
};

use tracing::debug;

/// Formatter used unless configured otherwise.
pub const DEFAULT_FORMAT_COMMAND: &[&str] = &["npx", "prettier", "--write"];

/// An external formatter run over every `.js` file of the output directory.
///
/// The process is spawned and left running; generation does not wait for
/// it and its exit status is never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    command: Vec<String>,
}

impl Formatter {
    /// Program followed by its arguments; the file glob is appended last.
    pub fn new(command: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            command: command.into_iter().map(Into::into).collect(),
        }
    }

    /// Program and arguments for formatting `output_dir`.
    pub fn args(&self, output_dir: &Path) -> Vec<String> {
        let mut args = self.command.clone();
        args.push(format!("{}/**/*.js", output_dir.display()));
        args
    }

    /// Start the formatter without waiting for it.
    pub fn spawn(&self, output_dir: &Path) -> io::Result<Child> {
        if self.command.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "empty formatter command",
            ));
        }
        let args = self.args(output_dir);
        let (program, rest) = args.split_at(1);

        debug!(?args, "spawning formatter");
        Command::new(&program[0])
            .args(rest)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
    }
}
