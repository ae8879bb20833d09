use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;

use regex::Regex;
use wal_palette::Rgb;

use crate::error::BackendError;

static HEX_CODE: OnceLock<Regex> = OnceLock::new();

fn hex_code() -> &'static Regex {
    HEX_CODE.get_or_init(|| Regex::new(r"#[0-9A-Fa-f]{6}").expect("hex code pattern is valid"))
}

/// Look up an executable on PATH (or check an explicit path)
pub fn find_program(name: &str) -> Option<PathBuf> {
    match which::which(name) {
        Ok(path) => Some(path),
        Err(e) => {
            tracing::debug!(program = name, error = %e, "Program not found");
            None
        }
    }
}

/// An external program plus the arguments that always precede the
/// per-call ones (e.g. `magick convert`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: OsString,
    prefix: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            prefix: Vec::new(),
        }
    }

    /// Append an argument that precedes every call's own arguments
    pub fn prefix_arg(mut self, arg: impl Into<OsString>) -> Self {
        self.prefix.push(arg.into());
        self
    }

    /// Build from `[program, prefix...]`; `None` for an empty list
    pub fn from_parts<S: AsRef<OsStr>>(parts: &[S]) -> Option<Self> {
        let (program, prefix) = parts.split_first()?;
        Some(Self {
            program: program.as_ref().to_os_string(),
            prefix: prefix.iter().map(|p| p.as_ref().to_os_string()).collect(),
        })
    }

    /// Program name for logs and error messages
    pub fn name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    /// Run to completion and return stdout.
    ///
    /// A non-zero exit is an error carrying the tool's stderr.
    pub fn run<I, S>(&self, args: I) -> Result<String, BackendError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command.args(&self.prefix).args(args);
        tracing::debug!(?command, "Running external tool");

        let output = command.output().map_err(|source| BackendError::Spawn {
            tool: self.name(),
            source,
        })?;

        if !output.status.success() {
            return Err(BackendError::ToolFailed {
                tool: self.name(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// First `#RRGGBB` code on each line; lines without one are skipped
pub fn parse_hex_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Rgb> {
    lines
        .into_iter()
        .filter_map(|line| hex_code().find(line))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}
