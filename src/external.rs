//! External compiler and viewer invocation
//!
//! Every call waits for the tool to finish and checks its exit status.
//! Failures are logged as warnings; the caller decides whether to go on.

use std::path::Path;
use std::process::{Command, ExitStatus};

use log::{info, warn};

use crate::error::Result;

/// Default document compiler
pub const DEFAULT_COMPILER: &str = "xelatex";

/// Default document viewer
pub const DEFAULT_VIEWER: &str = "evince";

/// Number of compiler passes; the second one fills in the table of contents
pub const COMPILE_PASSES: usize = 2;

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub program: String,
    pub args: Vec<String>,
}

impl Tool {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Command line as shown in log messages
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(|a| a.as_str()))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a tool invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Exited with status zero
    Success,
    /// Exited with a non-zero status (None when killed by a signal)
    Failed(Option<i32>),
    /// Could not be started
    NotStarted(String),
}

impl ToolOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ToolOutcome::Success)
    }
}

impl From<ExitStatus> for ToolOutcome {
    fn from(status: ExitStatus) -> Self {
        if status.success() {
            ToolOutcome::Success
        } else {
            ToolOutcome::Failed(status.code())
        }
    }
}

/// Run a tool in `cwd` and wait for it
pub fn run(tool: &Tool, cwd: &Path) -> Result<ExitStatus> {
    let status = Command::new(&tool.program)
        .args(&tool.args)
        .current_dir(cwd)
        .status()?;
    Ok(status)
}

/// Run a tool, logging anything other than a clean exit
pub fn run_step(tool: &Tool, cwd: &Path) -> ToolOutcome {
    info!("Running {}", tool.display());
    let outcome = match run(tool, cwd) {
        Ok(status) => ToolOutcome::from(status),
        Err(e) => ToolOutcome::NotStarted(e.to_string()),
    };

    match &outcome {
        ToolOutcome::Success => {}
        ToolOutcome::Failed(Some(code)) => {
            warn!("{} exited with status {}", tool.program, code)
        }
        ToolOutcome::Failed(None) => warn!("{} was terminated by a signal", tool.program),
        ToolOutcome::NotStarted(reason) => warn!("Could not run {}: {}", tool.program, reason),
    }

    outcome
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Compile the markup file in its own directory, once per pass
///
/// Every pass runs even if an earlier one failed.
pub fn compile(compiler: &str, tex_path: &Path) -> Vec<ToolOutcome> {
    let tool = Tool::new(compiler)
        .arg("-interaction=nonstopmode")
        .arg(file_name(tex_path));
    let cwd = parent_dir(tex_path);

    (0..COMPILE_PASSES).map(|_| run_step(&tool, cwd)).collect()
}

/// Open the rendered document and wait for the viewer to close
pub fn view(viewer: &str, pdf_path: &Path) -> ToolOutcome {
    let tool = Tool::new(viewer).arg(file_name(pdf_path));
    run_step(&tool, parent_dir(pdf_path))
}
