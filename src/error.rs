//! Error taxonomy for a scaffold run
//!
//! Three things can go wrong: the user gave us no name, an external
//! tool failed, or a template write failed. Editor-launch problems are
//! deliberately not represented here - they are warned about and
//! swallowed at the call site because the scaffold is already complete
//! by the time the editor runs.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A named step in the scaffold pipeline.
///
/// Used to tell the user which external call failed and to decide
/// whether a failure is fatal (everything except `Editor`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Generator,
    Dependencies,
    ComponentsInit,
    ComponentsAdd,
    Editor,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Generator => "project generator",
            Step::Dependencies => "dependency install",
            Step::ComponentsInit => "component library init",
            Step::ComponentsAdd => "component install",
            Step::Editor => "editor launch",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Missing or empty project name. No side effects have happened.
    #[error("missing or empty project name")]
    InvalidArgument,

    /// An external tool was missing or exited non-zero. A partial
    /// project tree may remain on disk; re-run after fixing the cause.
    #[error("{step} failed: {reason}")]
    DependencyFailure {
        step: Step,
        /// Exit code of the failing tool, when it exited at all.
        status: Option<i32>,
        reason: String,
    },

    /// A template file could not be written.
    #[error("failed to write {}: {}", .path.display(), .source)]
    TemplateWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Process exit code for this error.
    ///
    /// External-tool exit codes are propagated so scripts wrapping
    /// `scaffold` can tell the failure modes apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::InvalidArgument => 1,
            ScaffoldError::DependencyFailure { status, .. } => status.unwrap_or(1),
            ScaffoldError::TemplateWrite { .. } => 1,
        }
    }
}
