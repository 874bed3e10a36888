//! Scaffold a new web application project
//!
//! This module follows the dependable-rust pattern:
//! - Public interface (this file): clean API
//! - Internal implementation: all logic in internal
//!
//! # Example
//!
//! ```no_run
//! use appscaffold::config::Config;
//! use appscaffold::scaffold;
//!
//! let config = Config::default();
//! scaffold::execute(Some("demo app".to_string()), &config)
//!     .expect("Failed to scaffold project");
//! ```

mod internal;

use crate::config::Config;
use crate::error::ScaffoldError;
use crate::runner::{SystemRunner, ToolRunner};

/// Execute a scaffold run for the given project name.
///
/// # Process
///
/// 1. **Validate**: reject a missing or empty name before any side effect
/// 2. **Derive title**: word-capitalized display name for the templates
/// 3. **Generate**: create the Next.js project (TypeScript, ESLint,
///    `src/` layout, app router, `@/*` alias, Tailwind)
/// 4. **Dependencies**: add next-themes and lucide-react
/// 5. **Components**: initialize shadcn/ui and install every component,
///    overwriting defaults non-interactively
/// 6. **Templates**: write the theme provider, theme toggle, global nav,
///    root layout, home page, and conventions document
/// 7. **Editor**: open the configured editor on the result (non-fatal)
///
/// Fail-fast with no rollback: a failing step aborts the rest of the
/// run and a partial tree may remain on disk. Re-running after fixing
/// the cause is the recovery path.
///
/// # Errors
///
/// Returns an error if:
/// - The name is missing or empty (`InvalidArgument`)
/// - An external tool is missing or exits non-zero (`DependencyFailure`,
///   naming the failing step)
/// - A template file cannot be written (`TemplateWrite`)
pub fn execute(name: Option<String>, config: &Config) -> Result<(), ScaffoldError> {
    internal::execute_scaffold(name, config, &SystemRunner)
}

/// Like [`execute`], but with an explicit tool runner.
///
/// Lets callers intercept subprocess execution; tests use this to run
/// the full pipeline without touching real package managers.
pub fn execute_with(
    name: Option<String>,
    config: &Config,
    runner: &dyn ToolRunner,
) -> Result<(), ScaffoldError> {
    internal::execute_scaffold(name, config, runner)
}
