//! Preflight checks - make sure required tools exist before any
//! destructive work starts.

use crate::error::{ScaffoldError, Step};

/// Verify the package manager is on PATH.
///
/// Runs before the generator so a missing tool fails with install hints
/// instead of a bare spawn error halfway through.
pub fn check_package_manager(package_manager: &str) -> Result<(), ScaffoldError> {
    if which::which(package_manager).is_ok() {
        return Ok(());
    }

    eprintln!("Error: '{package_manager}' is required but not found on PATH.");
    if package_manager == "pnpm" {
        eprintln!();
        eprintln!("Install pnpm:");
        eprintln!("  • npm:  npm install -g pnpm");
        eprintln!("  • macOS: brew install pnpm");
        eprintln!("  • Other: https://pnpm.io/installation");
    }

    Err(ScaffoldError::DependencyFailure {
        step: Step::Generator,
        status: None,
        reason: format!("'{package_manager}' not found on PATH"),
    })
}

/// Check whether the editor is on PATH. Purely informational - a
/// missing editor never fails the scaffold.
pub fn editor_available(editor: &str) -> bool {
    which::which(editor).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_package_manager_names_generator_step() {
        let err = check_package_manager("definitely-not-a-real-pm-xyz").unwrap_err();
        match err {
            ScaffoldError::DependencyFailure { step, .. } => assert_eq!(step, Step::Generator),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_present_tool_passes() {
        // `ls` exists everywhere we run tests
        assert!(check_package_manager("ls").is_ok());
    }

    #[test]
    fn test_editor_availability_is_boolean() {
        assert!(editor_available("ls"));
        assert!(!editor_available("definitely-not-a-real-editor-xyz"));
    }
}
