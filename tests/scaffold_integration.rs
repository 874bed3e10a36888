//! End-to-end pipeline tests through the public API, with external
//! tools replaced by a recording fake.

use std::cell::RefCell;
use std::fs;

use tempfile::TempDir;

use appscaffold::config::Config;
use appscaffold::error::{ScaffoldError, Step};
use appscaffold::runner::{ToolCommand, ToolRunner};
use appscaffold::{scaffold, templates};

struct RecordingRunner {
    calls: RefCell<Vec<(Step, ToolCommand)>>,
    fail_on: Option<Step>,
}

impl RecordingRunner {
    fn new(fail_on: Option<Step>) -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            fail_on,
        }
    }

    fn steps(&self) -> Vec<Step> {
        self.calls.borrow().iter().map(|(s, _)| *s).collect()
    }
}

impl ToolRunner for RecordingRunner {
    fn run(&self, step: Step, command: &ToolCommand) -> Result<(), ScaffoldError> {
        self.calls.borrow_mut().push((step, command.clone()));
        if self.fail_on == Some(step) {
            return Err(ScaffoldError::DependencyFailure {
                step,
                status: Some(1),
                reason: "exited with status 1".to_string(),
            });
        }
        Ok(())
    }
}

fn config_in(temp: &TempDir) -> Config {
    Config {
        package_manager: "ls".to_string(),
        editor: "ls".to_string(),
        launch_editor: false,
        projects_dir: Some(temp.path().to_path_buf()),
    }
}

#[test]
fn scaffold_writes_all_six_templates() {
    let temp = TempDir::new().unwrap();
    let runner = RecordingRunner::new(None);

    scaffold::execute_with(Some("demo app".to_string()), &config_in(&temp), &runner).unwrap();

    let root = temp.path().join("demo app");
    for relative in [
        "src/components/theme-provider.tsx",
        "src/components/theme-toggle.tsx",
        "src/components/global-nav.tsx",
        "src/app/layout.tsx",
        "src/app/page.tsx",
        "conventions.md",
    ] {
        assert!(root.join(relative).exists(), "{relative}");
    }
}

#[test]
fn scaffold_substitutes_derived_title() {
    let temp = TempDir::new().unwrap();
    let runner = RecordingRunner::new(None);

    scaffold::execute_with(Some("demo app".to_string()), &config_in(&temp), &runner).unwrap();

    let root = temp.path().join("demo app");
    let nav = fs::read_to_string(root.join("src/components/global-nav.tsx")).unwrap();
    assert!(nav.contains("Demo App"));

    let layout = fs::read_to_string(root.join("src/app/layout.tsx")).unwrap();
    assert!(layout.contains("title: \"Demo App\""));
}

#[test]
fn scaffold_is_deterministic_per_title() {
    let temp_a = TempDir::new().unwrap();
    let temp_b = TempDir::new().unwrap();

    templates::write_all(temp_a.path(), "Demo App").unwrap();
    templates::write_all(temp_b.path(), "Demo App").unwrap();

    for template in &templates::TEMPLATES {
        let a = fs::read(temp_a.path().join(template.relative_path)).unwrap();
        let b = fs::read(temp_b.path().join(template.relative_path)).unwrap();
        assert_eq!(a, b, "{}", template.relative_path);
    }
}

#[test]
fn missing_name_has_zero_side_effects() {
    let temp = TempDir::new().unwrap();
    let runner = RecordingRunner::new(None);

    let err = scaffold::execute_with(None, &config_in(&temp), &runner).unwrap_err();

    assert!(matches!(err, ScaffoldError::InvalidArgument));
    assert_eq!(err.exit_code(), 1);
    assert!(runner.steps().is_empty());
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn generator_failure_leaves_no_templates_and_propagates_status() {
    let temp = TempDir::new().unwrap();
    let runner = RecordingRunner::new(Some(Step::Generator));

    let err = scaffold::execute_with(Some("demo".to_string()), &config_in(&temp), &runner)
        .unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::DependencyFailure {
            step: Step::Generator,
            ..
        }
    ));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(runner.steps(), vec![Step::Generator]);
    assert!(!temp.path().join("demo").exists());
}

#[test]
fn component_install_failure_halts_before_templates() {
    let temp = TempDir::new().unwrap();
    let runner = RecordingRunner::new(Some(Step::ComponentsAdd));

    let err = scaffold::execute_with(Some("demo".to_string()), &config_in(&temp), &runner)
        .unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::DependencyFailure {
            step: Step::ComponentsAdd,
            ..
        }
    ));
    assert!(!temp.path().join("demo/conventions.md").exists());
}

#[test]
fn editor_failure_does_not_fail_the_run() {
    let temp = TempDir::new().unwrap();
    let runner = RecordingRunner::new(Some(Step::Editor));
    let mut config = config_in(&temp);
    config.launch_editor = true;

    scaffold::execute_with(Some("demo".to_string()), &config, &runner).unwrap();

    assert!(runner.steps().contains(&Step::Editor));
    assert!(temp.path().join("demo/conventions.md").exists());
}
