//! Internal implementation for the scaffold pipeline
//!
//! One linear pass: validate → generate → install → componentize →
//! write templates → open editor. Each step announces itself before it
//! runs so a failed run shows exactly where it stopped.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::config::Config;
use crate::error::{ScaffoldError, Step};
use crate::preflight;
use crate::request::ScaffoldRequest;
use crate::runner::{ToolCommand, ToolRunner};
use crate::templates;

/// Main execution logic for a scaffold run.
pub(crate) fn execute_scaffold(
    name: Option<String>,
    config: &Config,
    runner: &dyn ToolRunner,
) -> Result<(), ScaffoldError> {
    // === STEP 1: VALIDATE (BEFORE ANY SIDE EFFECT) ===
    let request = ScaffoldRequest::new(name)?;

    println!("🏗️  Scaffolding web app: {}", request.raw_name());
    println!("   Display title: {}\n", request.title());

    preflight::check_package_manager(&config.package_manager)?;

    let (parent_dir, project_root) = resolve_paths(config, request.raw_name())?;

    // === STEP 2: EXTERNAL GENERATORS ===
    println!("📦 Creating Next.js project...");
    runner.run(
        Step::Generator,
        &generator_command(config, request.raw_name(), parent_dir.clone()),
    )?;

    println!("\n🎨 Adding theme and icon libraries...");
    runner.run(
        Step::Dependencies,
        &dependencies_command(config, &project_root),
    )?;

    println!("\n🧩 Installing UI component library...");
    runner.run(
        Step::ComponentsInit,
        &components_init_command(config, &project_root),
    )?;
    runner.run(
        Step::ComponentsAdd,
        &components_add_command(config, &project_root),
    )?;

    // === STEP 3: PROJECT TEMPLATES ===
    println!("\n📝 Writing project templates...");
    templates::write_all(&project_root, request.title())?;

    // === STEP 4: EDITOR (NON-FATAL) ===
    if config.launch_editor {
        open_editor(config, &project_root, runner);
    }

    println!(
        "\n✨ Project '{}' scaffolded successfully!",
        request.raw_name()
    );

    Ok(())
}

/// Resolve the directory the generator runs in and the resulting
/// project root. The configured projects dir is created if missing so
/// the generator has somewhere to work.
fn resolve_paths(
    config: &Config,
    raw_name: &str,
) -> Result<(Option<PathBuf>, PathBuf), ScaffoldError> {
    match &config.projects_dir {
        Some(dir) => {
            fs::create_dir_all(dir).map_err(|source| ScaffoldError::TemplateWrite {
                path: dir.clone(),
                source,
            })?;
            Ok((Some(dir.clone()), dir.join(raw_name)))
        }
        None => Ok((None, PathBuf::from(raw_name))),
    }
}

fn generator_command(config: &Config, raw_name: &str, cwd: Option<PathBuf>) -> ToolCommand {
    let mut command = ToolCommand::new(
        &config.package_manager,
        &[
            "create",
            "next-app@latest",
            raw_name,
            "--typescript",
            "--eslint",
            "--tailwind",
            "--src-dir",
            "--app",
            "--import-alias",
            "@/*",
        ],
    );
    if let Some(dir) = cwd {
        command = command.in_dir(dir);
    }
    command
}

fn dependencies_command(config: &Config, project_root: &Path) -> ToolCommand {
    ToolCommand::new(&config.package_manager, &["add", "next-themes", "lucide-react"])
        .in_dir(project_root)
}

fn components_init_command(config: &Config, project_root: &Path) -> ToolCommand {
    ToolCommand::new(
        &config.package_manager,
        &["dlx", "shadcn@latest", "init", "--defaults"],
    )
    .in_dir(project_root)
}

fn components_add_command(config: &Config, project_root: &Path) -> ToolCommand {
    ToolCommand::new(
        &config.package_manager,
        &["dlx", "shadcn@latest", "add", "--all", "--overwrite"],
    )
    .in_dir(project_root)
}

/// Open the configured editor on the finished project. The scaffold is
/// already complete here, so every failure path warns and returns.
fn open_editor(config: &Config, project_root: &Path, runner: &dyn ToolRunner) {
    if !preflight::editor_available(&config.editor) {
        println!(
            "\n⚠️  Editor '{}' not found on PATH - skipping launch",
            config.editor
        );
        return;
    }

    println!("\n🚀 Opening {} in {}...", project_root.display(), config.editor);

    let command = ToolCommand::new(&config.editor, &[&project_root.display().to_string()]);
    if let Err(e) = runner.run(Step::Editor, &command) {
        eprintln!("{} {}", "warning:".yellow().bold(), e);
    }
}
