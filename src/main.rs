use clap::Parser;
use colored::Colorize;

use appscaffold::config::{self, Config};
use appscaffold::error::ScaffoldError;
use appscaffold::scaffold;

#[derive(Parser)]
#[command(
    name = "scaffold",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Scaffold a web app: Next.js + Tailwind + shadcn/ui with dark mode wired up",
    long_about = None
)]
struct Cli {
    /// Project name (also the directory created for it)
    ///
    /// Optional at the parser level so the missing-name case reports a
    /// proper usage error with exit code 1.
    name: Option<String>,

    /// Package manager binary to drive the generators
    #[arg(long)]
    package_manager: Option<String>,

    /// Editor to open on the finished project
    #[arg(long)]
    editor: Option<String>,

    /// Don't open an editor when the scaffold completes
    #[arg(long, conflicts_with = "editor")]
    no_editor: bool,

    /// Directory to create the project under (defaults to the current
    /// directory; supports ~)
    #[arg(long, value_name = "PATH")]
    dir: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    };

    if let Err(e) = scaffold::execute(cli.name, &config) {
        eprintln!("{} {}", "error:".red().bold(), e);
        if matches!(e, ScaffoldError::InvalidArgument) {
            eprintln!("\nUsage: scaffold <project-name>");
        }
        std::process::exit(e.exit_code());
    }
}

/// Defaults ← user config file ← CLI flags.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = Config::load()?;

    if let Some(pm) = &cli.package_manager {
        config.package_manager = pm.clone();
    }
    if let Some(editor) = &cli.editor {
        config.editor = editor.clone();
    }
    if cli.no_editor {
        config.launch_editor = false;
    }
    if let Some(dir) = &cli.dir {
        config.projects_dir = Some(config::expand_path(dir));
    }

    Ok(config)
}
