use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use console::{style, Term};

use desktop_starter::error::{Result, StarterError};
use desktop_starter::logging;
use desktop_starter::setup::{
    copy_env_files, detect_package_manager, is_yes, rename_project, EnvFileOutcome,
    PackageManager, ENV_FILES,
};

const SETUP_FILTER: &str = "warn,desktop_starter=info";

#[derive(Parser, Debug)]
#[command(name = "starter-setup")]
#[command(about = "One-time setup after cloning the starter")]
struct Cli {
    /// Project directory to set up.
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn info(msg: &str) {
    println!("{} {msg}", style("ℹ").blue());
}

fn success(msg: &str) {
    println!("{} {msg}", style("✓").green());
}

fn warning(msg: &str) {
    println!("{} {msg}", style("⚠").yellow());
}

fn error(msg: &str) {
    println!("{} {msg}", style("✗").red());
}

fn title(msg: &str) {
    println!("\n{}\n", style(msg).cyan().bold());
}

fn prompt_line(prompt: &str) -> Result<String> {
    let mut out = io::stdout();
    write!(out, "{} {prompt}", style("?").cyan()).map_err(|e| StarterError::Io(e.to_string()))?;
    out.flush().map_err(|e| StarterError::Io(e.to_string()))?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| StarterError::Io(e.to_string()))?;
    Ok(input)
}

fn main() -> ExitCode {
    logging::init(SETUP_FILTER);
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error("Setup failed!");
            error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let _ = Term::stdout().clear_screen();
    title("🚀 Desktop Starter Setup");

    info("Setting up environment variables...");
    for (file, outcome) in copy_env_files(&cli.root, ENV_FILES)? {
        match outcome {
            EnvFileOutcome::AlreadyExists => {
                warning(&format!("{} already exists, skipping...", file.name))
            }
            EnvFileOutcome::Created => success(&format!("Created {}", file.name)),
            EnvFileOutcome::TemplateMissing => error(&format!("{} not found!", file.src)),
        }
    }

    info("\nDetecting package manager...");
    let manager = detect_package_manager(&cli.root);
    success(&format!("Detected: {manager}"));

    let answer = prompt_line(&format!("\nInstall dependencies with {manager}? (y/n): "))?;
    if is_yes(&answer) {
        info(&format!("\nInstalling dependencies with {manager}..."));
        if let Err(err) = manager.install(&cli.root) {
            error("Failed to install dependencies");
            return Err(err);
        }
        success("Dependencies installed successfully!");
    } else {
        warning("Skipping dependency installation");
        info(&format!("Run \"{}\" manually when ready", manager.install_command()));
    }

    let answer = prompt_line("\nWould you like to rename the project? (y/n): ")?;
    if is_yes(&answer) {
        let new_name = prompt_line("Enter new project name: ")?;
        if !new_name.trim().is_empty() {
            match rename_project(&cli.root, &new_name) {
                Ok(report) => {
                    for path in &report.updated {
                        success(&format!("Updated {}", path.display()));
                    }
                    success(&format!("Project renamed to: {}", new_name.trim()));
                }
                Err(err) => {
                    error("Failed to rename project");
                    error(&err.to_string());
                }
            }
        }
    }

    print_next_steps(manager);
    Ok(())
}

fn print_next_steps(manager: PackageManager) {
    title("✨ Setup Complete!");
    let cmd = |script: &str| style(manager.script_command(script)).cyan().to_string();

    println!("{}\n", style("Next steps:").bold());
    println!("  1. Review and customize your {} file", style(".env").cyan());
    println!("  2. Start development: {}", cmd("dev"));
    println!("  3. Generate a feature: {}\n", style("create-slice <name> list create").cyan());

    println!("{}\n", style("Useful commands:").bold());
    println!("  {}      - Start development", cmd("dev"));
    println!("  {}    - Build for production", cmd("build"));
    println!("  {}           - Check code quality", cmd("lint"));
    println!("  {}         - Format code\n", cmd("format"));

    println!("{} Check out the {}\n", style("Need help?").bold(), style("README.md").cyan());
}
