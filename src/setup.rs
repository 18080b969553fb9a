//! Building blocks for the one-time `starter-setup` tool: env file copying,
//! package-manager detection and project renaming.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::{Result, StarterError};

pub const TEMPLATE_PACKAGE_NAME: &str = "desktop-starter";

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));
static TEMPLATE_NAME_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r#"name = "{}""#, regex::escape(TEMPLATE_PACKAGE_NAME)))
        .expect("valid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvFile {
    pub src: &'static str,
    pub dest: &'static str,
    pub name: &'static str,
}

pub const ENV_FILES: &[EnvFile] = &[EnvFile {
    src: ".env.example",
    dest: ".env",
    name: "Environment .env",
}];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileOutcome {
    Created,
    AlreadyExists,
    TemplateMissing,
}

/// Copies each template to its destination unless the destination already exists.
pub fn copy_env_files(root: &Path, files: &[EnvFile]) -> Result<Vec<(EnvFile, EnvFileOutcome)>> {
    let mut outcomes = Vec::with_capacity(files.len());
    for file in files {
        let src = root.join(file.src);
        let dest = root.join(file.dest);
        let outcome = if dest.exists() {
            EnvFileOutcome::AlreadyExists
        } else if src.exists() {
            fs::copy(&src, &dest).map_err(|e| StarterError::Io(e.to_string()))?;
            EnvFileOutcome::Created
        } else {
            EnvFileOutcome::TemplateMissing
        };
        outcomes.push((*file, outcome));
    }
    Ok(outcomes)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Cargo,
    Bun,
    Pnpm,
    Yarn,
    Npm,
}

impl PackageManager {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cargo => "cargo",
            Self::Bun => "bun",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Npm => "npm",
        }
    }

    pub fn install_args(self) -> &'static [&'static str] {
        match self {
            Self::Cargo => &["fetch"],
            _ => &["install"],
        }
    }

    pub fn install_command(self) -> String {
        format!("{} {}", self.as_str(), self.install_args().join(" "))
    }

    /// Command line for a project script (`dev`, `build`, `lint`, `format`).
    pub fn script_command(self, script: &str) -> String {
        match (self, script) {
            (Self::Cargo, "dev") => "cargo run".to_string(),
            (Self::Cargo, "build") => "cargo build --release".to_string(),
            (Self::Cargo, "lint") => "cargo clippy".to_string(),
            (Self::Cargo, "format") => "cargo fmt".to_string(),
            (Self::Cargo, other) => format!("cargo {other}"),
            (Self::Npm, other) => format!("npm run {other}"),
            (manager, other) => format!("{} {other}", manager.as_str()),
        }
    }

    pub fn install(self, root: &Path) -> Result<()> {
        let status = Command::new(self.as_str())
            .args(self.install_args())
            .current_dir(root)
            .status()
            .map_err(|e| StarterError::Runtime(e.to_string()))?;
        if !status.success() {
            return Err(StarterError::Runtime(format!(
                "`{}` exited with {status}",
                self.install_command()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lockfiles win over manifests; with nothing recognizable the project is treated as cargo.
pub fn detect_package_manager(root: &Path) -> PackageManager {
    let markers = [
        ("bun.lock", PackageManager::Bun),
        ("pnpm-lock.yaml", PackageManager::Pnpm),
        ("yarn.lock", PackageManager::Yarn),
        ("package.json", PackageManager::Npm),
        ("Cargo.toml", PackageManager::Cargo),
    ];
    markers
        .into_iter()
        .find(|(file, _)| root.join(file).exists())
        .map(|(_, manager)| manager)
        .unwrap_or(PackageManager::Cargo)
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// `"My Cool  App "` -> `"my-cool-app"`.
pub fn slugify_project_name(name: &str) -> String {
    WHITESPACE
        .replace_all(&name.trim().to_lowercase(), "-")
        .into_owned()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    pub slug: String,
    pub updated: Vec<PathBuf>,
}

/// Rewrites project metadata for `new_name`. Files that do not exist are skipped.
pub fn rename_project(root: &Path, new_name: &str) -> Result<RenameReport> {
    let display_name = new_name.trim();
    if display_name.is_empty() {
        return Err(StarterError::Validation(
            "project name must not be empty".to_string(),
        ));
    }
    let slug = slugify_project_name(display_name);
    let mut report = RenameReport {
        slug: slug.clone(),
        updated: Vec::new(),
    };

    let cargo_toml = root.join("Cargo.toml");
    if cargo_toml.exists() {
        let content =
            fs::read_to_string(&cargo_toml).map_err(|e| StarterError::Io(e.to_string()))?;
        let replacement = format!(r#"name = "{slug}""#);
        let renamed = TEMPLATE_NAME_LINE.replace(&content, regex::NoExpand(&replacement));
        fs::write(&cargo_toml, renamed.as_ref()).map_err(|e| StarterError::Io(e.to_string()))?;
        report.updated.push(cargo_toml);
    }

    let config_path = root.join(DEFAULT_CONFIG_FILE);
    if config_path.exists() {
        let content =
            fs::read_to_string(&config_path).map_err(|e| StarterError::Io(e.to_string()))?;
        let mut value: Value =
            serde_json::from_str(&content).map_err(|e| StarterError::Config(e.to_string()))?;
        rename_config_value(&mut value, display_name, &slug);
        let pretty = serde_json::to_string_pretty(&value)
            .map_err(|e| StarterError::Config(e.to_string()))?;
        fs::write(&config_path, pretty).map_err(|e| StarterError::Io(e.to_string()))?;
        report.updated.push(config_path);
    }

    tracing::info!(slug = %report.slug, files = report.updated.len(), "project renamed");
    Ok(report)
}

fn rename_config_value(value: &mut Value, display_name: &str, slug: &str) {
    let Some(map) = value.as_object_mut() else {
        return;
    };
    if map.contains_key("product_name") {
        map.insert(
            "product_name".to_string(),
            Value::String(display_name.to_string()),
        );
    }
    let identifier = map
        .get("identifier")
        .and_then(|v| v.as_str())
        .map(|current| rename_identifier(current, slug));
    if let Some(identifier) = identifier {
        map.insert("identifier".to_string(), Value::String(identifier));
    }
}

/// Replaces the last dot-separated segment: `com.example.old` -> `com.example.<slug>`.
pub fn rename_identifier(identifier: &str, slug: &str) -> String {
    match identifier.rsplit_once('.') {
        Some((domain, _)) => format!("{domain}.{slug}"),
        None => format!(".{slug}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_answers() {
        assert!(is_yes("y"));
        assert!(is_yes("YES"));
        assert!(is_yes(" Yes\n"));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
        assert!(!is_yes("yep"));
    }

    #[test]
    fn slugs_collapse_whitespace() {
        assert_eq!(slugify_project_name("My Cool  App "), "my-cool-app");
        assert_eq!(slugify_project_name("tasks"), "tasks");
        assert_eq!(slugify_project_name("A\tB"), "a-b");
    }

    #[test]
    fn identifier_keeps_domain() {
        assert_eq!(
            rename_identifier("com.example.desktop-starter", "notes"),
            "com.example.notes"
        );
        assert_eq!(rename_identifier("single", "notes"), ".notes");
    }

    #[test]
    fn script_commands_per_manager() {
        assert_eq!(PackageManager::Cargo.script_command("dev"), "cargo run");
        assert_eq!(PackageManager::Npm.script_command("lint"), "npm run lint");
        assert_eq!(PackageManager::Bun.script_command("build"), "bun build");
        assert_eq!(PackageManager::Cargo.install_command(), "cargo fetch");
        assert_eq!(PackageManager::Yarn.install_command(), "yarn install");
    }
}
