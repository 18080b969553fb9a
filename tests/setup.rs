use std::fs;

use serde_json::{json, Value};

use desktop_starter::setup::{
    copy_env_files, detect_package_manager, rename_project, EnvFile, EnvFileOutcome,
    PackageManager, ENV_FILES,
};

#[test]
fn env_files_are_copied_once() {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join(".env.example"), "STARTER_DB_PATH=./data/app.db\n").unwrap();

    let first = copy_env_files(root.path(), ENV_FILES).unwrap();
    assert_eq!(first[0].1, EnvFileOutcome::Created);
    assert_eq!(
        fs::read_to_string(root.path().join(".env")).unwrap(),
        "STARTER_DB_PATH=./data/app.db\n"
    );

    fs::write(root.path().join(".env"), "CUSTOM=1\n").unwrap();
    let second = copy_env_files(root.path(), ENV_FILES).unwrap();
    assert_eq!(second[0].1, EnvFileOutcome::AlreadyExists);
    assert_eq!(fs::read_to_string(root.path().join(".env")).unwrap(), "CUSTOM=1\n");

    let missing = EnvFile {
        src: "backend/.env.example",
        dest: "backend/.env",
        name: "Backend .env",
    };
    let outcome = copy_env_files(root.path(), &[missing]).unwrap();
    assert_eq!(outcome[0].1, EnvFileOutcome::TemplateMissing);
}

#[test]
fn lockfiles_pick_the_package_manager() {
    let root = tempfile::tempdir().unwrap();
    assert_eq!(detect_package_manager(root.path()), PackageManager::Cargo);

    fs::write(root.path().join("Cargo.toml"), "").unwrap();
    assert_eq!(detect_package_manager(root.path()), PackageManager::Cargo);

    fs::write(root.path().join("package.json"), "{}").unwrap();
    assert_eq!(detect_package_manager(root.path()), PackageManager::Npm);

    fs::write(root.path().join("yarn.lock"), "").unwrap();
    assert_eq!(detect_package_manager(root.path()), PackageManager::Yarn);

    fs::write(root.path().join("pnpm-lock.yaml"), "").unwrap();
    assert_eq!(detect_package_manager(root.path()), PackageManager::Pnpm);

    fs::write(root.path().join("bun.lock"), "").unwrap();
    assert_eq!(detect_package_manager(root.path()), PackageManager::Bun);
}

#[test]
fn rename_updates_manifest_and_app_config() {
    let root = tempfile::tempdir().unwrap();
    fs::write(
        root.path().join("Cargo.toml"),
        "[package]\nname = \"desktop-starter\"\nversion = \"0.1.0\"\n\n[[bin]]\nname = \"create-slice\"\n",
    )
    .unwrap();
    fs::write(
        root.path().join("starter.json"),
        json!({
            "product_name": "Desktop Starter",
            "identifier": "com.example.desktop-starter",
            "version": "0.1.0"
        })
        .to_string(),
    )
    .unwrap();

    let report = rename_project(root.path(), "  My Cool App ").unwrap();
    assert_eq!(report.slug, "my-cool-app");
    assert_eq!(report.updated.len(), 2);

    let manifest = fs::read_to_string(root.path().join("Cargo.toml")).unwrap();
    assert!(manifest.contains("name = \"my-cool-app\""));
    assert!(manifest.contains("name = \"create-slice\""));

    let config: Value =
        serde_json::from_str(&fs::read_to_string(root.path().join("starter.json")).unwrap())
            .unwrap();
    assert_eq!(config["product_name"], "My Cool App");
    assert_eq!(config["identifier"], "com.example.my-cool-app");
    assert_eq!(config["version"], "0.1.0");
}

#[test]
fn rename_skips_missing_files_and_rejects_blank_names() {
    let root = tempfile::tempdir().unwrap();
    let report = rename_project(root.path(), "Solo").unwrap();
    assert!(report.updated.is_empty());
    assert!(rename_project(root.path(), "   ").is_err());
}
