use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const RU_STRINGS: &str = r#"{
    "greeting": "Привет",
    "menu": { "file": { "open": "Открыть" } },
    "retries": 3
}"#;

pub const EN_STRINGS: &str = r#"{
    "greeting": "Hello",
    "menu": { "file": { "open": "Open" } },
    "retries": 3
}"#;

pub const ICONS: &str = r#"
save = "disk"
sizes = [16, 32, 64]

[toolbar]
visible = true
"#;

/// Creates a resource tree:
/// `ru-RU/strings.json`, `en-US/strings.json`, `icons.toml`.
pub fn resource_tree() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    write(dir.path(), "ru-RU/strings.json", RU_STRINGS);
    write(dir.path(), "en-US/strings.json", EN_STRINGS);
    write(dir.path(), "icons.toml", ICONS);
    dir
}

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, content).expect("write fixture");
}
