/*!
 * Common test utilities for the winupdate-docs test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;
use winupdate_docs::app_config::Config;

/// Routes library log output through the test harness
pub fn init_test_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates a small changelog in the layout of the real one
pub fn create_test_changelog(dir: &Path, filename: &str) -> Result<PathBuf> {
    let content = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Changelog</title></head>
<body>
<h3 style="color: red;">Versjon 2026.01.19</h3>
<p>Denne versjonen inneholder:</p>
<ul>
  <li>Systemstatusikon med <strong>periodisk</strong> skanning</li>
  <li>Flerspråklig støtte</li>
</ul>
<hr>
<h3>Versjon 2025.12.01</h3>
<p>Første utgivelse.</p>
</body>
</html>
"#;
    create_test_file(dir, filename, content)
}

/// Config whose relative paths all land in `dir`
pub fn config_in(dir: &Path) -> Config {
    Config {
        output_dir: dir.to_string_lossy().to_string(),
        ..Config::default()
    }
}

/// Helper to get the absolute path to a bundled resource
pub fn resource_path(relative_path: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("resources");
    path.push(relative_path);
    path
}
