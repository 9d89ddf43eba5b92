//! File System Utilities
//!
//! Configuration and data directory management for the explorer.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Create `dir` (and parents) if missing; existing contents are left alone
fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("gov", "uswds", "uswds-gpui").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the explorer's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/uswds-gpui/` or `$XDG_CONFIG_HOME/uswds-gpui/`
/// - **macOS**: `~/Library/Application Support/gov.uswds.uswds-gpui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\uswds\uswds-gpui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.config_dir())
}

/// Get or create the data directory, which holds the log files
///
/// Platform-specific locations:
/// - **Linux**: `~/.local/share/uswds-gpui/`
/// - **macOS**: `~/Library/Application Support/gov.uswds.uswds-gpui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\uswds\uswds-gpui\data\`
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    ensure_dir(project_dirs()?.data_dir())
}

/// Check if running in development mode
pub fn is_development() -> bool {
    cfg!(debug_assertions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("uswds-gpui-{name}-{}", std::process::id()))
    }

    #[test]
    fn test_ensure_dir_keeps_nested_contents() {
        let root = temp_root("keep");
        fs::create_dir_all(root.join("notes")).expect("create nested dir");
        fs::write(root.join("notes").join("keep.txt"), "keep").expect("write file");

        let dir = ensure_dir(&root).expect("ensure existing dir");

        assert_eq!(dir, root);
        assert_eq!(fs::read_to_string(root.join("notes").join("keep.txt")).expect("read file"), "keep");
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_ensure_dir_creates_missing_parents() {
        let root = temp_root("create");
        let deep = root.join("a").join("b");

        ensure_dir(&deep).expect("create missing dir");

        assert!(deep.is_dir());
        let _ = fs::remove_dir_all(&root);
    }
}
