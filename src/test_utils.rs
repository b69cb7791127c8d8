//! Test utilities shared across test modules

use std::fs;
use std::path::PathBuf;

use crate::paths::Paths;
use tempfile::TempDir;

/// Create a Paths struct rooted at a temporary home directory
///
/// The themes directory is created, mimicking a real ~/.config/starship/.
/// The config link is left absent.
pub fn setup_test_paths(temp_dir: &TempDir) -> Paths {
    let paths = Paths::from_home(temp_dir.path());
    fs::create_dir_all(&paths.themes_dir).unwrap();
    paths
}

/// Write an empty theme file and return its path
pub fn write_theme(paths: &Paths, name: &str) -> PathBuf {
    let path = paths.theme_file(name);
    fs::write(&path, format!("# {name}\n")).unwrap();
    path
}
