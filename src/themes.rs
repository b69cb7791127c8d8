//! Theme discovery.
//!
//! A theme is a non-directory entry directly inside the themes directory whose
//! name ends in [`THEME_EXTENSION`]. Its name is the file name minus that
//! extension.

use std::fs;
use std::path::Path;

use crate::error::ThemeError;

/// Extension every theme file carries
pub const THEME_EXTENSION: &str = ".toml";

/// Strip [`THEME_EXTENSION`] from a file name, if present
pub fn theme_name_from_file_name(file_name: &str) -> &str {
    file_name.strip_suffix(THEME_EXTENSION).unwrap_or(file_name)
}

/// List available themes, sorted by name
///
/// Entries are classified by their own file type, so a symlink named
/// `foo.toml` is listed even when it points at a directory.
pub fn list_themes(themes_dir: &Path) -> Result<Vec<String>, ThemeError> {
    let access = |source| ThemeError::DirectoryAccess {
        path: themes_dir.to_path_buf(),
        source,
    };

    let mut themes = Vec::new();
    for entry in fs::read_dir(themes_dir).map_err(access)? {
        let entry = entry.map_err(access)?;
        let file_type = entry.file_type().map_err(access)?;
        if file_type.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            log::debug!("Skipping non UTF-8 entry {:?}", entry.path());
            continue;
        };

        match file_name.strip_suffix(THEME_EXTENSION) {
            Some(name) => themes.push(name.to_string()),
            None => log::debug!("Skipping {file_name}: not a theme file"),
        }
    }

    themes.sort();
    Ok(themes)
}
