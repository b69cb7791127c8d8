use directories::BaseDirs;
use std::path::{Path, PathBuf};

use crate::error::ThemeError;
use crate::themes::THEME_EXTENSION;

/// All computed paths used by startheme
#[derive(Debug, Clone)]
pub struct Paths {
    /// ~/.config/starship
    pub themes_dir: PathBuf,
    /// ~/.config/starship.toml
    pub config_link: PathBuf,
}

impl Paths {
    pub fn new() -> Result<Self, ThemeError> {
        let base_dirs = BaseDirs::new().ok_or(ThemeError::HomeDirectory)?;
        Ok(Self::from_home(base_dirs.home_dir()))
    }

    /// Lay out the fixed paths under an explicit home directory
    pub fn from_home(home: &Path) -> Self {
        let config_dir = home.join(".config");
        let themes_dir = config_dir.join("starship");
        let config_link = config_dir.join("starship.toml");

        Self {
            themes_dir,
            config_link,
        }
    }

    /// Get the path of a theme file, whether or not it exists
    pub fn theme_file(&self, name: &str) -> PathBuf {
        theme_file_in(&self.themes_dir, name)
    }
}

/// `name` always lands under `themes_dir`, even when it starts with a separator
pub(crate) fn theme_file_in(themes_dir: &Path, name: &str) -> PathBuf {
    let name = name.trim_start_matches(std::path::is_separator);
    themes_dir.join(format!("{name}{THEME_EXTENSION}"))
}
