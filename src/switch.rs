//! Theme switching logic.
//!
//! This module implements the core mechanism of `startheme`:
//! - Pointing the config link at a theme file (Activate).
//! - Reading back which theme the config link points at (Inspect).
//!
//! Whatever occupies the config path is removed before linking. Nothing is
//! backed up, and if linking fails after the removal the path stays absent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::ThemeError;
use crate::paths::theme_file_in;
use crate::themes::theme_name_from_file_name;

/// Represents the state of the config path
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigStatus {
    /// Nothing exists at the config path
    Missing,
    /// A regular file or directory the tool did not create
    Unmanaged,
    /// A symlink, which startheme treats as an active theme
    Active {
        name: String,
        target: PathBuf,
        /// The link target no longer exists
        dangling: bool,
    },
}

impl ConfigStatus {
    pub fn detect(config_link: &Path) -> Result<Self, ThemeError> {
        // symlink_metadata so the link itself is inspected, not its target
        let meta = match fs::symlink_metadata(config_link) {
            Ok(meta) => meta,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::Missing),
            Err(source) => {
                return Err(ThemeError::Stat {
                    path: config_link.to_path_buf(),
                    source,
                });
            }
        };

        if !meta.file_type().is_symlink() {
            return Ok(Self::Unmanaged);
        }

        let target = fs::read_link(config_link).map_err(|source| ThemeError::Readlink {
            path: config_link.to_path_buf(),
            source,
        })?;
        log::debug!("{} -> {}", config_link.display(), target.display());

        let name = match target.file_name() {
            Some(file_name) => theme_name_from_file_name(&file_name.to_string_lossy()).to_string(),
            None => target.to_string_lossy().into_owned(),
        };
        let dangling = !config_link.exists();

        Ok(Self::Active {
            name,
            target,
            dangling,
        })
    }

    /// Name of the active theme, if the config path is a managed link
    pub fn theme_name(&self) -> Option<&str> {
        match self {
            Self::Active { name, .. } => Some(name),
            _ => None,
        }
    }
}

/// What occupied the config path before a switch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replaced {
    Nothing,
    Symlink,
    File,
    Directory,
}

impl Replaced {
    /// Whether the replaced entry was something startheme never created
    pub fn was_unmanaged(self) -> bool {
        matches!(self, Self::File | Self::Directory)
    }
}

/// Outcome of a successful switch
#[derive(Debug)]
pub struct Activation {
    /// Absolute path the config link now points at
    pub target: PathBuf,
    pub replaced: Replaced,
}

/// Point `config_link` at the theme `name` inside `themes_dir`
pub fn activate_theme(
    themes_dir: &Path,
    config_link: &Path,
    name: &str,
) -> Result<Activation, ThemeError> {
    let theme_file = theme_file_in(themes_dir, name);
    let stat_err = |path: &Path, source| ThemeError::Stat {
        path: path.to_path_buf(),
        source,
    };

    // 1. The theme must exist and must not be a directory
    match fs::metadata(&theme_file) {
        Ok(meta) if meta.is_dir() => {
            return Err(ThemeError::ThemeIsDirectory {
                name: name.to_string(),
            });
        }
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(ThemeError::ThemeNotFound {
                name: name.to_string(),
            });
        }
        Err(source) => return Err(stat_err(&theme_file, source)),
    }
    let target =
        std::path::absolute(&theme_file).map_err(|source| stat_err(&theme_file, source))?;

    // 2. Remove whatever is at the config path
    let replaced = remove_existing(config_link)?;

    // 3. Link
    make_symlink(&target, config_link)?;
    log::debug!("Linked {} -> {}", config_link.display(), target.display());

    Ok(Activation { target, replaced })
}

fn remove_existing(config_link: &Path) -> Result<Replaced, ThemeError> {
    let meta = match fs::symlink_metadata(config_link) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Replaced::Nothing),
        Err(source) => {
            return Err(ThemeError::Stat {
                path: config_link.to_path_buf(),
                source,
            });
        }
    };

    let file_type = meta.file_type();
    let (replaced, result) = if file_type.is_symlink() {
        (Replaced::Symlink, remove_link(config_link))
    } else if file_type.is_dir() {
        // Only empty directories go, like `rmdir`
        (Replaced::Directory, fs::remove_dir(config_link))
    } else {
        (Replaced::File, fs::remove_file(config_link))
    };

    result.map_err(|source| ThemeError::RemoveFailed {
        path: config_link.to_path_buf(),
        source,
    })?;
    log::debug!("Removed existing {:?} at {}", replaced, config_link.display());

    Ok(replaced)
}

#[cfg(unix)]
fn remove_link(link: &Path) -> io::Result<()> {
    // remove_file removes the symlink itself
    fs::remove_file(link)
}

#[cfg(windows)]
fn remove_link(link: &Path) -> io::Result<()> {
    // Directory symlinks on Windows need remove_dir
    fs::remove_file(link).or_else(|_| fs::remove_dir(link))
}

fn make_symlink(target: &Path, link: &Path) -> Result<(), ThemeError> {
    let link_err = |source| ThemeError::LinkCreateFailed {
        link: link.to_path_buf(),
        target: target.to_path_buf(),
        source,
    };

    // Create parent dir if missing
    if let Some(parent) = link.parent() {
        fs::create_dir_all(parent).map_err(link_err)?;
    }

    #[cfg(unix)]
    std::os::unix::fs::symlink(target, link).map_err(link_err)?;

    #[cfg(windows)]
    std::os::windows::fs::symlink_file(target, link).map_err(link_err)?;

    Ok(())
}
