//! High-level command orchestration for the CLI.
//!
//! One handler per subcommand (`list`, `change`, `get`). Handlers talk to
//! `crate::themes` and `crate::switch` for the filesystem work and print
//! through `crate::ui`.

use anyhow::{Context, Result, bail};

use crate::error::ThemeError;
use crate::paths::Paths;
use crate::switch::{ConfigStatus, activate_theme};
use crate::themes::list_themes;
use crate::ui::Ui;

/// List all available themes, marking the active one
pub fn list(paths: &Paths, ui: &Ui) -> Result<()> {
    let themes = list_themes(&paths.themes_dir)?;

    // A broken config link should not stop the listing
    let status = ConfigStatus::detect(&paths.config_link).unwrap_or_else(|e| {
        log::debug!("Could not inspect {}: {}", paths.config_link.display(), e);
        ConfigStatus::Missing
    });
    let rows = theme_rows(&themes, status.theme_name());

    ui.info("Available themes:");

    if rows.is_empty() {
        ui.warn(format!("No themes found in {}", paths.themes_dir.display()));
        ui.println(format!(
            "  Add a {} file there, then run {}",
            ui.bold("<name>.toml"),
            ui.bold("startheme change <name>")
        ));
        return Ok(());
    }

    let mut table = ui.simple_table();
    for (name, is_active) in rows {
        if is_active {
            table.add_row(vec![ui.cell(ui.icon_active()), ui.active_cell(name)]);
        } else {
            table.add_row(vec![ui.cell(""), ui.cell(name)]);
        }
    }
    ui.println(table.to_string());

    Ok(())
}

/// Pair each theme with whether it is the active one
pub fn theme_rows<'a>(themes: &'a [String], active: Option<&str>) -> Vec<(&'a str, bool)> {
    themes
        .iter()
        .map(|name| (name.as_str(), Some(name.as_str()) == active))
        .collect()
}

/// Point the config link at a theme
pub fn change(paths: &Paths, theme: &str, ui: &Ui) -> Result<()> {
    let activation = match activate_theme(&paths.themes_dir, &paths.config_link, theme) {
        Ok(activation) => activation,
        Err(e @ ThemeError::ThemeNotFound { .. }) => {
            bail!("{e}\nHint: Use 'startheme list' to see available themes.")
        }
        Err(e) => return Err(e).context("Failed to change theme"),
    };

    if activation.replaced.was_unmanaged() {
        ui.warn(format!(
            "Replaced {} (not managed by startheme). No backup was taken.",
            paths.config_link.display()
        ));
    }

    ui.ok(format!("Successfully changed theme to: {}", theme));
    ui.println(ui.dim(format!(
        "  {} -> {}",
        paths.config_link.display(),
        activation.target.display()
    )));

    Ok(())
}

/// Report the active theme
///
/// Always succeeds: a missing or unmanaged config is a normal state, and
/// inspection errors are printed rather than returned.
pub fn get(paths: &Paths, ui: &Ui) -> Result<()> {
    match ConfigStatus::detect(&paths.config_link) {
        Ok(ConfigStatus::Missing) => ui.notice("No starship config found"),
        Ok(ConfigStatus::Unmanaged) => {
            ui.notice("starship.toml is not a symlink (not managed by startheme)")
        }
        Ok(ConfigStatus::Active {
            name,
            target,
            dangling,
        }) => {
            ui.info(format!("Current theme: {}", name));
            ui.println(ui.dim(format!("  -> {}", target.display())));
            if dangling {
                ui.warn(format!(
                    "{} no longer exists. Run 'startheme change <name>' to pick another theme.",
                    target.display()
                ));
            }
        }
        Err(e) => ui.err(format!("{:#}", anyhow::Error::from(e))),
    }

    Ok(())
}
