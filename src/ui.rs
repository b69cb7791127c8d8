//! UI module for startheme - output styling, color detection, listing tables.
//!
//! # No-color detection (in priority order):
//! 1. `--no-color` CLI flag (highest priority)
//! 2. `NO_COLOR` environment variable (any value)
//! 3. `TERM=dumb` environment variable
//! 4. Non-TTY stdout (for `--color auto`)

use anstream::{eprintln, print, println};
use anstyle::{AnsiColor, Color, Style};
use comfy_table::{Cell, ContentArrangement, Table, presets};
use std::io::IsTerminal;

/// Color mode for output
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Always,
    #[default]
    Auto,
    Never,
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "always" => Ok(Self::Always),
            "auto" => Ok(Self::Auto),
            "never" => Ok(Self::Never),
            _ => Err(format!("invalid color mode: {}", s)),
        }
    }
}

/// UI context holding resolved display settings
#[derive(Debug, Clone)]
pub struct Ui {
    pub color_enabled: bool,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new(ColorMode::Auto, false)
    }
}

impl Ui {
    pub fn new(mode: ColorMode, force_no_color: bool) -> Self {
        let color_enabled = Self::resolve_color(mode, force_no_color);

        if !color_enabled {
            anstream::ColorChoice::write_global(anstream::ColorChoice::Never);
        }

        Self { color_enabled }
    }

    fn resolve_color(mode: ColorMode, force_no_color: bool) -> bool {
        if force_no_color || std::env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if std::env::var("TERM").is_ok_and(|t| t == "dumb") {
            return false;
        }

        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }

    fn style(&self, color: AnsiColor) -> Style {
        if self.color_enabled {
            Style::new().fg_color(Some(Color::Ansi(color))).bold()
        } else {
            Style::new()
        }
    }

    /// Print a green success line to stdout
    pub fn ok(&self, msg: impl AsRef<str>) {
        let st = self.style(AnsiColor::Green);
        println!("{st}{} {}{st:#}", self.icon_ok(), msg.as_ref());
    }

    /// Print a yellow warning line to stdout
    pub fn warn(&self, msg: impl AsRef<str>) {
        let st = self.style(AnsiColor::Yellow);
        println!("{st}{} {}{st:#}", self.icon_warn(), msg.as_ref());
    }

    /// Print a red error line to stderr
    pub fn err(&self, msg: impl AsRef<str>) {
        let st = self.style(AnsiColor::Red);
        eprintln!("{st}{} {}{st:#}", self.icon_err(), msg.as_ref());
    }

    /// Print a red notice to stdout, for outcomes that are not failures
    pub fn notice(&self, msg: impl AsRef<str>) {
        let st = self.style(AnsiColor::Red);
        println!("{st}{} {}{st:#}", self.icon_err(), msg.as_ref());
    }

    /// Print a blue heading line to stdout
    pub fn info(&self, msg: impl AsRef<str>) {
        let st = self.style(AnsiColor::Blue);
        println!("{st}{}{st:#}", msg.as_ref());
    }

    pub fn dim(&self, s: impl AsRef<str>) -> String {
        if self.color_enabled {
            let st = Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack)));
            format!("{st}{}{st:#}", s.as_ref())
        } else {
            s.as_ref().to_string()
        }
    }

    pub fn bold(&self, s: impl AsRef<str>) -> String {
        if self.color_enabled {
            let st = Style::new().bold();
            format!("{st}{}{st:#}", s.as_ref())
        } else {
            s.as_ref().to_string()
        }
    }

    pub fn icon_ok(&self) -> &'static str {
        if self.color_enabled { "✓" } else { "[OK]" }
    }

    pub fn icon_warn(&self) -> &'static str {
        if self.color_enabled { "⚠" } else { "[!]" }
    }

    pub fn icon_err(&self) -> &'static str {
        if self.color_enabled { "✖" } else { "[X]" }
    }

    pub fn icon_active(&self) -> &'static str {
        if self.color_enabled { "●" } else { "*" }
    }

    /// Borderless table, one row per line
    pub fn simple_table(&self) -> Table {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.load_preset(presets::NOTHING);
        table
    }

    pub fn cell(&self, content: impl Into<String>) -> Cell {
        Cell::new(content.into())
    }

    /// Green cell when color is enabled, styled by comfy-table to keep widths right
    pub fn active_cell(&self, content: impl Into<String>) -> Cell {
        let cell = Cell::new(content.into());
        if self.color_enabled {
            cell.fg(comfy_table::Color::Green)
                .add_attribute(comfy_table::Attribute::Bold)
        } else {
            cell
        }
    }

    pub fn println(&self, msg: impl AsRef<str>) {
        println!("{}", msg.as_ref());
    }

    /// Print text as-is, without a trailing newline
    pub fn print(&self, msg: impl AsRef<str>) {
        print!("{}", msg.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_parse() {
        assert_eq!("always".parse::<ColorMode>().unwrap(), ColorMode::Always);
        assert_eq!("AUTO".parse::<ColorMode>().unwrap(), ColorMode::Auto);
        assert_eq!("never".parse::<ColorMode>().unwrap(), ColorMode::Never);
        assert!("sometimes".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_ui_force_no_color() {
        let ui = Ui::new(ColorMode::Always, true);
        assert!(!ui.color_enabled);
    }

    #[test]
    fn test_icons_no_color() {
        let ui = Ui::new(ColorMode::Never, false);
        assert_eq!(ui.icon_ok(), "[OK]");
        assert_eq!(ui.icon_err(), "[X]");
        assert_eq!(ui.icon_active(), "*");
    }

    #[test]
    fn test_styling_is_plain_without_color() {
        let ui = Ui::new(ColorMode::Never, false);
        assert_eq!(ui.dim("target"), "target");
        assert_eq!(ui.bold("nord"), "nord");
    }

    #[test]
    fn test_simple_table_rows() {
        let ui = Ui::new(ColorMode::Never, false);
        let mut table = ui.simple_table();
        table.add_row(vec![ui.cell("*"), ui.active_cell("nord")]);
        table.add_row(vec![ui.cell(""), ui.cell("gruvbox")]);
        assert_eq!(table.to_string().lines().count(), 2);
    }
}
