//! Command-line surface.
//!
//! clap parses argv; [`Invocation`] folds clap's help, version and error
//! outcomes into the exit behavior startheme promises: help is never a
//! failure, an unknown subcommand or a missing theme name always is.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, Parser, Subcommand};
use std::ffi::OsString;

use crate::error::ThemeError;
use crate::ui::ColorMode;

pub const NO_BACKUP_WARNING: &str =
    "WARNING: this command isn't going to back up your current starship theme. so please do so";

#[derive(Parser, Debug)]
#[command(name = "startheme")]
#[command(about = "Hotswap starship themes by relinking ~/.config/starship.toml")]
#[command(version, arg_required_else_help = true)]
#[command(after_help = NO_BACKUP_WARNING)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// When to use colors: always, auto, never
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Log each filesystem step to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Change the current theme
    Change {
        /// Theme name, the file name in ~/.config/starship without .toml
        #[arg(allow_hyphen_values = true)]
        theme: String,
    },

    /// List themes
    List,

    /// Get current theme
    Get,
}

/// What a process run should do with its argv
#[derive(Debug)]
pub enum Invocation {
    Run(Cli),
    /// Help or version text was requested; print it and exit 0
    Print(String),
    /// argv was rejected; report the error, then usage, and exit 1
    Rejected(ThemeError),
}

impl Invocation {
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Self::Run(cli),
            Err(err) => Self::from_error(&err),
        }
    }

    fn from_error(err: &clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Self::Print(err.render().to_string())
            }
            ErrorKind::InvalidSubcommand => Self::Rejected(ThemeError::UnknownCommand(
                context_string(err, ContextKind::InvalidSubcommand),
            )),
            ErrorKind::MissingRequiredArgument => Self::Rejected(ThemeError::MissingArgument(
                context_string(err, ContextKind::InvalidArg),
            )),
            _ => Self::Rejected(ThemeError::InvalidArguments(summary(err))),
        }
    }
}

/// Rendered top-level help text
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

fn context_string(err: &clap::Error, kind: ContextKind) -> String {
    match err.get(kind) {
        Some(ContextValue::String(s)) => s.clone(),
        Some(ContextValue::Strings(values)) => values.join(", "),
        _ => summary(err),
    }
}

fn summary(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}
