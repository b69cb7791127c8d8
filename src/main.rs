use anyhow::Result;
use std::process::ExitCode;

use startheme::{
    cli::{self, Cli, Commands, Invocation},
    commands,
    paths::Paths,
    ui::Ui,
};

fn main() -> ExitCode {
    let cli = match Invocation::from_args(std::env::args_os()) {
        Invocation::Run(cli) => cli,
        Invocation::Print(text) => {
            Ui::default().print(text);
            return ExitCode::SUCCESS;
        }
        Invocation::Rejected(err) => {
            let ui = Ui::default();
            ui.err(err.to_string());
            ui.print(cli::usage());
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose);
    let ui = Ui::new(cli.color, cli.no_color);

    match run(cli, &ui) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui.err(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, ui: &Ui) -> Result<()> {
    let paths = Paths::new()?;
    log::debug!(
        "themes dir {}, config link {}",
        paths.themes_dir.display(),
        paths.config_link.display()
    );

    match cli.command {
        Commands::List => commands::list(&paths, ui),
        Commands::Change { theme } => commands::change(&paths, &theme, ui),
        Commands::Get => commands::get(&paths, ui),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
