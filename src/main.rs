//! trimr binary entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use trimr::cli::{Cli, Commands, ConfigCommands};
use trimr::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Clamp { percent, window } => {
            commands::clamp::handle_clamp(percent, &window, cli.verbose)
        }
        Commands::Keys { window } => commands::keys::handle_keys(&window),
        Commands::Play {
            window,
            start,
            key,
            tick_ms,
        } => commands::play::handle_play(&window, start, key, tick_ms),
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
    }
}
