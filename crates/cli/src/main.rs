mod cli;
mod commands;
mod config;
mod utils;

use clap::Parser;
use filetypes_store::EntryForm;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::*;
use crate::config::Config;
use crate::utils::open_store;

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::get_config_path);

    if let Commands::Config { command } = cli.command {
        return handle_config_command(command, &config_path, cli.dry_run);
    }

    let mut config = Config::load(&config_path)?;
    if let Some(storage) = &cli.storage {
        config.storage.path = storage.to_string_lossy().to_string();
    }
    let store = open_store(&config);

    match cli.command {
        Commands::List => handle_list_command(&store),
        Commands::Show { extension } => handle_show_command(&store, &extension),
        Commands::Add {
            extension,
            mimetype,
            description,
            icon,
        } => handle_add_command(
            &store,
            &config,
            EntryForm::add(&extension, &mimetype, &icon, &description),
            cli.dry_run,
        ),
        Commands::Edit {
            old_extension,
            extension,
            mimetype,
            description,
            icon,
        } => handle_edit_command(
            &store,
            &config,
            &old_extension,
            extension,
            mimetype,
            icon,
            description,
            cli.dry_run,
        ),
        Commands::Delete { extension, force } => {
            handle_delete_command(&store, &extension, force, cli.dry_run)
        }
        Commands::Describe { mimetype } => handle_describe_command(&store, &mimetype),
        Commands::Check { extension, old } => {
            handle_check_command(&store, &extension, old.as_deref())
        }
        Commands::Icons => handle_icons_command(&config),
        Commands::Export => handle_export_command(&store),
        Commands::Import { file } => handle_import_command(&store, &file, cli.dry_run),
        Commands::Config { .. } => unreachable!("handled before loading the store"),
    }
}
