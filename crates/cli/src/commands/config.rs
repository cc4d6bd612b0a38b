use eyre::Result;
use std::path::Path;

use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::confirm;

pub fn handle_config_command(cmd: ConfigCommands, config_path: &Path, dry_run: bool) -> Result<()> {
    match cmd {
        ConfigCommands::Set { key, value } => handle_set_config(config_path, key, value, dry_run),
        ConfigCommands::Get { key } => handle_get_config(config_path, key),
        ConfigCommands::Show => handle_show_config(config_path),
        ConfigCommands::Reset { force } => handle_reset_config(config_path, force, dry_run),
    }
}

fn handle_set_config(config_path: &Path, key: String, value: String, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("Would set config: {} = {}", key, value);
        return Ok(());
    }

    let mut config = Config::load(config_path)?;

    match config.set_value(&key, &value) {
        Ok(_) => {
            config.save(config_path)?;
            println!("✅ Configuration updated: {} = {}", key, value);
        }
        Err(e) => {
            println!("❌ Failed to set configuration: {}", e);
            return Err(e);
        }
    }

    Ok(())
}

fn handle_get_config(config_path: &Path, key: String) -> Result<()> {
    let config = Config::load(config_path)?;

    match config.get_value(&key) {
        Ok(value) => {
            println!("{}: {}", key, value);
        }
        Err(e) => {
            println!("❌ Failed to get configuration: {}", e);
            return Err(e);
        }
    }

    Ok(())
}

fn handle_show_config(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    println!("{}", config.show_all());
    Ok(())
}

fn handle_reset_config(config_path: &Path, force: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        println!("Would reset configuration to defaults");
        return Ok(());
    }

    if !force && !confirm("Are you sure you want to reset all configuration?")? {
        println!("❌ Cancelled");
        return Ok(());
    }

    Config::reset(config_path)?;
    println!("✅ Configuration reset to defaults");
    Ok(())
}
