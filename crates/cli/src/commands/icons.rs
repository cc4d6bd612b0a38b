use eyre::Result;
use filetypes_store::icon_catalog;

use crate::config::Config;

pub fn handle_icons_command(config: &Config) -> Result<()> {
    let icons = icon_catalog(&config.icons.path);
    if icons.is_empty() {
        println!("No icons found in {}", config.icons.path);
        println!("💡 Set the icon directory with: filetypes config set icons.path <dir>");
        return Ok(());
    }

    for name in icons.keys() {
        println!("{}", name);
    }
    Ok(())
}
