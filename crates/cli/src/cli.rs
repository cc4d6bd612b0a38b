use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[clap(name = "filetypes", about = "Manage custom file types")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to the platform config directory)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Settings file holding the custom file types, overrides `storage.path`
    #[clap(long, global = true)]
    pub storage: Option<PathBuf>,

    /// Show what would change without writing anything
    #[clap(long, global = true)]
    pub dry_run: bool,

    /// Enable debug logging
    #[clap(short, long, global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List all custom file types
    List,
    /// Show one custom file type
    Show {
        /// File extension without the dot
        extension: String,
    },
    /// Add a new custom file type
    Add {
        /// File name extension without the dot, e.g. 'mobi'
        #[clap(long)]
        extension: String,
        /// MIME type associated with this file type
        #[clap(long)]
        mimetype: String,
        /// Simple file type description, e.g. 'Kindle ebook'
        #[clap(long)]
        description: String,
        /// Icon name from the icon directory
        #[clap(long, default_value = "unknown")]
        icon: String,
    },
    /// Edit an existing custom file type
    Edit {
        /// Extension of the file type to edit
        old_extension: String,
        /// New extension
        #[clap(long)]
        extension: Option<String>,
        /// New MIME type
        #[clap(long)]
        mimetype: Option<String>,
        /// New description
        #[clap(long)]
        description: Option<String>,
        /// New icon name
        #[clap(long)]
        icon: Option<String>,
    },
    /// Delete a custom file type
    Delete {
        /// Extension of the file type to delete
        extension: String,
        /// Skip confirmation prompt
        #[clap(long)]
        force: bool,
    },
    /// Print the description of the custom type with this MIME type
    Describe { mimetype: String },
    /// Check whether an extension can be used for a custom type
    Check {
        extension: String,
        /// Extension being edited, excluded from the check
        #[clap(long)]
        old: Option<String>,
    },
    /// List available icons
    Icons,
    /// Print the stored custom file types in their serialized form
    Export,
    /// Add custom file types from a serialized file
    Import {
        /// File with one `extension;mimetype;icon;description` entry per line
        file: PathBuf,
    },
    /// Manage configuration
    Config {
        #[clap(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
    /// Show all configuration
    Show,
    /// Reset configuration to defaults
    Reset {
        /// Skip confirmation prompt
        #[clap(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_add_defaults_icon() {
        let cli = Cli::parse_from([
            "filetypes",
            "add",
            "--extension",
            "mobi8",
            "--mimetype",
            "application/x-mobipocket-ebook",
            "--description",
            "Kindle ebook",
        ]);
        match cli.command {
            Commands::Add { icon, .. } => assert_eq!(icon, "unknown"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["filetypes", "delete", "war", "--force", "--dry-run"]);
        assert!(cli.dry_run);
        assert!(matches!(cli.command, Commands::Delete { force: true, .. }));
    }
}
