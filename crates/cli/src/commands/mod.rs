pub mod config;
pub mod entries;
pub mod icons;
pub mod transfer;

pub use config::handle_config_command;
pub use entries::{
    handle_add_command, handle_check_command, handle_delete_command, handle_describe_command,
    handle_edit_command, handle_list_command, handle_show_command,
};
pub use icons::handle_icons_command;
pub use transfer::{handle_export_command, handle_import_command};
