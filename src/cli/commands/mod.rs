//! CLI command implementations.

mod common;
mod config;
mod json_emit;
mod list;
mod phases;
mod status;
mod tui;

pub use config::execute_config_command;
pub use list::execute_list_command;
pub use phases::execute_phases_command;
pub use status::execute_status_command;
pub use tui::execute_tui_command;
