//! CLI command handlers. Each command is in its own file.

mod config;
mod list;
mod run;

pub use config::run_config;
pub use list::run_list;
pub use run::run_localize;
