//! CLI command handlers, one file per command.

mod csv;
mod link;
mod show;

pub use csv::run_csv;
pub use link::run_link;
pub use show::run_show;
