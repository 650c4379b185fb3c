//! Command-line front end for the USD/BRL calculator.

pub mod app;
pub mod cli;
pub mod entry;
pub mod logging;
pub mod report;
pub mod scenario;

pub use app::run;
pub use cli::Cli;
