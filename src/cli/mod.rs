//! Command-line interface layer.

mod args;
mod check;
mod exit_status;
mod run;

pub use args::{Arguments, CheckCommand, Command, CommonArgs};
pub use exit_status::ExitStatus;
pub use run::run;
