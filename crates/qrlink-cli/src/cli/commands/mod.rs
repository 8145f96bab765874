//! CLI command handlers, one file per command.

mod check;
mod generate;
mod interactive;
mod link;

pub use check::run_check;
pub use generate::{run_generate, GenerateOptions};
pub use interactive::run_interactive;
pub use link::run_link;
