pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod error;
pub mod note;

pub use cli::Cli;
pub use error::{AppError, AppResult};

use env::Environment;
use std::io::Write;
use std::path::PathBuf;

/// Main library entry point
pub fn run<W: Write>(cli: Cli, env: &dyn Environment, output: W) -> AppResult<PathBuf> {
    commands::create::Runner {
        output,
        env,
        args: cli.args,
    }
    .run()
}
