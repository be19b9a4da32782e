use clap::Parser;
use new_cl::Cli;
use new_cl::cli::failure_message;
use new_cl::config::Config;
use new_cl::env::ProcessEnv;
use std::io::{self, Write};
use std::process::ExitCode;

const PROGRAM: &str = env!("CARGO_BIN_NAME");

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let env = ProcessEnv;

    match new_cl::run(cli, &env, io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("run failed: {err:?}");
            let message = failure_message(&err, PROGRAM, &Config::from_env(&env));
            let _ = io::stderr().write_all(message.as_bytes());
            ExitCode::FAILURE
        }
    }
}
