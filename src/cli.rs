use crate::AppError;
use crate::config::Config;
use clap::Parser;

#[derive(Parser)]
#[command(name = "new-cl")]
#[command(about = "Creates a changelog note file named after an issue or pull request")]
#[command(version)]
pub struct Cli {
    /// <kind> <issue/pr> [<message>]
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

const USAGE: &str = "
usage: {program} [type] [issue/pr] <message>

type:     {kinds}
issue/pr: from github
message:  (optional) directly insert message in note
";

/// Usage text listing the accepted kinds.
pub fn usage(program: &str, config: &Config) -> String {
    USAGE
        .replace("{program}", program)
        .replace("{kinds}", &config.kinds.to_string())
}

/// What gets printed to stderr for a failed run.
pub fn failure_message(err: &AppError, program: &str, config: &Config) -> String {
    match err {
        AppError::ArgumentCount => usage(program, config),
        AppError::UnknownKind(_) | AppError::InvalidNumber(_) => {
            format!("bad arguments: {err}\n")
        }
        AppError::DirectoryResolution { .. } => {
            format!("must run in {}: {err}\n", config.changelog_dir)
        }
        AppError::FileWrite { .. } => format!("failed to create note: {err}\n"),
        AppError::Io(_) => format!("error: {err}\n"),
    }
}
