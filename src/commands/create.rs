use crate::config::{Config, KindVocabulary};
use crate::env::Environment;
use crate::note::{self, Params};
use crate::{AppError, AppResult};
use log::debug;
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Runs one note creation: config, arguments, target directory, file.
pub struct Runner<'a, W: Write> {
    pub output: W,
    pub env: &'a dyn Environment,
    pub args: Vec<String>,
}

impl<W: Write> Runner<'_, W> {
    /// Creates the note and reports its file name to `output`. Returns the full path.
    pub fn run(&mut self) -> AppResult<PathBuf> {
        let config = Config::from_env(self.env);
        debug!(
            "changelog dir {:?}, kinds {}",
            config.changelog_dir, config.kinds
        );

        let params = extract_args(&self.args, &config.kinds)?;
        let dir = find_target_dir(&config.changelog_dir)?;
        debug!("writing note for #{} into {}", params.pr, dir.display());

        let file = note::create_file(&dir, &params)?;
        debug!("created {}", file.display());

        let name = file.file_name().map(OsStr::to_string_lossy).unwrap_or_default();
        writeln!(self.output, "created note: {name}")?;
        Ok(file)
    }
}

/// Validates `<kind> <pr> [<note>]` against the accepted kinds.
pub fn extract_args(args: &[String], kinds: &KindVocabulary) -> AppResult<Params> {
    let (kind, pr, note) = match args {
        [kind, pr] => (kind, pr, ""),
        [kind, pr, note] => (kind, pr, note.as_str()),
        _ => return Err(AppError::ArgumentCount),
    };

    if !kinds.contains(kind) {
        return Err(AppError::UnknownKind(kind.clone()));
    }

    let pr = pr.parse::<i64>().map_err(AppError::InvalidNumber)?;

    Ok(Params {
        kind: kind.clone(),
        pr,
        note: note.to_string(),
    })
}

/// Finds the directory notes go into, relative to the current working directory.
///
/// The tool may be run from inside the changelog directory, in which case `.`
/// is returned, or from its parent, in which case the absolute path of the
/// subdirectory is returned once it is known to exist.
pub fn find_target_dir(dir_name: &str) -> AppResult<PathBuf> {
    let cwd = std::env::current_dir()?;
    find_target_dir_in(&cwd, dir_name)
}

/// [`find_target_dir`] with an explicit absolute working directory.
pub fn find_target_dir_in(cwd: &Path, dir_name: &str) -> AppResult<PathBuf> {
    // are we in the changelog dir?
    if cwd.file_name() == Some(OsStr::new(dir_name)) {
        return Ok(PathBuf::from("."));
    }

    // is it a subdirectory?
    let sub = cwd.join(dir_name);
    match fs::metadata(&sub) {
        Ok(_) => Ok(sub),
        Err(source) => Err(AppError::DirectoryResolution { path: sub, source }),
    }
}
