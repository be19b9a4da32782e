use crate::{AppError, AppResult};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Placeholder body written when no message was given.
const PLACEHOLDER: &str = "NOTE";

/// The validated inputs for one note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    pub kind: String,
    pub pr: i64,
    /// Empty means no custom note.
    pub note: String,
}

impl Params {
    pub fn filename(&self) -> String {
        format!("{}.txt", self.pr)
    }

    /// Writes the fenced `release-note` block.
    pub fn write_to<W: Write>(&self, w: &mut W) -> std::io::Result<()> {
        let note = if self.note.is_empty() {
            PLACEHOLDER
        } else {
            self.note.as_str()
        };
        write!(w, "```release-note:{}\n{}\n```\n", self.kind, note)
    }
}

/// Creates (or truncates) `<dir>/<pr>.txt` and returns its path.
pub fn create_file(dir: &Path, params: &Params) -> AppResult<PathBuf> {
    let path = dir.join(params.filename());
    let write_note = |path: &Path| -> std::io::Result<()> {
        let mut file = File::create(path)?;
        params.write_to(&mut file)?;
        file.flush()
    };

    match write_note(&path) {
        Ok(()) => Ok(path),
        Err(source) => Err(AppError::FileWrite { path, source }),
    }
}
