use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuireError, Result};
use crate::store::{DiaryStore, Library};
use crate::transfer;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the whole collection to `target`, or to a dated file in `default_dir`.
pub fn run<S: DiaryStore>(
    library: &Library<S>,
    target: Option<&Path>,
    default_dir: &Path,
) -> Result<CmdResult> {
    let bundle = transfer::export(library.diaries());
    let json = transfer::to_json(&bundle)?;

    let path: PathBuf = match target {
        Some(path) => path.to_path_buf(),
        None => default_dir.join(transfer::export_filename(Utc::now().date_naive())),
    };
    fs::write(&path, json).map_err(QuireError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} diaries to {}",
        bundle.diaries.len(),
        path.display()
    )));
    Ok(result.with_written_path(path))
}
