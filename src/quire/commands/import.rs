use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{QuireError, Result};
use crate::store::{DiaryStore, Library};
use crate::transfer;
use std::fs;
use std::path::Path;

pub fn run<S: DiaryStore>(library: &mut Library<S>, path: &Path) -> Result<CmdResult> {
    let payload = fs::read_to_string(path).map_err(QuireError::Io)?;

    let mut diaries = library.diaries().to_vec();
    let report = transfer::import(&mut diaries, &payload)?;

    let mut result = CmdResult::default();
    if report.imported > 0 {
        let added = diaries[diaries.len() - report.imported..].to_vec();
        persist(library, diaries, &mut result);
        result.affected_diaries = added;
    }
    result.add_message(CmdMessage::success(format!(
        "{} diaries imported, {} skipped (already present)",
        report.imported, report.skipped
    )));
    Ok(result)
}
