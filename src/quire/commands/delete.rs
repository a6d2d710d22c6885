use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{DiaryStore, Library};

use super::helpers::resolve_diaries;

pub fn run<S: DiaryStore, I: AsRef<str>>(
    library: &mut Library<S>,
    selectors: &[I],
) -> Result<CmdResult> {
    // Resolve everything before removing anything so list positions stay valid.
    let doomed = resolve_diaries(library.diaries(), selectors)?;
    let mut result = CmdResult::default();

    let remaining = library
        .diaries()
        .iter()
        .filter(|d| !doomed.iter().any(|x| x.diary.id == d.id))
        .cloned()
        .collect();
    persist(library, remaining, &mut result);

    for found in &doomed {
        result.add_message(CmdMessage::success(format!(
            "Diary deleted ({}): {}",
            found.index, found.diary.name
        )));
    }
    Ok(result.with_affected_diaries(doomed.into_iter().map(|d| d.diary).collect()))
}
