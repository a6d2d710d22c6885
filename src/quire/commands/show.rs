use crate::commands::CmdResult;
use crate::error::{QuireError, Result};
use crate::store::{DiaryStore, Library};

use super::helpers::resolve_diary;

/// One diary, with all of its pages or only the 1-based `page`.
pub fn run<S: DiaryStore>(
    library: &Library<S>,
    selector: &str,
    page: Option<usize>,
) -> Result<CmdResult> {
    let found = resolve_diary(library.diaries(), selector)?;
    let pages = match page {
        None => found.diary.pages.clone(),
        Some(n) => {
            let count = found.diary.pages.len();
            let page = n
                .checked_sub(1)
                .and_then(|i| found.diary.pages.get(i))
                .ok_or(QuireError::InvalidPage { max: count })?;
            vec![page.clone()]
        }
    };
    Ok(CmdResult::default()
        .with_listed_pages(pages)
        .with_listed_diaries(vec![found]))
}
