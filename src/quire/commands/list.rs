use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{DiaryStore, Library};

use super::helpers::indexed_diaries;

pub fn run<S: DiaryStore>(library: &Library<S>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_diaries(indexed_diaries(library.diaries())))
}
