use crate::commands::{persist, CmdMessage, CmdResult};
use crate::error::{QuireError, Result};
use crate::model::Diary;
use crate::store::{DiaryStore, Library};

pub fn run<S: DiaryStore>(library: &mut Library<S>, name: &str) -> Result<CmdResult> {
    let name = name.trim();
    if name.is_empty() {
        return Err(QuireError::Api("A diary needs a name".to_string()));
    }

    let diary = Diary::new(name);
    let mut diaries = library.diaries().to_vec();
    diaries.push(diary.clone());

    let mut result = CmdResult::default();
    persist(library, diaries, &mut result);
    result.add_message(CmdMessage::success(format!("Created diary: {}", name)));
    Ok(result.with_affected_diaries(vec![diary]))
}
