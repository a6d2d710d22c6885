use crate::commands::DisplayDiary;
use crate::error::{QuireError, Result};
use crate::model::Diary;

pub fn indexed_diaries(diaries: &[Diary]) -> Vec<DisplayDiary> {
    diaries
        .iter()
        .enumerate()
        .map(|(i, diary)| DisplayDiary {
            index: i + 1,
            diary: diary.clone(),
        })
        .collect()
}

/// Finds a diary by 1-based list position, then by id, then by exact name.
pub fn resolve_diary(diaries: &[Diary], selector: &str) -> Result<DisplayDiary> {
    let selector = selector.trim();
    let by_index = selector
        .parse::<usize>()
        .ok()
        .filter(|i| *i >= 1 && *i <= diaries.len())
        .map(|i| i - 1);

    by_index
        .or_else(|| diaries.iter().position(|d| d.id == selector))
        .or_else(|| diaries.iter().position(|d| d.name == selector))
        .map(|i| DisplayDiary {
            index: i + 1,
            diary: diaries[i].clone(),
        })
        .ok_or_else(|| QuireError::DiaryNotFound(selector.to_string()))
}

pub fn resolve_diaries<I: AsRef<str>>(diaries: &[Diary], selectors: &[I]) -> Result<Vec<DisplayDiary>> {
    let mut resolved: Vec<DisplayDiary> = Vec::with_capacity(selectors.len());
    for selector in selectors {
        let found = resolve_diary(diaries, selector.as_ref())?;
        if !resolved.iter().any(|d| d.diary.id == found.diary.id) {
            resolved.push(found);
        }
    }
    Ok(resolved)
}
