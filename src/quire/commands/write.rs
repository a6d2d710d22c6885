use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::pagination::EditOutcome;
use crate::splitter::tokens;
use crate::store::DiaryStore;
use crate::turn::TurnState;
use crate::view::DiaryView;
use std::time::Duration;

use super::helpers::resolve_diary;

/// Clock time between two typed words.
pub const TYPING_PACE: Duration = Duration::from_millis(120);

/// Types `text` at the end of a diary's last page, one word at a time, the way a
/// writer would: pages overflow and turn as they fill up, and saves happen on the
/// debounce.
pub fn run<S: DiaryStore>(
    view: &mut DiaryView<S>,
    selector: &str,
    text: &str,
) -> Result<CmdResult> {
    let found = resolve_diary(view.library().diaries(), selector)?;
    view.open(&found.diary.id)?;

    let mut result = CmdResult::default();
    let start_pages = found.diary.pages.len().max(1);
    let mut words = 0;
    let mut warned_full = false;

    let mut typed = String::new();
    if let Some(page) = view.current_page() {
        if !page.content.is_empty() && !page.content.ends_with(char::is_whitespace) {
            typed.push('\n');
        }
    }
    typed.push_str(text);

    for token in tokens(&typed) {
        // Capacity is only checked once the page has finished turning.
        while *view.turn_state() != TurnState::Idle {
            view.tick(TYPING_PACE);
        }
        let mut content = view
            .current_page()
            .map(|p| p.content.clone())
            .unwrap_or_default();
        content.push_str(token);
        let caret = content.chars().count();

        if view.input(&content, Some(caret))? == EditOutcome::CapReached && !warned_full {
            warned_full = true;
            result.add_message(CmdMessage::warning(
                "This diary is full; the rest stays on its last page.",
            ));
        }
        if !token.trim().is_empty() {
            words += 1;
        }
        view.tick(TYPING_PACE);
    }

    let indicator = view.page_indicator().unwrap_or_default();
    view.close();
    result.messages.extend(view.take_messages());

    let diary = view
        .library()
        .find(&found.diary.id)
        .cloned()
        .unwrap_or(found.diary);
    let added = diary.pages.len().saturating_sub(start_pages);
    result.add_message(CmdMessage::success(format!(
        "Wrote {} words to {} ({}{})",
        words,
        diary.name,
        indicator,
        match added {
            0 => String::new(),
            1 => ", 1 new page".to_string(),
            n => format!(", {} new pages", n),
        }
    )));
    Ok(result.with_affected_diaries(vec![diary]))
}
