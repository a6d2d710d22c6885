//! # Pagination
//!
//! [`Pagination`] is the session for one open diary. It holds a working copy of the
//! diary, the index of the page being written on and the last caret offset seen on
//! it. A new session is built every time a diary is opened and dropped when another
//! one is, so nothing about one diary can leak into the next.
//!
//! ## Edits and overflow
//!
//! [`Pagination::apply_edit`] stores the new text of a page. When a [`Capacity`] is
//! given and the page grew past it, the page keeps what fits and the rest is put in
//! front of the next page's text, creating that page if needed. The writer follows the
//! text onto the next page. Forwarding goes one level deep: if the receiving page
//! now overflows too, it is split the next time it is edited.
//!
//! ## Saving
//!
//! Saving renumbers pages from their positions, stamps the diary's last entry date
//! and publishes the working copy. Typing saves are debounced; structural changes
//! (new pages, removed pages, explicit saves, leaving the diary) save immediately and
//! always cancel a pending debounced save first, so a stale typing save can never
//! land after them.
//!
//! A failed publish is not an error of the operation: the working copy is kept and a
//! warning is queued for the user (see [`Pagination::take_messages`]).

use crate::commands::CmdMessage;
use crate::error::{QuireError, Result};
use crate::measure::Capacity;
use crate::model::{today, Diary, Page};
use crate::schedule::{Scheduler, TaskHandle};
use crate::store::Publish;
use crate::view::Timer;
use log::{debug, warn};
use std::time::Duration;

pub const MAX_PAGES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_pages: usize,
    pub debounce: Duration,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_pages: MAX_PAGES,
            debounce: Duration::from_millis(500),
        }
    }
}

/// What an edit did to the page list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text was stored on the page as typed.
    Stored,
    /// The page was cut and the excess moved onto the page at `into`.
    Overflowed {
        from_page: String,
        into: usize,
        created: bool,
    },
    /// The page overflowed but the diary is full; the text was kept whole.
    CapReached,
}

/// Grows `pages` with blank pages until `index` is a valid position.
/// Returns whether any page was added.
pub fn ensure_page_exists(pages: &mut Vec<Page>, index: usize, max_pages: usize) -> Result<bool> {
    if index >= max_pages {
        return Err(QuireError::PageCapReached(max_pages));
    }
    let created = index >= pages.len();
    while index >= pages.len() {
        let mut page = Page::blank();
        page.page_number = pages.len() as u32 + 1;
        pages.push(page);
    }
    Ok(created)
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[derive(Debug)]
pub struct Pagination {
    diary: Diary,
    current_index: usize,
    caret: usize,
    pending_save: Option<TaskHandle>,
    limits: Limits,
    messages: Vec<CmdMessage>,
}

impl Pagination {
    /// Starts a session on `diary`, positioned at the end of its last page.
    /// A diary without pages gets one, published right away.
    pub fn open<P: Publish>(diary: Diary, limits: Limits, publisher: &mut P) -> Self {
        let mut session = Self {
            diary,
            current_index: 0,
            caret: 0,
            pending_save: None,
            limits,
            messages: Vec::new(),
        };
        if session.diary.pages.is_empty() {
            debug!("diary {} has no pages, seeding one", session.diary.id);
            session.diary.pages.push(Page::blank());
            session.publish(publisher);
        }
        session.current_index = session.diary.pages.len() - 1;
        session.caret = char_len(&session.diary.pages[session.current_index].content);
        session
    }

    pub fn diary(&self) -> &Diary {
        &self.diary
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_page(&self) -> &Page {
        &self.diary.pages[self.current_index]
    }

    pub fn page_count(&self) -> usize {
        self.diary.pages.len()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    pub fn has_pending_save(&self) -> bool {
        self.pending_save.is_some()
    }

    pub fn take_messages(&mut self) -> Vec<CmdMessage> {
        std::mem::take(&mut self.messages)
    }

    /// Records where the caret was last seen on the current page.
    pub fn note_caret(&mut self, offset: usize) {
        self.caret = offset.min(char_len(&self.current_page().content));
    }

    /// Replaces a page's text. See the module docs for overflow handling; passing
    /// no capacity stores the text without enforcing it.
    pub fn apply_edit<P: Publish>(
        &mut self,
        page_id: &str,
        text: &str,
        caret: Option<usize>,
        capacity: Option<&Capacity<'_>>,
        timers: &mut Scheduler<Timer>,
        publisher: &mut P,
    ) -> Result<EditOutcome> {
        let index = self
            .diary
            .page_index(page_id)
            .ok_or_else(|| QuireError::PageNotFound(page_id.to_string()))?;

        // Deleting text never pushes anything forward.
        let grew = char_len(text) >= char_len(&self.diary.pages[index].content);
        let split = capacity
            .filter(|_| grew)
            .map(|c| c.split(text))
            // A cut can leave nothing to carry (a newline past the last line), but the
            // page is still full and the writer moves on.
            .filter(|s| s.visible != text);

        let Some(split) = split else {
            self.store_text(index, text, caret);
            self.save_debounced(timers);
            return Ok(EditOutcome::Stored);
        };

        let next = index + 1;
        if next >= self.diary.pages.len() && self.diary.pages.len() >= self.limits.max_pages {
            debug!("diary {} is full, keeping overflow on page {}", self.diary.id, next);
            self.store_text(index, text, caret);
            self.save_debounced(timers);
            return Ok(EditOutcome::CapReached);
        }

        let date = today();
        let from_page = self.diary.pages[index].id.clone();
        self.diary.pages[index].content = split.visible;
        self.diary.pages[index].date = date.clone();

        let created = ensure_page_exists(&mut self.diary.pages, next, self.limits.max_pages)?;
        let receiving = &mut self.diary.pages[next];
        receiving.content.insert_str(0, &split.overflow);
        receiving.date = date;

        debug!(
            "page {} overflowed {} chars onto page {}{}",
            index + 1,
            char_len(&split.overflow),
            next + 1,
            if created { " (new)" } else { "" }
        );

        self.current_index = next;
        self.caret = 0;
        self.save_now(timers, publisher);
        Ok(EditOutcome::Overflowed {
            from_page,
            into: next,
            created,
        })
    }

    fn store_text(&mut self, index: usize, text: &str, caret: Option<usize>) {
        let date = today();
        let page = &mut self.diary.pages[index];
        page.content = text.to_string();
        page.date = date.clone();
        self.diary.last_entry_date = date;
        if index == self.current_index {
            self.caret = caret.unwrap_or_else(|| char_len(text)).min(char_len(text));
        }
    }

    /// Removes the page at `index` if it is empty and not the only page.
    pub fn merge_back_if_empty(&mut self, index: usize) -> bool {
        let pages = &mut self.diary.pages;
        if pages.len() > 1 && pages.get(index).is_some_and(Page::is_empty) {
            let removed = pages.remove(index);
            debug!("removed empty page {} ({})", index + 1, removed.id);
            return true;
        }
        false
    }

    /// Whether explicit forward navigation is allowed: never once the diary is
    /// full, and not from an empty last page.
    pub fn can_go_next(&self) -> bool {
        let count = self.diary.pages.len();
        if count >= self.limits.max_pages {
            return false;
        }
        let on_last = self.current_index + 1 >= count;
        !(on_last && self.current_page().content.trim().is_empty())
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_index > 0
    }

    /// Moves to the next page, creating it when stepping past the end.
    pub fn step_forward<P: Publish>(
        &mut self,
        timers: &mut Scheduler<Timer>,
        publisher: &mut P,
    ) -> Result<()> {
        let next = self.current_index + 1;
        if ensure_page_exists(&mut self.diary.pages, next, self.limits.max_pages)? {
            self.save_now(timers, publisher);
        }
        self.current_index = next;
        self.caret = 0;
        Ok(())
    }

    /// Moves to the previous page with the caret at its end, removing the page
    /// being left if it is empty. Returns `false` on the first page.
    pub fn step_backward<P: Publish>(
        &mut self,
        timers: &mut Scheduler<Timer>,
        publisher: &mut P,
    ) -> bool {
        if self.current_index == 0 {
            return false;
        }
        let removed = self.merge_back_if_empty(self.current_index);
        self.current_index -= 1;
        self.caret = char_len(&self.current_page().content);
        if removed {
            self.save_now(timers, publisher);
        }
        true
    }

    /// Backspace on an empty page with the caret at its start: fold the page away
    /// and continue at the end of the previous one. Returns whether it moved.
    pub fn retreat_from_empty<P: Publish>(
        &mut self,
        timers: &mut Scheduler<Timer>,
        publisher: &mut P,
    ) -> bool {
        if self.caret != 0 || !self.current_page().is_empty() {
            return false;
        }
        self.step_backward(timers, publisher)
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        if index >= self.diary.pages.len() {
            return Err(QuireError::InvalidPage {
                max: self.diary.pages.len(),
            });
        }
        self.current_index = index;
        self.caret = 0;
        Ok(())
    }

    /// (Re)arms the typing save.
    pub fn save_debounced(&mut self, timers: &mut Scheduler<Timer>) {
        if let Some(handle) = self.pending_save.take() {
            timers.cancel(handle);
        }
        self.pending_save = Some(timers.schedule(self.limits.debounce, Timer::Save));
    }

    /// Saves right away, dropping any pending typing save.
    pub fn save_now<P: Publish>(&mut self, timers: &mut Scheduler<Timer>, publisher: &mut P) {
        if let Some(handle) = self.pending_save.take() {
            timers.cancel(handle);
        }
        self.publish(publisher);
    }

    /// The typing save's timer fired.
    pub fn flush_debounced<P: Publish>(&mut self, publisher: &mut P) {
        if self.pending_save.take().is_some() {
            self.publish(publisher);
        }
    }

    /// Leaving the diary: whatever is still waiting is written now.
    pub fn close<P: Publish>(&mut self, timers: &mut Scheduler<Timer>, publisher: &mut P) {
        if self.pending_save.is_some() {
            self.save_now(timers, publisher);
        }
    }

    fn publish<P: Publish>(&mut self, publisher: &mut P) {
        for (i, page) in self.diary.pages.iter_mut().enumerate() {
            page.page_number = i as u32 + 1;
        }
        self.diary.last_entry_date = today();
        match publisher.publish(&self.diary) {
            Ok(()) => debug!(
                "saved diary {} ({} pages)",
                self.diary.id,
                self.diary.pages.len()
            ),
            Err(e) => {
                warn!("could not save diary {}: {}", self.diary.id, e);
                self.messages.push(CmdMessage::warning(format!(
                    "Your diary could not be saved ({}). Changes are kept until the next save.",
                    e
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{BoxSizing, MonospaceMeasurer, RenderBox};
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::store::{DiaryStore, Library};

    struct Harness {
        library: Library<InMemoryStore>,
        timers: Scheduler<Timer>,
        pages: Pagination,
    }

    impl Harness {
        fn new(contents: &[&str]) -> Self {
            Self::with_limits(contents, Limits::default())
        }

        fn with_limits(contents: &[&str], limits: Limits) -> Self {
            let store = StoreFixture::new()
                .with_diary("d1", "Diary", contents)
                .build();
            let mut library = Library::open(store);
            let diary = library.find("d1").unwrap().clone();
            let pages = Pagination::open(diary, limits, &mut library);
            Self {
                library,
                timers: Scheduler::new(),
                pages,
            }
        }

        fn edit(&mut self, index: usize, text: &str, render_box: &RenderBox) -> EditOutcome {
            let measurer = MonospaceMeasurer::new(10.0);
            let capacity = Capacity::new(&measurer, render_box);
            let id = self.pages.diary().pages[index].id.clone();
            self.pages
                .apply_edit(
                    &id,
                    text,
                    None,
                    Some(&capacity),
                    &mut self.timers,
                    &mut self.library,
                )
                .unwrap()
        }

        fn run_for(&mut self, ms: u64) {
            let until = self.timers.now() + Duration::from_millis(ms);
            while let Some(timer) = self.timers.poll(until) {
                if timer == Timer::Save {
                    self.pages.flush_debounced(&mut self.library);
                }
            }
            self.timers.advance_to(until);
        }

        fn saves(&self) -> usize {
            self.library.store().save_count()
        }

        fn stored(&self) -> Diary {
            self.library.store().load().into_iter().find(|d| d.id == "d1").unwrap()
        }

        fn contents(&self) -> Vec<String> {
            self.pages.diary().pages.iter().map(|p| p.content.clone()).collect()
        }
    }

    /// 20 columns, tall enough that only the line limit matters.
    fn lined_box(max_lines: usize) -> RenderBox {
        RenderBox {
            width: 200.0,
            height: 10_000.0,
            padding: 0.0,
            line_height: 20.0,
            box_sizing: BoxSizing::BorderBox,
            max_lines,
        }
    }

    fn lines(range: std::ops::RangeInclusive<usize>) -> String {
        range.map(|i| format!("line {}", i)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn open_positions_at_end_of_last_page() {
        let h = Harness::new(&["first", "second page"]);
        assert_eq!(h.pages.current_index(), 1);
        assert_eq!(h.pages.caret(), "second page".len());
        assert_eq!(h.saves(), 0);
    }

    #[test]
    fn open_seeds_a_page_for_an_empty_diary() {
        let h = Harness::new(&[]);
        assert_eq!(h.pages.page_count(), 1);
        assert_eq!(h.pages.current_page().content, "");
        assert_eq!(h.pages.current_page().date, today());
        assert_eq!(h.saves(), 1);
        assert_eq!(h.stored().pages.len(), 1);
    }

    #[test]
    fn typing_burst_saves_once_after_pause() {
        let mut h = Harness::new(&[""]);
        let b = lined_box(18);
        h.edit(0, "h", &b);
        h.run_for(200);
        h.edit(0, "he", &b);
        h.run_for(200);
        h.edit(0, "hey", &b);
        h.run_for(499);
        assert_eq!(h.saves(), 0);

        h.run_for(1);
        assert_eq!(h.saves(), 1);
        assert_eq!(h.stored().pages[0].content, "hey");
    }

    #[test]
    fn nineteenth_line_moves_to_a_new_page() {
        let mut h = Harness::new(&[]);
        let b = lined_box(18);
        h.edit(0, &lines(1..=17), &b);

        let outcome = h.edit(0, &lines(1..=19), &b);

        assert!(matches!(
            outcome,
            EditOutcome::Overflowed {
                into: 1,
                created: true,
                ..
            }
        ));
        assert_eq!(h.contents(), vec![lines(1..=18), lines(19..=19)]);
        let stored = h.stored();
        assert_eq!(stored.pages.len(), 2);
        assert_eq!(stored.pages[0].page_number, 1);
        assert_eq!(stored.pages[1].page_number, 2);
        assert_eq!(stored.pages[1].date, today());
        assert_eq!(h.pages.current_index(), 1);
        assert_eq!(h.pages.caret(), 0);
    }

    #[test]
    fn newline_after_last_line_moves_writer_to_next_page() {
        let mut h = Harness::new(&[]);
        let b = lined_box(18);
        h.edit(0, &lines(1..=18), &b);

        let outcome = h.edit(0, &format!("{}\n", lines(1..=18)), &b);

        assert!(matches!(
            outcome,
            EditOutcome::Overflowed {
                into: 1,
                created: true,
                ..
            }
        ));
        let measurer = MonospaceMeasurer::new(10.0);
        let cap = Capacity::new(&measurer, &b);
        for page in h.contents() {
            assert!(cap.fits(&page), "{:?} does not fit", page);
        }
        assert_eq!(h.contents(), vec![lines(1..=18), String::new()]);
        assert_eq!(h.pages.current_index(), 1);
        assert_eq!(h.stored().pages.len(), 2);
    }

    #[test]
    fn newline_past_page_height_moves_writer_to_next_page() {
        let mut h = Harness::new(&["abc de"]);
        let b = RenderBox {
            width: 50.0,
            height: 40.0,
            ..lined_box(18)
        };

        h.edit(0, "abc de\n", &b);

        let measurer = MonospaceMeasurer::new(10.0);
        assert!(Capacity::new(&measurer, &b).fits(&h.contents()[0]));
        assert_eq!(h.contents(), vec!["abc de".to_string(), String::new()]);
        assert_eq!(h.pages.current_index(), 1);
    }

    #[test]
    fn overflow_is_prefixed_to_existing_next_page() {
        let mut h = Harness::new(&["a\nb", "tail"]);
        let next_id = h.pages.diary().pages[1].id.clone();

        h.edit(0, "a\nb\nc", &lined_box(2));

        assert_eq!(h.contents(), vec!["a\nb".to_string(), "ctail".to_string()]);
        assert_eq!(h.pages.diary().pages[1].id, next_id);
        assert_eq!(h.pages.page_count(), 2);
    }

    #[test]
    fn forwarding_goes_one_level_only() {
        let mut h = Harness::new(&["a\nb", "x\ny"]);

        h.edit(0, "a\nb\nc\nd", &lined_box(2));

        // The receiving page is over its line limit until it is edited again.
        assert_eq!(h.contents(), vec!["a\nb", "c\ndx\ny"]);
        assert_eq!(h.pages.page_count(), 2);

        h.edit(1, "c\ndx\ny!", &lined_box(2));
        assert_eq!(h.contents(), vec!["a\nb", "c\ndx", "y!"]);
    }

    #[test]
    fn shrinking_edit_never_splits() {
        let mut h = Harness::new(&["a\nb\nc\nd"]);
        let outcome = h.edit(0, "a\nb\nc", &lined_box(2));
        assert_eq!(outcome, EditOutcome::Stored);
        assert_eq!(h.pages.page_count(), 1);
    }

    #[test]
    fn full_diary_keeps_overflow_on_last_page() {
        let limits = Limits {
            max_pages: 3,
            ..Limits::default()
        };
        let mut h = Harness::with_limits(&["1", "2", "x"], limits);

        let outcome = h.edit(2, "x\ny\nz", &lined_box(2));

        assert_eq!(outcome, EditOutcome::CapReached);
        assert_eq!(h.pages.page_count(), 3);
        assert_eq!(h.contents()[2], "x\ny\nz");
        assert!(h.pages.has_pending_save());
    }

    #[test]
    fn page_count_never_exceeds_cap() {
        let contents: Vec<String> = (0..MAX_PAGES).map(|i| format!("page {}", i)).collect();
        let refs: Vec<&str> = contents.iter().map(String::as_str).collect();
        let mut h = Harness::new(&refs);

        assert!(!h.pages.can_go_next());
        assert!(matches!(
            h.pages.step_forward(&mut h.timers, &mut h.library),
            Err(QuireError::PageCapReached(200))
        ));
        h.edit(MAX_PAGES - 1, "page\n199\nmore", &lined_box(2));
        assert_eq!(h.pages.page_count(), MAX_PAGES);
    }

    #[test]
    fn ensure_page_exists_fills_the_gap() {
        let mut pages = vec![Page::blank()];
        assert!(ensure_page_exists(&mut pages, 3, 200).unwrap());
        assert_eq!(pages.len(), 4);
        assert_eq!(pages[3].page_number, 4);
        assert!(!ensure_page_exists(&mut pages, 2, 200).unwrap());
        assert!(ensure_page_exists(&mut pages, 200, 200).is_err());
    }

    #[test]
    fn leaving_an_empty_page_backward_removes_it_immediately() {
        let mut h = Harness::new(&["written", ""]);

        assert!(h.pages.step_backward(&mut h.timers, &mut h.library));

        assert_eq!(h.pages.page_count(), 1);
        assert_eq!(h.pages.current_index(), 0);
        assert_eq!(h.pages.caret(), "written".len());
        assert_eq!(h.saves(), 1);
        assert_eq!(h.stored().pages.len(), 1);
    }

    #[test]
    fn retreat_needs_empty_page_and_caret_at_start() {
        let mut h = Harness::new(&["one", "two"]);
        h.pages.note_caret(0);
        assert!(!h.pages.retreat_from_empty(&mut h.timers, &mut h.library));

        let mut h = Harness::new(&["one", ""]);
        assert!(h.pages.retreat_from_empty(&mut h.timers, &mut h.library));
        assert_eq!(h.pages.page_count(), 1);
        assert_eq!(h.pages.caret(), 3);
    }

    #[test]
    fn only_page_is_never_removed() {
        let mut h = Harness::new(&[""]);
        assert!(!h.pages.step_backward(&mut h.timers, &mut h.library));
        assert!(!h.pages.merge_back_if_empty(0));
        assert_eq!(h.pages.page_count(), 1);
        assert_eq!(h.saves(), 0);
    }

    #[test]
    fn merge_back_renumbers_following_pages() {
        let mut h = Harness::new(&["one", "", "three"]);
        h.pages.jump_to(1).unwrap();

        h.pages.step_backward(&mut h.timers, &mut h.library);

        let stored = h.stored();
        let numbers: Vec<u32> = stored.pages.iter().map(|p| p.page_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(stored.pages[1].content, "three");
    }

    #[test]
    fn structural_save_cancels_pending_typing_save() {
        let mut h = Harness::new(&["text"]);
        h.edit(0, "text!", &lined_box(18));
        assert!(h.pages.has_pending_save());

        h.pages.step_forward(&mut h.timers, &mut h.library).unwrap();
        assert_eq!(h.saves(), 1);
        assert!(!h.pages.has_pending_save());

        h.run_for(1000);
        assert_eq!(h.saves(), 1);
        assert_eq!(h.stored().pages.len(), 2);
        assert_eq!(h.stored().pages[0].content, "text!");
    }

    #[test]
    fn step_forward_onto_existing_page_does_not_save() {
        let mut h = Harness::new(&["one", "two"]);
        h.pages.jump_to(0).unwrap();
        h.pages.step_forward(&mut h.timers, &mut h.library).unwrap();
        assert_eq!(h.pages.current_index(), 1);
        assert_eq!(h.pages.caret(), 0);
        assert_eq!(h.saves(), 0);
    }

    #[test]
    fn forward_guard_blocks_empty_last_page() {
        let mut h = Harness::new(&["one", ""]);
        assert!(!h.pages.can_go_next());
        h.pages.jump_to(0).unwrap();
        assert!(h.pages.can_go_next());

        let h = Harness::new(&["   "]);
        assert!(!h.pages.can_go_next());
        let h = Harness::new(&["words"]);
        assert!(h.pages.can_go_next());
    }

    #[test]
    fn jump_out_of_range_is_rejected() {
        let mut h = Harness::new(&["one", "two"]);
        assert!(matches!(
            h.pages.jump_to(2),
            Err(QuireError::InvalidPage { max: 2 })
        ));
        assert_eq!(h.pages.current_index(), 1);
    }

    #[test]
    fn failed_save_becomes_a_warning() {
        let mut h = Harness::new(&["one", ""]);
        h.library.store_mut().set_simulate_write_error(true);

        h.pages.step_backward(&mut h.timers, &mut h.library);

        let messages = h.pages.take_messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].content.contains("could not be saved"));
        assert_eq!(h.pages.page_count(), 1);
        assert_eq!(h.library.find("d1").unwrap().pages.len(), 1);
    }

    #[test]
    fn close_flushes_pending_save() {
        let mut h = Harness::new(&["draft"]);
        h.edit(0, "draft more", &lined_box(18));
        h.pages.close(&mut h.timers, &mut h.library);
        assert_eq!(h.saves(), 1);
        assert!(h.timers.is_empty());
    }

    #[test]
    fn caret_tracks_observed_offset() {
        let mut h = Harness::new(&["hello"]);
        let id = h.pages.current_page().id.clone();
        h.pages
            .apply_edit(&id, "hello!", Some(2), None, &mut h.timers, &mut h.library)
            .unwrap();
        assert_eq!(h.pages.caret(), 2);
        h.pages.note_caret(99);
        assert_eq!(h.pages.caret(), 6);
    }

    #[test]
    fn editing_unknown_page_is_an_error() {
        let mut h = Harness::new(&["x"]);
        let result = h
            .pages
            .apply_edit("nope", "y", None, None, &mut h.timers, &mut h.library);
        assert!(matches!(result, Err(QuireError::PageNotFound(_))));
    }
}
