//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for every quire operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns the session state** a UI needs: the [`DiaryView`] (and through it the
//!   collection) and the data directory
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O on stdout/stderr and no formatting; that is the CLI's job.
//!
//! ## Generic Over DiaryStore
//!
//! `QuireApi<S: DiaryStore>` is generic over the storage backend:
//! - Production: `QuireApi<FileStore>`
//! - Testing: `QuireApi<InMemoryStore>`
//!
//! ## Collection changes and the open diary
//!
//! Commands that rewrite the collection (create, delete, import) close the view
//! first, so a diary left open by an interactive front-end saves its pending work
//! before the collection changes under it.

use crate::commands;
use crate::config::QuireConfig;
use crate::error::Result;
use crate::measure::MonospaceMeasurer;
use crate::store::{DiaryStore, Library};
use crate::view::DiaryView;
use std::path::{Path, PathBuf};

/// The main API facade for quire operations.
pub struct QuireApi<S: DiaryStore> {
    view: DiaryView<S>,
    data_dir: PathBuf,
}

impl<S: DiaryStore> QuireApi<S> {
    pub fn new(store: S, data_dir: PathBuf, config: &QuireConfig) -> Self {
        let view = DiaryView::new(Library::open(store), config.view_settings())
            .with_measurer(Box::new(MonospaceMeasurer::new(config.char_width)));
        Self { view, data_dir }
    }

    pub fn create_diary(&mut self, name: &str) -> Result<commands::CmdResult> {
        self.view.close();
        commands::create::run(self.view.library_mut(), name)
    }

    pub fn list_diaries(&self) -> Result<commands::CmdResult> {
        commands::list::run(self.view.library())
    }

    pub fn show_diary(&self, selector: &str, page: Option<usize>) -> Result<commands::CmdResult> {
        commands::show::run(self.view.library(), selector, page)
    }

    pub fn delete_diaries<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        self.view.close();
        commands::delete::run(self.view.library_mut(), selectors)
    }

    pub fn write(&mut self, selector: &str, text: &str) -> Result<commands::CmdResult> {
        commands::write::run(&mut self.view, selector, text)
    }

    pub fn export_diaries(
        &self,
        target: Option<&Path>,
        default_dir: &Path,
    ) -> Result<commands::CmdResult> {
        commands::export::run(self.view.library(), target, default_dir)
    }

    pub fn import_diaries(&mut self, path: &Path) -> Result<commands::CmdResult> {
        self.view.close();
        commands::import::run(self.view.library_mut(), path)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    /// The interactive view, for front-ends that drive the editor directly.
    pub fn view(&mut self) -> &mut DiaryView<S> {
        &mut self.view
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DisplayDiary, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api() -> QuireApi<InMemoryStore> {
        QuireApi::new(
            InMemoryStore::new(),
            PathBuf::from("/nonexistent"),
            &QuireConfig::default(),
        )
    }

    #[test]
    fn create_then_list() {
        let mut api = api();
        api.create_diary("Sketches").unwrap();
        let listed = api.list_diaries().unwrap().listed_diaries;
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[3].diary.name, "Sketches");
    }

    #[test]
    fn write_then_show() {
        let mut api = api();
        api.write("Dream Log", "flying again").unwrap();

        let shown = api.show_diary("3", None).unwrap();
        let last = shown.listed_pages.last().unwrap();
        assert!(last.content.ends_with("flying again"));
    }

    #[test]
    fn collection_changes_close_the_open_diary() {
        let mut api = api();
        api.view().open("1").unwrap();
        api.view().input("typed but not yet saved", None).unwrap();

        api.delete_diaries(&["2"]).unwrap();

        assert!(api.view().diary().is_none());
        let stored = api.view().library().store().load();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].pages[1].content, "typed but not yet saved");
    }
}
