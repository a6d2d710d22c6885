use crate::config::QuireConfig;
use crate::model::{Diary, Page};
use crate::store::{DiaryStore, Library};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod show;
pub mod write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A diary together with its 1-based position in the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDiary {
    pub index: usize,
    pub diary: Diary,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_diaries: Vec<Diary>,
    pub listed_diaries: Vec<DisplayDiary>,
    pub listed_pages: Vec<Page>,
    pub written_path: Option<PathBuf>,
    pub config: Option<QuireConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_diaries(mut self, diaries: Vec<Diary>) -> Self {
        self.affected_diaries = diaries;
        self
    }

    pub fn with_listed_diaries(mut self, diaries: Vec<DisplayDiary>) -> Self {
        self.listed_diaries = diaries;
        self
    }

    pub fn with_listed_pages(mut self, pages: Vec<Page>) -> Self {
        self.listed_pages = pages;
        self
    }

    pub fn with_written_path(mut self, path: PathBuf) -> Self {
        self.written_path = Some(path);
        self
    }

    pub fn with_config(mut self, config: QuireConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Replaces the collection. A failed write is reported on `result`; the new
/// collection stays in memory either way.
pub(crate) fn persist<S: DiaryStore>(
    library: &mut Library<S>,
    diaries: Vec<Diary>,
    result: &mut CmdResult,
) {
    if let Err(e) = library.replace_all(diaries) {
        log::warn!("could not save diaries: {}", e);
        result.add_message(CmdMessage::warning(format!(
            "Your diaries could not be saved ({}).",
            e
        )));
    }
}
