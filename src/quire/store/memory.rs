use super::{decode_or_seed, DiaryStore};
use crate::error::{QuireError, Result};
use crate::model::Diary;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Keeps the collection as serialized JSON so loads go through the same
/// validation as the file store.
#[derive(Default)]
pub struct InMemoryStore {
    raw: Option<String>,
    saves: usize,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    pub fn with_diaries(diaries: &[Diary]) -> Self {
        Self {
            raw: serde_json::to_string(diaries).ok(),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DiaryStore for InMemoryStore {
    fn load(&self) -> Vec<Diary> {
        decode_or_seed(self.raw.as_deref())
    }

    fn save(&mut self, diaries: &[Diary]) -> Result<()> {
        if self.simulate_write_error {
            return Err(QuireError::Store("Simulated write error".to_string()));
        }
        self.raw = Some(serde_json::to_string(diaries).map_err(QuireError::Serialization)?);
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{today, Page};

    pub struct StoreFixture {
        diaries: Vec<Diary>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                diaries: Vec::new(),
            }
        }

        /// Adds a diary whose pages hold `contents`, in order.
        pub fn with_diary(mut self, id: &str, name: &str, contents: &[&str]) -> Self {
            let pages = contents
                .iter()
                .enumerate()
                .map(|(i, content)| Page {
                    id: format!("{}-p{}", id, i + 1),
                    page_number: i as u32 + 1,
                    content: content.to_string(),
                    date: "2025-05-10".to_string(),
                })
                .collect();
            self.diaries.push(Diary {
                id: id.to_string(),
                name: name.to_string(),
                last_entry_date: today(),
                pages,
            });
            self
        }

        pub fn diaries(&self) -> &[Diary] {
            &self.diaries
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_diaries(&self.diaries)
        }
    }
}
