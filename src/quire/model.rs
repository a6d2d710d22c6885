use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Which way a page turn goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
        }
    }
}

/// One fixed-capacity page.
///
/// `page_number` is derived from the page's position and rewritten on every save;
/// `id` is the identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub page_number: u32,
    #[serde(default, deserialize_with = "text_or_null")]
    pub content: String,
    pub date: String,
}

impl Page {
    /// A fresh empty page stamped with today's date.
    pub fn blank() -> Self {
        Self {
            id: new_page_id(),
            page_number: 1,
            content: String::new(),
            date: today(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diary {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub last_entry_date: String,
    pub pages: Vec<Page>,
}

impl Diary {
    /// A new diary with a single welcome page.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let date = today();
        let page = Page {
            id: new_page_id(),
            page_number: 1,
            content: format!("Welcome to {}!\nStart writing your thoughts.", name),
            date: date.clone(),
        };
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            last_entry_date: date,
            pages: vec![page],
        }
    }

    pub fn page_index(&self, page_id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == page_id)
    }
}

/// Today's date as `YYYY-MM-DD` (UTC), the format every date stamp uses.
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn new_page_id() -> String {
    format!("p{}", Uuid::new_v4().simple())
}

/// The collection used on first run, or when stored data cannot be trusted.
pub fn seed_collection() -> Vec<Diary> {
    fn page(id: &str, number: u32, content: &str, date: &str) -> Page {
        Page {
            id: id.to_string(),
            page_number: number,
            content: content.to_string(),
            date: date.to_string(),
        }
    }

    vec![
        Diary {
            id: "1".to_string(),
            name: "My First Diary".to_string(),
            last_entry_date: "2025-05-10".to_string(),
            pages: vec![
                page(
                    "p1",
                    1,
                    "This is the first page.\nSome more thoughts here.",
                    "2025-05-10",
                ),
                page("p2", 2, "Second page adventures!", "2025-05-11"),
            ],
        },
        Diary {
            id: "2".to_string(),
            name: "Travel Journal".to_string(),
            last_entry_date: "2025-04-22".to_string(),
            pages: vec![page("p1", 1, "Exploring new places.", "2025-04-20")],
        },
        Diary {
            id: "3".to_string(),
            name: "Dream Log".to_string(),
            last_entry_date: "2025-05-12".to_string(),
            pages: vec![page(
                "p1",
                1,
                "Last night's dream was peculiar.",
                "2025-05-12",
            )],
        },
    ]
}

// Stored pages may carry `"content": null`.
fn text_or_null<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_accepts_null_and_missing_content() {
        let page: Page =
            serde_json::from_str(r#"{"id":"p1","content":null,"date":"2025-05-10"}"#).unwrap();
        assert_eq!(page.content, "");
        assert_eq!(page.page_number, 0);

        let page: Page = serde_json::from_str(r#"{"id":"p1","date":"2025-05-10"}"#).unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn diary_uses_camel_case_fields() {
        let diary = Diary::new("Notes");
        let json = serde_json::to_value(&diary).unwrap();
        assert!(json.get("lastEntryDate").is_some());
        assert_eq!(json["pages"][0]["pageNumber"], 1);
    }

    #[test]
    fn new_diary_has_welcome_page() {
        let diary = Diary::new("Travel");
        assert_eq!(diary.pages.len(), 1);
        assert!(diary.pages[0].content.starts_with("Welcome to Travel!"));
        assert_eq!(diary.last_entry_date, today());
    }

    #[test]
    fn blank_pages_get_distinct_ids() {
        let a = Page::blank();
        let b = Page::blank();
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with('p'));
    }

    #[test]
    fn seed_collection_is_well_formed() {
        let seed = seed_collection();
        assert_eq!(seed.len(), 3);
        for diary in &seed {
            assert!(!diary.pages.is_empty());
            for (i, page) in diary.pages.iter().enumerate() {
                assert_eq!(page.page_number as usize, i + 1);
            }
        }
    }
}
