//! JSON export and import of diaries.
//!
//! An export is `{ "diaries": [...], "exportDate": "<RFC 3339>" }`. Importing merges
//! by diary id: ids already in the collection (or seen earlier in the same payload)
//! are skipped, never overwritten; everything else is appended in payload order.
//! An imported diary without pages gets one blank page.

use crate::error::{QuireError, Result};
use crate::model::{Diary, Page};
use chrono::{NaiveDate, SecondsFormat, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub diaries: Vec<Diary>,
    pub export_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

pub fn export(diaries: &[Diary]) -> ExportBundle {
    ExportBundle {
        diaries: diaries.to_vec(),
        export_date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }
}

pub fn to_json(bundle: &ExportBundle) -> Result<String> {
    serde_json::to_string_pretty(bundle).map_err(QuireError::Serialization)
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("quire_export_{}.json", date.format("%Y-%m-%d"))
}

/// Decodes the diaries of an import payload. Only the `diaries` array is required;
/// anything else in the document is ignored.
pub fn parse_payload(payload: &str) -> Result<Vec<Diary>> {
    let document: Value = serde_json::from_str(payload)
        .map_err(|e| QuireError::InvalidImport(format!("not valid JSON ({})", e)))?;
    let diaries = document
        .get("diaries")
        .filter(|d| d.is_array())
        .cloned()
        .ok_or_else(|| QuireError::InvalidImport("missing a \"diaries\" array".to_string()))?;
    serde_json::from_value(diaries)
        .map_err(|e| QuireError::InvalidImport(format!("malformed diary ({})", e)))
}

/// Merges `payload` into `target`. On error `target` is left untouched.
pub fn import(target: &mut Vec<Diary>, payload: &str) -> Result<ImportReport> {
    let incoming = parse_payload(payload)?;
    let mut report = ImportReport::default();
    for mut diary in incoming {
        if target.iter().any(|d| d.id == diary.id) {
            warn!("diary with id {} already exists, skipping", diary.id);
            report.skipped += 1;
            continue;
        }
        debug!("importing diary {} ({})", diary.id, diary.name);
        if diary.pages.is_empty() {
            diary.pages.push(Page::blank());
        }
        target.push(diary);
        report.imported += 1;
    }
    Ok(report)
}
