//! Turns raw notice pages into display-ready records and a pagination summary.

use gz_core::types::{
    DEFAULT_CURRENT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_TOTAL_RESULTS, UNTITLED,
};
use gz_core::{NoticeLogger, NoticeRecord, PaginationInfo, ParsedNotices};
use serde_json::Value;
use std::sync::Arc;

pub mod content;
pub mod date;
pub mod link;

pub const PAGE_NUMBER_KEY: &str = "f:page-number";
pub const TOTAL_KEY: &str = "f:total";
pub const PAGE_SIZE_KEY: &str = "f:page-size";

pub struct NoticeParser {
    logger: Arc<dyn NoticeLogger>,
}

impl NoticeParser {
    pub fn new(logger: Arc<dyn NoticeLogger>) -> Self {
        Self { logger }
    }

    /// Never fails: anything missing or malformed falls back to a default.
    pub fn parse(&self, raw: &Value) -> ParsedNotices {
        let notices = match raw.get("entry") {
            Some(Value::Array(entries)) => entries.iter().map(|e| self.parse_entry(e)).collect(),
            _ => Vec::new(),
        };

        ParsedNotices {
            notices,
            pagination: parse_pagination(raw),
        }
    }

    pub fn parse_entry(&self, entry: &Value) -> NoticeRecord {
        NoticeRecord {
            id: scalar_field(entry, "id").unwrap_or_default(),
            title: scalar_field(entry, "title").unwrap_or_else(|| UNTITLED.to_string()),
            content: content::sanitize(string_field(entry, "content").unwrap_or_default()),
            published: self.format_published(string_field(entry, "published").unwrap_or_default()),
            url: link::extract_notice_url(entry.get("link")),
        }
    }

    fn format_published(&self, raw: &str) -> String {
        if raw.trim().is_empty() {
            return raw.to_string();
        }

        match date::parse_published(raw) {
            Some(day) => date::format_date(day),
            None => {
                self.logger
                    .warning("Failed to parse date: @date", &[("@date", raw.to_string())]);
                raw.to_string()
            }
        }
    }
}

pub fn parse_pagination(raw: &Value) -> PaginationInfo {
    PaginationInfo::new(
        int_field(raw, PAGE_NUMBER_KEY).unwrap_or(DEFAULT_CURRENT_PAGE),
        int_field(raw, TOTAL_KEY).unwrap_or(DEFAULT_TOTAL_RESULTS),
        int_field(raw, PAGE_SIZE_KEY).unwrap_or(DEFAULT_PAGE_SIZE),
    )
}

fn string_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key).and_then(Value::as_str)
}

/// Strings as-is, numbers and booleans in their JSON form. Anything else is
/// treated as absent.
fn scalar_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Non-negative integer from a JSON number or a numeric string.
fn int_field(value: &Value, key: &str) -> Option<u64> {
    match value.get(key)? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(|f| f.trunc() as u64)
            })
        }
        _ => None,
    }
}
