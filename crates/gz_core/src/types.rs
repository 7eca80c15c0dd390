use serde::{Deserialize, Serialize};

pub const UNTITLED: &str = "Untitled";
pub const NO_URL: &str = "#";

pub const DEFAULT_CURRENT_PAGE: u64 = 1;
pub const DEFAULT_TOTAL_RESULTS: u64 = 0;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A single notice, normalized for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    pub published: String,
    pub url: String,
}

impl Default for NoticeRecord {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: UNTITLED.to_string(),
            content: String::new(),
            published: String::new(),
            url: NO_URL.to_string(),
        }
    }
}

/// Pagination summary for one listing page.
///
/// `total_pages` is always derived from `total_results` and `page_size`; the
/// constructor is the only way to build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    current_page: u64,
    total_results: u64,
    page_size: u64,
    total_pages: u64,
}

impl PaginationInfo {
    pub fn new(current_page: u64, total_results: u64, page_size: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_results.div_ceil(page_size)
        };

        Self {
            current_page,
            total_results,
            page_size,
            total_pages,
        }
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn total_results(&self) -> u64 {
        self.total_results
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }
}

impl Default for PaginationInfo {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENT_PAGE, DEFAULT_TOTAL_RESULTS, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedNotices {
    pub notices: Vec<NoticeRecord>,
    pub pagination: PaginationInfo,
}

/// Outcome of listing one page of notices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeListing {
    Available(ParsedNotices),
    Unavailable,
}

impl NoticeListing {
    pub const UNAVAILABLE_MESSAGE: &'static str =
        "Unable to fetch notices at this time. Please try again later.";

    pub fn is_available(&self) -> bool {
        matches!(self, NoticeListing::Available(_))
    }

    /// `{notices, pagination}` when available, `{error}` otherwise.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            NoticeListing::Available(parsed) => {
                serde_json::to_value(parsed).unwrap_or(serde_json::Value::Null)
            }
            NoticeListing::Unavailable => {
                serde_json::json!({ "error": Self::UNAVAILABLE_MESSAGE })
            }
        }
    }
}
