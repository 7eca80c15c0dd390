pub mod config;
pub mod error;
pub mod logging;
pub mod source;
pub mod types;

pub use config::GazetteConfig;
pub use error::{Error, Result};
pub use logging::{NoticeLogger, RecordingLogger, Severity};
pub use source::NoticeSource;
pub use types::{NoticeListing, NoticeRecord, PaginationInfo, ParsedNotices};
