pub mod cli;
pub mod fetcher;
pub mod listing;
pub mod logging;
pub mod parser;

#[cfg(test)]
mod test_utils;

pub use cli::{handle_command, ConnectionArgs, ListArgs};
pub use fetcher::GazetteFetcher;
pub use listing::NoticeService;
pub use logging::{init_logging, TracingLogger};
pub use parser::NoticeParser;

pub mod prelude {
    pub use super::fetcher::GazetteFetcher;
    pub use super::listing::NoticeService;
    pub use super::parser::NoticeParser;
    pub use gz_core::{
        Error, GazetteConfig, NoticeListing, NoticeLogger, NoticeRecord, NoticeSource,
        PaginationInfo, ParsedNotices, Result,
    };
}
