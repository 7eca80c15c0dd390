use crate::fetcher::GazetteFetcher;
use crate::parser::NoticeParser;
use gz_core::{GazetteConfig, NoticeListing, NoticeLogger, NoticeSource, Result};
use std::sync::Arc;

/// Lists one page of notices: fetch, then parse.
pub struct NoticeService {
    source: Arc<dyn NoticeSource>,
    parser: NoticeParser,
}

impl NoticeService {
    pub fn new(source: Arc<dyn NoticeSource>, logger: Arc<dyn NoticeLogger>) -> Self {
        Self {
            source,
            parser: NoticeParser::new(logger),
        }
    }

    /// Service backed by the HTTP fetcher for `config`.
    pub fn from_config(config: &GazetteConfig, logger: Arc<dyn NoticeLogger>) -> Result<Self> {
        let fetcher = GazetteFetcher::new(config, logger.clone())?;
        Ok(Self::new(Arc::new(fetcher), logger))
    }

    /// `page_number` is 0-based; the API's pages start at 1.
    pub async fn list_notices(&self, page_number: u32) -> NoticeListing {
        let api_page = page_number.saturating_add(1);

        match self.source.fetch(api_page).await {
            Some(data) => NoticeListing::Available(self.parser.parse(&data)),
            None => NoticeListing::Unavailable,
        }
    }
}
