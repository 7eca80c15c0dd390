use gz_core::config::LOG_CHANNEL;
use gz_core::logging::render_template;
use gz_core::{NoticeLogger, Severity};
use std::collections::VecDeque;
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// `NoticeLogger` that forwards to `tracing`, prefixing each line with its
/// channel names.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    prefixes: VecDeque<String>,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self {
            prefixes: VecDeque::new(),
        }
    }

    pub fn with_new_prefixes(mut self, prefix: String) -> Self {
        self.prefixes.clear();
        self.prefixes.push_back(prefix);
        self
    }

    pub fn with_prefix(mut self, prefix: String) -> Self {
        self.prefixes.push_back(prefix);
        self
    }

    fn line(&self, message: &str, context: &[(&str, String)]) -> String {
        let prefix = self
            .prefixes
            .iter()
            .map(|p| format!("[{}] ", p))
            .collect::<String>();
        format!("{}{}", prefix, render_template(message, context))
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new().with_new_prefixes(LOG_CHANNEL.to_string())
    }
}

impl NoticeLogger for TracingLogger {
    fn log(&self, severity: Severity, message: &str, context: &[(&str, String)]) {
        let line = self.line(message, context);
        match severity {
            Severity::Debug => tracing::debug!("{}", line),
            Severity::Info => tracing::info!("{}", line),
            Severity::Warning => tracing::warn!("{}", line),
            Severity::Error => tracing::error!("{}", line),
        }
    }
}

/// Install the fmt subscriber once and hand back the default logger.
pub fn init_logging() -> TracingLogger {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(Level::INFO)
                .init();
        });
    }
    TracingLogger::default()
}
