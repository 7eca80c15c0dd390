use std::fmt;
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// Logging capability handed to the fetcher and the parser.
///
/// `message` is a template whose `@name` placeholders are filled from
/// `context`, e.g. `("Failed to parse date: @date", [("@date", "...")])`.
pub trait NoticeLogger: Send + Sync {
    fn log(&self, severity: Severity, message: &str, context: &[(&str, String)]);

    fn error(&self, message: &str, context: &[(&str, String)]) {
        self.log(Severity::Error, message, context);
    }

    fn warning(&self, message: &str, context: &[(&str, String)]) {
        self.log(Severity::Warning, message, context);
    }
}

/// Substitute `@name` placeholders in `message` with their context values.
pub fn render_template(message: &str, context: &[(&str, String)]) -> String {
    let mut keys: Vec<&(&str, String)> = context.iter().collect();
    // Longest keys first so `@code` never clobbers `@code_name`.
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut rendered = message.to_string();
    for (key, value) in keys {
        rendered = rendered.replace(key, value);
    }
    rendered
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub severity: Severity,
    pub message: String,
    pub context: Vec<(String, String)>,
}

impl LogEntry {
    pub fn rendered(&self) -> String {
        let context: Vec<(&str, String)> = self
            .context
            .iter()
            .map(|(k, v)| (k.as_str(), v.clone()))
            .collect();
        render_template(&self.message, &context)
    }
}

/// Keeps every entry in memory. Used where log output has to be inspected.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn entries_at(&self, severity: Severity) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.severity == severity)
            .collect()
    }
}

impl NoticeLogger for RecordingLogger {
    fn log(&self, severity: Severity, message: &str, context: &[(&str, String)]) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(LogEntry {
                severity,
                message: message.to_string(),
                context: context
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            });
        }
    }
}
