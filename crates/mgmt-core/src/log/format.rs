//! Console prompts and persisted line formatting.

use mgmt_types::Severity;

/// Default console prefix for a severity.
pub fn default_prompt(level: Severity) -> &'static str {
    match level {
        Severity::Debug => "DEBUG: ",
        Severity::Info => "",
        Severity::Warning => "Warning: ",
        Severity::Error => "ERROR: ",
        Severity::Critical => "CRITICAL: ",
    }
}

/// Per-logger console prefixes, one per severity.
///
/// Every table starts as a copy of the defaults; changing one table never
/// affects another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTable {
    prompts: [String; 5],
}

impl PromptTable {
    /// Prefix currently used for `level`.
    pub fn get(&self, level: Severity) -> &str {
        &self.prompts[Self::slot(level)]
    }

    /// Replace the prefix for `level`.
    pub fn set(&mut self, level: Severity, prompt: impl Into<String>) {
        self.prompts[Self::slot(level)] = prompt.into();
    }

    /// Console line for `message` at `level`: `<prompt><message>`.
    pub fn format(&self, level: Severity, message: &str) -> String {
        format!("{}{}", self.get(level), message)
    }

    fn slot(level: Severity) -> usize {
        match level {
            Severity::Debug => 0,
            Severity::Info => 1,
            Severity::Warning => 2,
            Severity::Error => 3,
            Severity::Critical => 4,
        }
    }
}

impl Default for PromptTable {
    fn default() -> Self {
        Self {
            prompts: Severity::ALL.map(|level| default_prompt(level).to_string()),
        }
    }
}

/// Persisted line: `<timestamp> <LEVELNAME>: <message>`.
pub fn format_record(timestamp: &str, level: Severity, message: &str) -> String {
    format!("{} {}: {}", timestamp, level.as_str(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let table = PromptTable::default();
        assert_eq!(table.get(Severity::Debug), "DEBUG: ");
        assert_eq!(table.get(Severity::Info), "");
        assert_eq!(table.get(Severity::Warning), "Warning: ");
        assert_eq!(table.get(Severity::Error), "ERROR: ");
        assert_eq!(table.get(Severity::Critical), "CRITICAL: ");
    }

    #[test]
    fn test_tables_are_independent() {
        let mut first = PromptTable::default();
        let second = first.clone();

        first.set(Severity::Info, "> ");
        assert_eq!(first.format(Severity::Info, "hi"), "> hi");
        assert_eq!(second.format(Severity::Info, "hi"), "hi");
        assert_eq!(PromptTable::default().get(Severity::Info), "");
    }

    #[test]
    fn test_format_record() {
        assert_eq!(
            format_record("2015-02-05 17:29:48,289", Severity::Info, "This is some test output!"),
            "2015-02-05 17:29:48,289 INFO: This is some test output!"
        );
        assert_eq!(
            format_record("2015-02-05 17:29:48,289", Severity::Warning, "low disk"),
            "2015-02-05 17:29:48,289 WARNING: low disk"
        );
    }
}
