use colored::Colorize;
use derive_builder::Builder;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Builder, Clone, Debug, PartialEq, Eq)]
#[builder(setter(into))]
pub struct ConfigViolation {
    pub severity: Severity,
    pub message: String,
    /// Dotted key path into the config file the finding anchors to,
    /// eg `theme-extensions.primary.500`.
    pub path: String,
}

impl ConfigViolation {
    pub fn new(severity: Severity, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            path: path.into(),
        }
    }

    pub fn print(&self) {
        let tag = match self.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        eprintln!("{tag}: {} ({})", self.message, self.path.dimmed());
    }
}
