use globset::Glob;

use crate::violation::{ConfigViolation, Severity};

/// Syntactic validation only: the pattern has to parse as a glob. Whether
/// it matches anything on disk is the generator's business at scan time.
pub fn check_content_pattern(pattern: &str) -> Result<Glob, globset::Error> {
    Glob::new(pattern)
}

pub fn validate_content_paths(content_paths: &[String]) -> Vec<ConfigViolation> {
    let mut violations: Vec<ConfigViolation> = Default::default();
    if content_paths.is_empty() {
        violations.push(ConfigViolation::new(
            Severity::Warning,
            "no content paths configured, the generator will find no class usage",
            "content-paths",
        ));
    }
    for (index, pattern) in content_paths.iter().enumerate() {
        let path = format!("content-paths[{index}]");
        if pattern.is_empty() {
            violations.push(ConfigViolation::new(
                Severity::Error,
                "content path pattern is empty",
                path,
            ));
            continue;
        }
        if let Err(error) = check_content_pattern(pattern) {
            violations.push(ConfigViolation::new(
                Severity::Error,
                format!("invalid glob pattern {pattern:?}: {}", error.kind()),
                path,
            ));
        }
    }
    violations
}
