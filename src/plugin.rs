use std::collections::HashSet;

use itertools::Itertools;

use crate::violation::{ConfigViolation, Severity};

/// An extension module recognized by the generator. Plugins contribute
/// additional utility-class families or base styles to the generated
/// output; all this layer knows about them is their handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plugin {
    pub name: String,
    pub about: String,
}

impl Plugin {
    pub fn new(name: impl Into<String>, about: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            about: about.into(),
        }
    }
}

pub fn builtin_plugins() -> Vec<Plugin> {
    vec![
        Plugin::new("forms", "base styles for form elements"),
        Plugin::new("typography", "prose classes for rendered markup"),
        Plugin::new("aspect-ratio", "aspect ratio utilities"),
        Plugin::new("container-queries", "container query variants"),
    ]
}

/// Checks every configured plugin handle against the known plugin set.
/// Declaration order is application order, so a duplicate is only a
/// warning: the first occurrence wins.
pub fn validate_plugin_references(
    plugin_references: &[String],
    all_plugins: &[Plugin],
) -> Vec<ConfigViolation> {
    let mut violations: Vec<ConfigViolation> = Default::default();
    let mut seen: HashSet<&str> = Default::default();
    for (index, handle) in plugin_references.iter().enumerate() {
        let path = format!("plugins[{index}]");
        if !all_plugins.iter().any(|plugin| &plugin.name == handle) {
            violations.push(ConfigViolation::new(
                Severity::Error,
                format!(
                    "unknown plugin {handle:?}, known plugins are {}",
                    all_plugins.iter().map(|plugin| &plugin.name).join(", ")
                ),
                path,
            ));
        } else if !seen.insert(handle.as_str()) {
            violations.push(ConfigViolation::new(
                Severity::Warning,
                format!("plugin {handle:?} is listed more than once, the first occurrence wins"),
                path,
            ));
        }
    }
    violations
}
