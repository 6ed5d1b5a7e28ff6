use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::{
    color::is_valid_color,
    violation::{ConfigViolation, Severity},
};

pub type ColorScale = IndexMap<String, String>;

pub type ThemeTokens = IndexMap<String, ColorScale>;

/// The built-in color token table. Theme extensions from the config
/// file are layered on top of this, they never replace it wholesale.
pub static DEFAULT_THEME: Lazy<ThemeTokens> = Lazy::new(|| {
    [
        (
            "gray",
            scale(&[
                ("50", "#f9fafb"),
                ("100", "#f3f4f6"),
                ("200", "#e5e7eb"),
                ("300", "#d1d5db"),
                ("400", "#9ca3af"),
                ("500", "#6b7280"),
                ("600", "#4b5563"),
                ("700", "#374151"),
                ("800", "#1f2937"),
                ("900", "#111827"),
            ]),
        ),
        (
            "red",
            scale(&[
                ("50", "#fef2f2"),
                ("100", "#fee2e2"),
                ("200", "#fecaca"),
                ("300", "#fca5a5"),
                ("400", "#f87171"),
                ("500", "#ef4444"),
                ("600", "#dc2626"),
                ("700", "#b91c1c"),
                ("800", "#991b1b"),
                ("900", "#7f1d1d"),
            ]),
        ),
        (
            "green",
            scale(&[
                ("50", "#f0fdf4"),
                ("100", "#dcfce7"),
                ("200", "#bbf7d0"),
                ("300", "#86efac"),
                ("400", "#4ade80"),
                ("500", "#22c55e"),
                ("600", "#16a34a"),
                ("700", "#15803d"),
                ("800", "#166534"),
                ("900", "#14532d"),
            ]),
        ),
        (
            "blue",
            scale(&[
                ("50", "#eff6ff"),
                ("100", "#dbeafe"),
                ("200", "#bfdbfe"),
                ("300", "#93c5fd"),
                ("400", "#60a5fa"),
                ("500", "#3b82f6"),
                ("600", "#2563eb"),
                ("700", "#1d4ed8"),
                ("800", "#1e40af"),
                ("900", "#1e3a8a"),
            ]),
        ),
    ]
    .into_iter()
    .map(|(category, shades)| (category.to_owned(), shades))
    .collect()
});

fn scale(entries: &[(&str, &str)]) -> ColorScale {
    entries
        .iter()
        .map(|(shade, value)| ((*shade).to_owned(), (*value).to_owned()))
        .collect()
}

/// Merges theme extensions over the default token table, per shade key.
/// A category unknown to the default table is appended whole. For a
/// category present in both, extension shades override same-keyed
/// default shades and new shades are appended; everything else falls
/// through from the defaults unchanged.
pub fn resolve_theme(extensions: &ThemeTokens) -> ThemeTokens {
    let mut resolved = DEFAULT_THEME.clone();
    for (category, shades) in extensions {
        let resolved_shades = resolved.entry(category.clone()).or_default();
        for (shade, value) in shades {
            resolved_shades.insert(shade.clone(), value.clone());
        }
    }
    resolved
}

pub fn validate_theme_extensions(extensions: &ThemeTokens) -> Vec<ConfigViolation> {
    let mut violations: Vec<ConfigViolation> = Default::default();
    for (category, shades) in extensions {
        if category.is_empty() {
            violations.push(ConfigViolation::new(
                Severity::Error,
                "token category name is empty",
                "theme-extensions",
            ));
        }
        for (shade, value) in shades {
            if !is_valid_color(value) {
                violations.push(ConfigViolation::new(
                    Severity::Error,
                    format!("invalid color value {value:?}"),
                    format!("theme-extensions.{category}.{shade}"),
                ));
            }
        }
    }
    violations
}
