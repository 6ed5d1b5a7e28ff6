use once_cell::sync::Lazy;
use regex::Regex;

// #rgb, #rgba, #rrggbb and #rrggbbaa, case-insensitive
static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap()
});

pub fn is_valid_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}
