//! Color resolution for stage display.
//!
//! Raw colors come straight from the catalog document and are never checked
//! at load time. A renderer asks for the resolved color, which is either a
//! normalized `#`-prefixed hex color, a lowercase named color token, or
//! nothing.

use std::sync::LazyLock;

use regex::Regex;

// Both patterns are literals; compilation cannot fail.
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]+)$").expect("hex color pattern is valid"));

static NAMED_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]+$").expect("named color pattern is valid"));

/// Digit counts accepted for a hex color: `rgb`, `rgba`, `rrggbb`, `rrggbbaa`.
const HEX_LENGTHS: [usize; 4] = [3, 4, 6, 8];

/// Resolves a raw color string into a displayable color.
///
/// Hex colors (with or without a leading `#`) are returned with a `#`
/// prefix and their digit case preserved. Strings made only of lowercase
/// ASCII letters are returned unchanged. Anything else yields `None`.
///
/// Hex takes precedence: `"fff"` resolves to `"#fff"`. An all-letter run of
/// the wrong hex length, such as `"abcde"`, falls through to the named check.
#[must_use]
pub fn resolve_color(raw: Option<&str>) -> Option<String> {
    let raw = raw?;

    if let Some(digits) = HEX_COLOR.captures(raw).and_then(|caps| caps.get(1)) {
        if HEX_LENGTHS.contains(&digits.len()) {
            return Some(format!("#{}", digits.as_str()));
        }
    }

    if NAMED_COLOR.is_match(raw) {
        return Some(raw.to_owned());
    }

    None
}
