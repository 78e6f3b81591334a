//! Hex color string validation, parsing and formatting.

use palette::Srgb;
use serde_json::Value;

/// Check whether a JSON value is a valid hex color string.
///
/// Only strings can be valid; numbers, objects and everything else are
/// rejected. See [`is_valid_hex_str`] for the accepted string forms.
pub fn is_valid_hex(input: &Value) -> bool {
    input.as_str().is_some_and(is_valid_hex_str)
}

/// Check whether a string is a valid hex color.
///
/// One optional leading `#` is stripped. The remainder must be exactly 3, 6
/// or 8 ASCII hex digits, in any case.
///
/// # Example
///
/// ```
/// use chromastate::hex::is_valid_hex_str;
///
/// assert!(is_valid_hex_str("#FfFffF"));
/// assert!(is_valid_hex_str("0af"));
/// assert!(!is_valid_hex_str("ffff"));
/// assert!(!is_valid_hex_str("gggggg"));
/// ```
pub fn is_valid_hex_str(input: &str) -> bool {
    let digits = input.strip_prefix('#').unwrap_or(input);
    matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse a valid hex string into 0-255 channels plus a 0-1 alpha.
///
/// 3-digit input expands each digit (`f` -> `ff`). 8-digit input carries
/// alpha in the last byte (`RRGGBBAA`). Returns `None` for anything
/// [`is_valid_hex_str`] rejects.
pub fn parse_hex(input: &str) -> Option<(Srgb<f64>, f64)> {
    if !is_valid_hex_str(input) {
        return None;
    }
    let digits = input.strip_prefix('#').unwrap_or(input);

    let expanded: String = if digits.len() == 3 {
        digits.chars().flat_map(|c| [c, c]).collect()
    } else {
        digits.to_string()
    };

    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    let rgb = Srgb::new(
        f64::from(byte(0)?),
        f64::from(byte(2)?),
        f64::from(byte(4)?),
    );
    let alpha = if expanded.len() == 8 {
        f64::from(byte(6)?) / 255.0
    } else {
        1.0
    };

    Some((rgb, alpha))
}

/// Format 0-255 channels as `#rrggbb` (lowercase).
///
/// Channels are rounded and clamped; non-finite channels encode as `00`.
pub fn format_hex(rgb: Srgb<f64>) -> String {
    let to_byte = |v: f64| {
        if v.is_finite() {
            v.round().clamp(0.0, 255.0) as u8
        } else {
            0
        }
    };
    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(rgb.red),
        to_byte(rgb.green),
        to_byte(rgb.blue)
    )
}
