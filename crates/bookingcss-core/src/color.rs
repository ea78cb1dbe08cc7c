//! Color classification helpers.
//!
//! These are deliberately forgiving: the values come straight from user
//! configuration, so anything that does not parse is classified with a safe
//! default rather than rejected.
//!
//! Supported formats for [`is_light_color`]:
//!
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - Functional: `rgb(r, g, b)`, `rgba(r, g, b, a)`, space-separated
//!   `rgb(r g b / a)`, and percentage channels
//!
//! # Example
//!
//! ```rust
//! use bookingcss_core::color::{is_light_color, is_transparent};
//!
//! assert!(is_light_color("#FFFFFF"));
//! assert!(!is_light_color("rgb(10, 10, 10)"));
//! assert!(is_transparent(" Transparent "));
//! ```

/// Returns `true` when the color's luminance is above one half.
///
/// Luminance is `(0.299 R + 0.587 G + 0.114 B) / 255`. Empty or unparsable
/// input returns `true`.
pub fn is_light_color(value: &str) -> bool {
    match parse_rgb(value) {
        Some((r, g, b)) => {
            let luminance =
                (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)) / 255.0;
            luminance > 0.5
        }
        None => true,
    }
}

/// Case-insensitive, trimmed comparison with `transparent`.
pub fn is_transparent(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("transparent")
}

/// Matches `rgba(0,0,0,0)` regardless of spacing or case.
pub fn is_zero_alpha(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    compact == "rgba(0,0,0,0)"
}

/// Readable text color on top of `background`: black on light colors,
/// white on dark ones.
pub fn contrast_text_color(background: &str) -> &'static str {
    if is_light_color(background) {
        "#000000"
    } else {
        "#FFFFFF"
    }
}

/// Parses a hex or `rgb()`/`rgba()` color into its RGB channels.
pub fn parse_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = value.to_ascii_lowercase();
    let inner = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts: Vec<&str> = inner
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() < 3 {
        return None;
    }

    Some((
        parse_channel(parts[0])?,
        parse_channel(parts[1])?,
        parse_channel(parts[2])?,
    ))
}

/// Parses a hex color code (without the `#` prefix). Alpha digits are
/// accepted and ignored.
fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        // #rgb / #rgba -> #rrggbb
        3 | 4 => Some((nibble(0)?, nibble(1)?, nibble(2)?)),
        6 | 8 => Some((pair(0)?, pair(2)?, pair(4)?)),
        _ => None,
    }
}

fn parse_channel(part: &str) -> Option<u8> {
    if let Some(percent) = part.strip_suffix('%') {
        let value: f64 = percent.parse().ok()?;
        return Some((value.clamp(0.0, 100.0) * 2.55).round() as u8);
    }
    let value: f64 = part.parse().ok()?;
    Some(value.clamp(0.0, 255.0).round() as u8)
}
