//! Background colour normalization for declension tables.

use crate::utils::BACKGROUND_COLOR_REMAP;

/// Parse `#rgb`, `#rrggbb` or `rgb(r, g, b)` into components
#[must_use]
pub fn parse_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        return match hex.len() {
            6 => Some((
                u8::from_str_radix(&hex[0..2], 16).ok()?,
                u8::from_str_radix(&hex[2..4], 16).ok()?,
                u8::from_str_radix(&hex[4..6], 16).ok()?,
            )),
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
                Some((digit(0)?, digit(1)?, digit(2)?))
            }
            _ => None,
        };
    }

    let inner = value.strip_prefix("rgb(")?.strip_suffix(')')?;
    let mut parts = inner.split(',').map(|part| part.trim().parse::<u8>());
    let rgb = (
        parts.next()?.ok()?,
        parts.next()?.ok()?,
        parts.next()?.ok()?,
    );
    if parts.next().is_some() {
        return None;
    }
    Some(rgb)
}

/// Replacement for a known table background, `None` for any other value
#[must_use]
pub fn remap_background(value: &str) -> Option<&'static str> {
    let rgb = parse_rgb(value)?;
    BACKGROUND_COLOR_REMAP
        .iter()
        .find(|(known, _)| *known == rgb)
        .map(|(_, replacement)| *replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_colours_map_to_greys() {
        assert_eq!(remap_background("rgb(84,158,160)"), Some("#aaa"));
        assert_eq!(remap_background("rgb(84, 158, 160)"), Some("#aaa"));
        assert_eq!(remap_background("#549EA0"), Some("#aaa"));
        assert_eq!(remap_background("rgb(64,224,208)"), Some("#ccc"));
        assert_eq!(remap_background("#40e0d0"), Some("#ccc"));
    }

    #[test]
    fn other_values_are_left_alone() {
        assert_eq!(remap_background("rgb(84,158,161)"), None);
        assert_eq!(remap_background("#fff"), None);
        assert_eq!(remap_background("turquoise"), None);
        assert_eq!(remap_background("rgb(84,158,160,1)"), None);
        assert_eq!(remap_background(""), None);
    }

    #[test]
    fn short_hex_expands() {
        assert_eq!(parse_rgb("#abc"), Some((0xaa, 0xbb, 0xcc)));
    }
}
