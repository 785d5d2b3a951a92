//! CSS-style color parsing for the illustration palettes.
//!
//! Boundary styles, layer rings and drift keyframes are all declared with the
//! same color strings a stylesheet would use (`"#87CEEB"`, `"orange"`). They
//! are parsed here into `Rgba` once and converted to egui colors at paint time.

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255, a: 255 };
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Scale alpha by `opacity` (clamped to 0.0..=1.0).
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = (self.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    /// Convert to an egui color (unmultiplied alpha).
    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn hex_byte(hi: u8, lo: u8) -> Option<u8> {
    Some(hex_digit(hi)? << 4 | hex_digit(lo)?)
}

/// Parse `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
///
/// Returns `None` on malformed input.
pub fn parse_hex_color(s: &str) -> Option<Rgba> {
    let digits = s.strip_prefix('#')?.as_bytes();
    match digits.len() {
        3 => {
            let r = hex_digit(digits[0])?;
            let g = hex_digit(digits[1])?;
            let b = hex_digit(digits[2])?;
            Some(Rgba::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        6 => Some(Rgba::rgb(
            hex_byte(digits[0], digits[1])?,
            hex_byte(digits[2], digits[3])?,
            hex_byte(digits[4], digits[5])?,
        )),
        8 => Some(Rgba {
            r: hex_byte(digits[0], digits[1])?,
            g: hex_byte(digits[2], digits[3])?,
            b: hex_byte(digits[4], digits[5])?,
            a: hex_byte(digits[6], digits[7])?,
        }),
        _ => None,
    }
}

/// Named colors used by the map and the canvases.
const NAMED_COLORS: &[(&str, Rgba)] = &[
    ("black", Rgba::rgb(0, 0, 0)),
    ("white", Rgba::rgb(255, 255, 255)),
    ("red", Rgba::rgb(255, 0, 0)),
    ("green", Rgba::rgb(0, 128, 0)),
    ("blue", Rgba::rgb(0, 0, 255)),
    ("yellow", Rgba::rgb(255, 255, 0)),
    ("orange", Rgba::rgb(255, 165, 0)),
    ("gray", Rgba::rgb(128, 128, 128)),
    ("grey", Rgba::rgb(128, 128, 128)),
    ("purple", Rgba::rgb(128, 0, 128)),
    ("brown", Rgba::rgb(165, 42, 42)),
    ("transparent", Rgba::TRANSPARENT),
];

/// Case-insensitive lookup in the named color table.
pub fn parse_named_color(name: &str) -> Option<Rgba> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, c)| c)
}

/// Parse a hex or named color. Anything unparseable is black.
pub fn parse_css_color(value: &str) -> Rgba {
    let trimmed = value.trim();
    let parsed = if trimmed.starts_with('#') {
        parse_hex_color(trimmed)
    } else {
        parse_named_color(trimmed)
    };
    parsed.unwrap_or_else(|| {
        log::debug!("unparseable color {:?}, using black", value);
        Rgba::BLACK
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_rgb() {
        assert_eq!(parse_hex_color("#87CEEB"), Some(Rgba::rgb(0x87, 0xCE, 0xEB)));
        assert_eq!(parse_hex_color("#d1e0ff"), Some(Rgba::rgb(0xd1, 0xe0, 0xff)));
    }

    #[test]
    fn parse_hex_short_and_alpha() {
        assert_eq!(parse_hex_color("#F80"), Some(Rgba::rgb(255, 136, 0)));
        assert_eq!(
            parse_hex_color("#FF880080"),
            Some(Rgba { r: 255, g: 136, b: 0, a: 128 })
        );
    }

    #[test]
    fn malformed_hex_is_none() {
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("123456"), None);
    }

    #[test]
    fn named_is_case_insensitive() {
        assert_eq!(parse_named_color("Orange"), Some(Rgba::rgb(255, 165, 0)));
        assert_eq!(parse_named_color("GRAY"), parse_named_color("grey"));
        assert_eq!(parse_named_color("chartreuse"), None);
    }

    #[test]
    fn css_color_falls_back_to_black() {
        assert_eq!(parse_css_color("not-a-color"), Rgba::BLACK);
        assert_eq!(parse_css_color(" blue "), Rgba::rgb(0, 0, 255));
    }

    #[test]
    fn opacity_scales_alpha() {
        assert_eq!(Rgba::WHITE.with_opacity(0.5).a, 128);
        assert_eq!(Rgba::WHITE.with_opacity(2.0).a, 255);
        assert_eq!(Rgba::WHITE.with_opacity(-1.0).a, 0);
    }
}
