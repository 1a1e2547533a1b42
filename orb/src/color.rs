//! Hex color parsing and alpha formatting for canvas styles.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

/// An opaque RGB color. Alpha is supplied per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Slate gray used when the host passes an unparseable color.
    pub const FALLBACK: Self = Self::new(0x94, 0xa3, 0xb8);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB`.
    #[must_use]
    pub fn parse_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => Some(Self::new(
                hex_byte(&hex[0..1].repeat(2))?,
                hex_byte(&hex[1..2].repeat(2))?,
                hex_byte(&hex[2..3].repeat(2))?,
            )),
            6 => Some(Self::new(hex_byte(&hex[0..2])?, hex_byte(&hex[2..4])?, hex_byte(&hex[4..6])?)),
            _ => None,
        }
    }

    /// Parse a hex color, falling back to [`Rgb::FALLBACK`].
    #[must_use]
    pub fn parse_or_fallback(raw: &str) -> Self {
        Self::parse_hex(raw).unwrap_or(Self::FALLBACK)
    }

    /// CSS `rgba()` string with `alpha` clamped to `[0, 1]`.
    #[must_use]
    pub fn rgba(self, alpha: f64) -> String {
        let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 0.0 };
        format!("rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::FALLBACK
    }
}

fn hex_byte(digits: &str) -> Option<u8> {
    match u8::from_str_radix(digits, 16) {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}
