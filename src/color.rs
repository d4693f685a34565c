use serde::{Deserialize, Serialize};
use std::fmt;

/// An 8-bit RGB colour with a continuous alpha in `[0, 1]`.
///
/// A painted cell holding `a == 0.0` is still painted; absence of a colour is
/// modelled with `Option<Rgba>` at the grid level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRgba")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

/// Stored colours must carry an alpha in `[0, 1]`; nothing is clamped on load.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("alpha {0} is outside 0..=1")]
pub struct InvalidAlpha(pub f32);

#[derive(Deserialize)]
struct RawRgba {
    r: u8,
    g: u8,
    b: u8,
    #[serde(default = "opaque")]
    a: f32,
}

impl TryFrom<RawRgba> for Rgba {
    type Error = InvalidAlpha;

    fn try_from(raw: RawRgba) -> Result<Self, Self::Error> {
        if !(0.0..=1.0).contains(&raw.a) {
            return Err(InvalidAlpha(raw.a));
        }
        Ok(Self {
            r: raw.r,
            g: raw.g,
            b: raw.b,
            a: raw.a,
        })
    }
}

fn opaque() -> f32 {
    1.0
}

/// Fallback used when a hex string cannot be parsed.
const MAGENTA: (u8, u8, u8) = (255, 0, 255);

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a: clamp_alpha(a) }
    }

    /// Parses `#rgb`, `#rrggbb` (the `#` is optional) with the given alpha.
    ///
    /// Anything unparseable falls back to magenta so a bad colour is visible
    /// rather than silently black.
    pub fn from_hex(hex: &str, alpha: f32) -> Self {
        let (r, g, b) = parse_hex(hex).unwrap_or(MAGENTA);
        Self::new(r, g, b, alpha)
    }

    /// `#rrggbb`, alpha dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS `rgba(r,g,b,a)` form used by the vector and snippet exports.
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
    }

    /// Alpha scaled to a byte, rounded.
    pub fn alpha_u8(&self) -> u8 {
        (clamp_alpha(self.a) * 255.0).round() as u8
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: clamp_alpha(a), ..self }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {:.2}", self.to_hex(), self.a)
    }
}

fn clamp_alpha(a: f32) -> f32 {
    if a.is_finite() { a.clamp(0.0, 1.0) } else { 1.0 }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let full: String = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 => digits.to_owned(),
        _ => return None,
    };
    let value = u32::from_str_radix(&full, 16).ok()?;
    Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgba::from_hex("#ff66cc", 1.0), Rgba::rgb(0xff, 0x66, 0xcc));
        assert_eq!(Rgba::from_hex("f6c", 0.5), Rgba::new(0xff, 0x66, 0xcc, 0.5));
    }

    #[test]
    fn bad_hex_falls_back_to_magenta() {
        assert_eq!(Rgba::from_hex("not a colour", 1.0), Rgba::rgb(255, 0, 255));
        assert_eq!(Rgba::from_hex("#12345", 1.0), Rgba::rgb(255, 0, 255));
    }

    #[test]
    fn hex_round_trips_and_drops_alpha() {
        let c = Rgba::new(1, 2, 254, 0.25);
        assert_eq!(c.to_hex(), "#0102fe");
        assert_eq!(Rgba::from_hex(&c.to_hex(), 0.25), c);
    }

    #[test]
    fn alpha_is_clamped() {
        assert_eq!(Rgba::new(0, 0, 0, 3.0).a, 1.0);
        assert_eq!(Rgba::new(0, 0, 0, -1.0).a, 0.0);
        assert_eq!(Rgba::new(0, 0, 0, f32::NAN).a, 1.0);
    }

    #[test]
    fn css_form() {
        assert_eq!(Rgba::new(10, 20, 30, 0.5).to_css(), "rgba(10,20,30,0.5)");
        assert_eq!(Rgba::rgb(10, 20, 30).to_css(), "rgba(10,20,30,1)");
    }

    #[test]
    fn missing_alpha_deserializes_opaque() {
        let c: Rgba = serde_json::from_str(r#"{"r":1,"g":2,"b":3}"#).unwrap();
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn out_of_range_alpha_is_rejected() {
        for json in [r#"{"r":1,"g":2,"b":3,"a":5.0}"#, r#"{"r":1,"g":2,"b":3,"a":-2}"#] {
            let err = serde_json::from_str::<Rgba>(json).unwrap_err();
            assert!(err.to_string().contains("outside 0..=1"), "{err}");
        }
        let edge: Rgba = serde_json::from_str(r#"{"r":1,"g":2,"b":3,"a":0}"#).unwrap();
        assert_eq!(edge.a, 0.0);
    }
}
