//! RGBA colors and alpha compositing.
//!
//! Compositing follows the usual "over" operator:
//! <https://en.wikipedia.org/wiki/Alpha_compositing#Alpha_blending>

use crate::error::Error;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// An immutable color with `r`, `g`, `b` in `0..=255` and `a` in `0..=1`.
///
/// Values outside those ranges are not rejected; arithmetic is carried out as is and only
/// serialization clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const OPAQUE_BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT_WHITE: Rgba = Rgba::new(255.0, 255.0, 255.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque color from its channels
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// The same color with a different alpha
    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Composite `src` over `self`, where `self` is the background
    pub fn blend(self, src: Rgba) -> Rgba {
        blend(self, src)
    }

    /// Serialize as a CSS color: `#RRGGBB` when opaque, `rgba(r,g,b,a)` otherwise
    pub fn to_css(&self) -> String {
        let [r, g, b] = [self.r, self.g, self.b].map(channel);
        let a = round2(self.a);
        if a == 1.0 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("rgba({r},{g},{b},{a:.2})")
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::OPAQUE_BLACK
    }
}

/// Composite `src` over the background `dst`.
///
/// An opaque background always yields an opaque result, and a fully transparent result
/// has all channels set to zero.
pub fn blend(dst: Rgba, src: Rgba) -> Rgba {
    let a = if dst.a == 1.0 {
        1.0
    } else {
        src.a + dst.a * (1.0 - src.a)
    };
    if a == 0.0 {
        return Rgba::new(0.0, 0.0, 0.0, a);
    }
    let mix = |s: f64, d: f64| (s * src.a + d * dst.a * (1.0 - src.a)) / a;
    Rgba::new(mix(src.r, dst.r), mix(src.g, dst.g), mix(src.b, dst.b), a)
}

/// Round a channel to the nearest integer in `0..=255`
fn channel(n: f64) -> u8 {
    n.clamp(0.0, 255.0).round() as u8
}

/// Round to two decimal places, halves away from zero
fn round2(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

impl FromStr for Rgba {
    type Err = Error;

    /// Parse `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r, g, b)` or `rgba(r, g, b, a)`
    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }
        static FUNCTIONAL: OnceLock<Regex> = OnceLock::new();
        let exp = FUNCTIONAL.get_or_init(|| {
            Regex::new(r"^rgba?\(\s*([^,\s)]+)\s*,\s*([^,\s)]+)\s*,\s*([^,\s)]+)\s*(?:,\s*([^,\s)]+)\s*)?\)$")
                .expect("Invalid color regex!")
        });
        let caps = exp.captures(s).ok_or_else(invalid)?;
        let number = |i: usize| -> Result<f64, Error> {
            caps[i].parse::<f64>().map_err(|_| invalid())
        };
        let a = match caps.get(4) {
            Some(_) => number(4)?,
            None => 1.0,
        };
        Ok(Rgba::new(number(1)?, number(2)?, number(3)?, a))
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digits: Vec<u8> = match hex.len() {
        // Short forms repeat each digit, e.g. #f80 is #ff8800
        3 | 4 => hex
            .chars()
            .map(|c| u8::from_str_radix(&format!("{c}{c}"), 16).ok())
            .collect::<Option<_>>()?,
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
            .collect::<Option<_>>()?,
        _ => return None,
    };
    let a = digits.get(3).map_or(1.0, |&a| f64::from(a) / 255.0);
    Some(Rgba::new(
        f64::from(digits[0]),
        f64::from(digits[1]),
        f64::from(digits[2]),
        a,
    ))
}
