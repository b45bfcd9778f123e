//! Design tokens: colours, spacing, corner radii and typography.

use std::fmt;

/// RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const PRIMARY: Color = Color::rgb(0x62, 0x00, 0xEE);
    pub const PRIMARY_VARIANT: Color = Color::rgb(0x37, 0x00, 0xB3);
    pub const SECONDARY: Color = Color::rgb(0x03, 0xDA, 0xC6);
    pub const BACKGROUND: Color = Color::WHITE;
    pub const SURFACE: Color = Color::WHITE;
    pub const ERROR: Color = Color::rgb(0xB0, 0x00, 0x20);
    pub const ON_PRIMARY: Color = Color::WHITE;
    pub const ON_SECONDARY: Color = Color::BLACK;
    pub const ON_BACKGROUND: Color = Color::BLACK;
    pub const ON_SURFACE: Color = Color::BLACK;
    pub const ON_ERROR: Color = Color::WHITE;

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with its alpha replaced by `alpha` in `0.0..=1.0`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Parse `#RRGGBB` (the `#` is optional, surrounding whitespace and case
    /// are ignored). Anything else yields `None`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        Some(Color::rgb(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xFF {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Spacing scale in points.
pub struct Spacing;

impl Spacing {
    pub const XX_SMALL: f64 = 4.0;
    pub const X_SMALL: f64 = 8.0;
    pub const SMALL: f64 = 12.0;
    pub const MEDIUM: f64 = 16.0;
    pub const LARGE: f64 = 24.0;
    pub const X_LARGE: f64 = 32.0;
    pub const XX_LARGE: f64 = 48.0;

    pub fn from_token(token: &str) -> Option<f64> {
        match token {
            "xxSmall" => Some(Self::XX_SMALL),
            "xSmall" => Some(Self::X_SMALL),
            "small" => Some(Self::SMALL),
            "medium" => Some(Self::MEDIUM),
            "large" => Some(Self::LARGE),
            "xLarge" => Some(Self::X_LARGE),
            "xxLarge" => Some(Self::XX_LARGE),
            _ => None,
        }
    }
}

/// Corner radius scale in points.
pub struct CornerRadius;

impl CornerRadius {
    pub const SMALL: f64 = 4.0;
    pub const MEDIUM: f64 = 8.0;
    pub const LARGE: f64 = 16.0;

    pub fn from_token(token: &str) -> Option<f64> {
        match token {
            "small" => Some(Self::SMALL),
            "medium" => Some(Self::MEDIUM),
            "large" => Some(Self::LARGE),
            _ => None,
        }
    }
}

/// Resolve a token through `table`, falling back to a literal number.
///
/// Negative and non-finite literals are rejected.
pub fn resolve_length(raw: &str, table: fn(&str) -> Option<f64>) -> Option<f64> {
    table(raw).or_else(|| {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Regular,
    Semibold,
    Bold,
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontWeight::Regular => "regular",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f64,
    pub weight: FontWeight,
}

impl Font {
    pub const fn new(size: f64, weight: FontWeight) -> Self {
        Self { size, weight }
    }
}

/// Text styles of the design system.
pub struct Typography;

impl Typography {
    pub const LARGE_TITLE: Font = Font::new(34.0, FontWeight::Bold);
    pub const TITLE: Font = Font::new(28.0, FontWeight::Bold);
    pub const HEADLINE: Font = Font::new(20.0, FontWeight::Semibold);
    pub const BODY: Font = Font::new(16.0, FontWeight::Regular);
    pub const CAPTION: Font = Font::new(12.0, FontWeight::Regular);
}
