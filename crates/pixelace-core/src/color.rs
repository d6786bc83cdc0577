//! Paint color representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A 24-bit RGB paint color for puzzle cells.
///
/// Colors parse from and display as CSS hex notation (`#rrggbb`), the form
/// hosting applications typically configure and persist. The engine never
/// interprets the components; it only compares colors for equality.
///
/// # Examples
///
/// ```
/// use pixelace_core::Color;
///
/// let color: Color = "#1e90ff".parse().unwrap();
/// assert_eq!(color, Color::new(0x1e, 0x90, 0xff));
/// assert_eq!(color.to_string(), "#1e90ff");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Creates a color from red, green, and blue components.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Returns the red component.
    #[must_use]
    pub const fn r(self) -> u8 {
        self.r
    }

    /// Returns the green component.
    #[must_use]
    pub const fn g(self) -> u8 {
        self.g
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn b(self) -> u8 {
        self.b
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned when parsing a [`Color`] from a malformed string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid color literal, expected `#rrggbb`")]
pub struct ParseColorError;

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').ok_or(ParseColorError)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError);
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError)
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}
