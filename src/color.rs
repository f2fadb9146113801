//! Color types for plotted cells and surface decorations.
//!
//! Colors are parsed from names (`red`, `black`, ...) or `#rrggbb` hex strings,
//! the same forms accepted by the configuration file and the CLI.

use crate::error::{Error, Result};
use std::str::FromStr;

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Parse a color name or `#rrggbb` hex string (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] for unknown names and malformed hex.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "red" => Ok(Self::RED),
            "green" => Ok(Self::GREEN),
            "blue" => Ok(Self::BLUE),
            "black" => Ok(Self::BLACK),
            "white" => Ok(Self::WHITE),
            "yellow" => Ok(Self::rgb(255, 255, 0)),
            "cyan" => Ok(Self::rgb(0, 255, 255)),
            "magenta" => Ok(Self::rgb(255, 0, 255)),
            "orange" => Ok(Self::rgb(255, 165, 0)),
            "gray" | "grey" => Ok(Self::rgb(128, 128, 128)),
            _ if s.starts_with('#') && s.len() == 7 && s.is_ascii() => {
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&s[range], 16)
                        .map_err(|_| Error::InvalidColor(format!("bad hex color {s}")))
                };
                Ok(Self::rgb(channel(1..3)?, channel(3..5)?, channel(5..7)?))
            }
            _ => Err(Error::InvalidColor(format!("unknown color {s}"))),
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
