//! Level piece tokens consumed by the game runtime

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::TOKEN_SEPARATOR;
use crate::io::error::{NominoError, invalid_parameter};
use crate::spatial::shape::ShapeId;

/// Palette color a building block is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NominoColor {
    /// Red
    Red,
    /// Gold
    Gold,
    /// Pink
    Pink,
    /// Blue
    Blue,
    /// Green
    Green,
}

impl NominoColor {
    /// Identifier used in serialized tokens
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Gold => "Gold",
            Self::Pink => "Pink",
            Self::Blue => "Blue",
            Self::Green => "Green",
        }
    }

    /// Opaque RGBA used when rendering
    pub const fn rgba(self) -> [u8; 4] {
        match self {
            Self::Red => [214, 69, 65, 255],
            Self::Gold => [232, 180, 48, 255],
            Self::Pink => [236, 128, 178, 255],
            Self::Blue => [66, 133, 214, 255],
            Self::Green => [76, 175, 80, 255],
        }
    }
}

impl fmt::Display for NominoColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NominoColor {
    type Err = NominoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "gold" => Ok(Self::Gold),
            "pink" => Ok(Self::Pink),
            "blue" => Ok(Self::Blue),
            "green" => Ok(Self::Green),
            _ => Err(invalid_parameter(
                "color",
                &s,
                &"expected one of Red, Gold, Pink, Blue, Green",
            )),
        }
    }
}

/// One colored piece of an assembled level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPiece {
    /// Shape to spawn
    pub shape: ShapeId,
    /// Color of the building block the shape came from
    pub color: NominoColor,
}

impl fmt::Display for LevelPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "piece!(Nomino::{}, NominoColor::{})",
            self.shape.token_name(),
            self.color
        )
    }
}

/// Serialize a level as separator-joined tokens
pub fn render_level(level: &[LevelPiece]) -> String {
    level
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(TOKEN_SEPARATOR)
}
