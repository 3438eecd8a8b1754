//! Scroll axis of the slide track.

use glam::Vec2;

/// Direction in which slides are laid out and swiped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SliderAxis {
    /// Slides advance left to right; gestures read the x coordinate.
    #[default]
    Horizontal,
    /// Slides advance top to bottom; gestures read the y coordinate.
    Vertical,
}

impl SliderAxis {
    /// Picks the axis from the `vertical` flag of an options document.
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }

    /// Projects a pointer position onto this axis.
    pub fn main(self, position: Vec2) -> f32 {
        match self {
            Self::Horizontal => position.x,
            Self::Vertical => position.y,
        }
    }

    /// Flex direction used by the slide track container.
    pub fn flex_direction(self) -> &'static str {
        match self {
            Self::Horizontal => "row",
            Self::Vertical => "column",
        }
    }

    /// Formats a CSS transform moving the track by `offset_percent`.
    pub fn translate(self, offset_percent: f32) -> String {
        match self {
            Self::Horizontal => format!("translateX({offset_percent}%)"),
            Self::Vertical => format!("translateY({offset_percent}%)"),
        }
    }
}
