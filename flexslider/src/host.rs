//! Collaborators implemented by the embedding host.
//!
//! The slider never touches elements, styles or listeners itself. It calls
//! into these traits, and the host feeds input back as
//! [`SliderEvent`](crate::SliderEvent)s.

use std::time::Duration;

use crate::axis::SliderAxis;

/// One-time presentational setup of the slide track container.
#[derive(Clone, Debug, PartialEq)]
pub struct ContainerStyle {
    /// Layout axis of the track.
    pub axis: SliderAxis,
    /// Whether the slider wraps around.
    pub looping: bool,
    /// Transition effect name, uninterpreted.
    pub transition_effect: String,
    /// Duration of the transform transition.
    pub transition_duration: Duration,
}

impl ContainerStyle {
    /// CSS `transition` value for the track transform, e.g.
    /// `transform 0.5s ease`.
    pub fn transition_css(&self) -> String {
        format!(
            "transform {}s ease",
            self.transition_duration.as_secs_f32()
        )
    }
}

/// Applies the track position.
pub trait RenderTarget {
    /// Called once before the first offset is applied.
    fn apply_container_style(&mut self, style: &ContainerStyle);

    /// Moves the track to `offset_percent` along `axis`.
    fn apply_offset(&mut self, offset_percent: f32, axis: SliderAxis);
}

/// Indicator controls, one per slide.
///
/// Clicking an indicator should be reported back as
/// [`SliderEvent::Select`](crate::SliderEvent::Select).
pub trait IndicatorPanel {
    /// Creates `count` indicators.
    fn build(&mut self, count: usize);

    /// Marks `index` active and every other indicator inactive.
    fn set_active(&mut self, index: usize);
}

/// Supplies the viewport width used for breakpoint resolution.
pub trait ViewportSource {
    /// Current viewport width.
    fn current_width(&self) -> f32;
}

impl ViewportSource for f32 {
    fn current_width(&self) -> f32 {
        *self
    }
}

/// Indicator panel for sliders built without pagination.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIndicators;

impl IndicatorPanel for NoIndicators {
    fn build(&mut self, _count: usize) {}

    fn set_active(&mut self, _index: usize) {}
}
