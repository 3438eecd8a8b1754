//! Slider configuration.
//!
//! [`SliderArgs`] is fixed once a [`Slider`](crate::Slider) is built. Missing
//! options fall back to their defaults; only values that cannot describe a
//! slider at all (a zero page size, a zero autoplay delay, a breakpoint at a
//! non-finite width) are rejected by [`SliderArgs::validate`].

use std::time::Duration;

use derive_setters::Setters;
use smallvec::SmallVec;
use thiserror::Error;

use crate::axis::SliderAxis;

const DEFAULT_AUTOPLAY_DELAY: Duration = Duration::from_millis(3000);
const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(500);
const DEFAULT_TRANSITION_EFFECT: &str = "fade";

/// Errors raised while building a slider from invalid configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The base page size was zero.
    #[error("slides_per_view must be at least 1")]
    ZeroSlidesPerView,
    /// A breakpoint maps to a page size of zero.
    #[error("breakpoint at {min_width}px has a page size of 0")]
    ZeroBreakpointPageSize {
        /// Width threshold of the offending breakpoint.
        min_width: f32,
    },
    /// A breakpoint threshold is negative, infinite or NaN.
    #[error("breakpoint width {0} is not a finite, non-negative number")]
    InvalidBreakpointWidth(f32),
    /// Autoplay was configured with a zero interval.
    #[error("autoplay delay must be greater than zero")]
    ZeroAutoplayDelay,
    /// A breakpoint key in an options document is not a number.
    #[error("breakpoint key `{0}` is not a number")]
    InvalidBreakpointKey(String),
    /// An options document could not be parsed.
    #[error("malformed slider options: {0}")]
    Malformed(String),
}

/// A single `(minimum width, page size)` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    /// Viewport width from which this breakpoint applies.
    pub min_width: f32,
    /// Number of slides visible at or above `min_width`.
    pub page_size: usize,
}

/// Breakpoint table, kept in ascending `min_width` order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Breakpoints {
    entries: SmallVec<[Breakpoint; 4]>,
}

impl Breakpoints {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Breakpoints::insert`].
    pub fn with(mut self, min_width: f32, page_size: usize) -> Self {
        self.insert(min_width, page_size);
        self
    }

    /// Inserts a breakpoint, replacing any entry with the same width.
    pub fn insert(&mut self, min_width: f32, page_size: usize) {
        let entry = Breakpoint {
            min_width,
            page_size,
        };
        match self
            .entries
            .binary_search_by(|probe| probe.min_width.total_cmp(&min_width))
        {
            Ok(index) => self.entries[index] = entry,
            Err(index) => self.entries.insert(index, entry),
        }
    }

    /// Iterates breakpoints in ascending width order.
    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no breakpoint is configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(f32, usize)> for Breakpoints {
    fn from_iter<T: IntoIterator<Item = (f32, usize)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (min_width, page_size) in iter {
            table.insert(min_width, page_size);
        }
        table
    }
}

/// Configuration arguments for a [`Slider`](crate::Slider).
#[derive(Clone, Debug, PartialEq, Setters)]
pub struct SliderArgs {
    /// Number of slides in the track.
    pub slide_count: usize,
    /// Page size used when no breakpoint matches.
    pub slides_per_view: usize,
    /// Width-dependent page sizes.
    pub breakpoints: Breakpoints,
    /// Whether indicator controls are driven.
    pub pagination: bool,
    /// Whether the slider advances on its own.
    pub autoplay: bool,
    /// Interval between autoplay advances.
    pub autoplay_delay: Duration,
    /// Whether navigation wraps past the first and last page.
    pub looping: bool,
    /// Layout and swipe axis.
    pub axis: SliderAxis,
    /// Name of the transition effect, forwarded to the render target as-is.
    #[setters(into)]
    pub transition_effect: String,
    /// Duration of the track transform transition.
    pub transition_duration: Duration,
    /// Suspend autoplay while a pointer hovers the slider.
    pub pause_on_hover: bool,
}

impl Default for SliderArgs {
    fn default() -> Self {
        Self {
            slide_count: 0,
            slides_per_view: 1,
            breakpoints: Breakpoints::new(),
            pagination: false,
            autoplay: false,
            autoplay_delay: DEFAULT_AUTOPLAY_DELAY,
            looping: false,
            axis: SliderAxis::Horizontal,
            transition_effect: DEFAULT_TRANSITION_EFFECT.to_string(),
            transition_duration: DEFAULT_TRANSITION_DURATION,
            pause_on_hover: true,
        }
    }
}

impl SliderArgs {
    /// Checks the values that have no sensible fallback.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slides_per_view == 0 {
            return Err(ConfigError::ZeroSlidesPerView);
        }
        for bp in self.breakpoints.iter() {
            if !bp.min_width.is_finite() || bp.min_width < 0.0 {
                return Err(ConfigError::InvalidBreakpointWidth(bp.min_width));
            }
            if bp.page_size == 0 {
                return Err(ConfigError::ZeroBreakpointPageSize {
                    min_width: bp.min_width,
                });
            }
        }
        if self.autoplay_delay.is_zero() {
            return Err(ConfigError::ZeroAutoplayDelay);
        }
        Ok(())
    }
}
