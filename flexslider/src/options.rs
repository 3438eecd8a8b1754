//! Loosely-typed options documents.
//!
//! Web hosts usually describe a slider with a JSON object whose breakpoint
//! keys are strings (`{"breakpoints": {"768": 2}}`). [`SliderOptions`]
//! accepts that shape and converts it into validated [`SliderArgs`].

use std::{collections::BTreeMap, time::Duration};

use serde::Deserialize;

use crate::{
    axis::SliderAxis,
    config::{Breakpoints, ConfigError, SliderArgs},
};

/// Options document as written by hosts. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SliderOptions {
    /// Base page size.
    pub slides_per_view: Option<usize>,
    /// Minimum width (as a string key) to page size.
    pub breakpoints: BTreeMap<String, usize>,
    /// Drive indicator controls.
    pub pagination: bool,
    /// Advance automatically.
    pub autoplay: bool,
    /// Autoplay interval in milliseconds.
    pub autoplay_delay: Option<u64>,
    /// Wrap around at the ends.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Explicit axis; wins over `vertical`.
    pub axis: Option<SliderAxis>,
    /// Shorthand for a vertical axis.
    pub vertical: bool,
    /// Presentational effect name.
    pub transition_effect: Option<String>,
    /// Pause autoplay while hovered.
    pub pause_on_hover: Option<bool>,
}

impl SliderOptions {
    /// Parses an options document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|err| ConfigError::Malformed(err.to_string()))
    }

    /// Converts the document into validated arguments for `slide_count`
    /// slides.
    pub fn into_args(self, slide_count: usize) -> Result<SliderArgs, ConfigError> {
        let mut breakpoints = Breakpoints::new();
        for (key, page_size) in self.breakpoints {
            let min_width = key
                .trim()
                .parse::<f32>()
                .map_err(|_| ConfigError::InvalidBreakpointKey(key.clone()))?;
            breakpoints.insert(min_width, page_size);
        }

        let defaults = SliderArgs::default();
        let args = SliderArgs {
            slide_count,
            slides_per_view: self.slides_per_view.unwrap_or(defaults.slides_per_view),
            breakpoints,
            pagination: self.pagination,
            autoplay: self.autoplay,
            autoplay_delay: self
                .autoplay_delay
                .map(Duration::from_millis)
                .unwrap_or(defaults.autoplay_delay),
            looping: self.looping,
            axis: self
                .axis
                .unwrap_or_else(|| SliderAxis::from_vertical(self.vertical)),
            transition_effect: self
                .transition_effect
                .unwrap_or(defaults.transition_effect),
            transition_duration: defaults.transition_duration,
            pause_on_hover: self.pause_on_hover.unwrap_or(defaults.pause_on_hover),
        };
        args.validate()?;
        Ok(args)
    }
}
