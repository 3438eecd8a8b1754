//! Headless carousel engine.
//!
//! `flexslider` owns the state of a slider: how many slides fit on a page at
//! the current viewport width, which slide is first on screen, and where the
//! slide track must be translated to show it. Elements, styles and listeners
//! stay with the host, which implements [`RenderTarget`] and
//! [`IndicatorPanel`] and forwards input as [`SliderEvent`]s.
//!
//! # Example
//!
//! ```
//! use flexslider::{
//!     Breakpoints, ContainerStyle, Instant, NoIndicators, RenderTarget, Slider, SliderArgs,
//!     SliderAxis, SliderEvent,
//! };
//!
//! struct Track(String);
//!
//! impl RenderTarget for Track {
//!     fn apply_container_style(&mut self, _style: &ContainerStyle) {}
//!
//!     fn apply_offset(&mut self, offset_percent: f32, axis: SliderAxis) {
//!         self.0 = axis.translate(offset_percent);
//!     }
//! }
//!
//! let args = SliderArgs::default()
//!     .slide_count(5)
//!     .breakpoints(Breakpoints::new().with(768.0, 2).with(1024.0, 3));
//! let now = Instant::now();
//! let mut slider = Slider::new(args, &800.0_f32, Track(String::new()), NoIndicators, now)?;
//!
//! slider.handle_event(SliderEvent::Select(2), now);
//! assert_eq!(slider.render_target().0, "translateX(-100%)");
//!
//! slider.handle_event(SliderEvent::Resize { width: 1200.0 }, now);
//! assert_eq!(slider.active_index(), 2);
//! assert_eq!(slider.page_size(), 3);
//! # Ok::<(), flexslider::ConfigError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod autoplay;
pub mod axis;
pub mod config;
pub mod gesture;
pub mod handle;
pub mod host;
#[cfg(feature = "serde")]
pub mod options;
pub mod position;
pub mod slider;
pub mod viewport;

#[cfg(not(target_family = "wasm"))]
pub use std::time::Instant;
#[cfg(target_family = "wasm")]
pub use web_time::Instant;

pub use autoplay::{AutoplayScheduler, AutoplayState};
pub use axis::SliderAxis;
pub use config::{Breakpoint, Breakpoints, ConfigError, SliderArgs};
pub use gesture::{GestureIntent, GestureInterpreter, SWIPE_THRESHOLD};
pub use handle::SliderHandle;
pub use host::{ContainerStyle, IndicatorPanel, NoIndicators, RenderTarget, ViewportSource};
#[cfg(feature = "serde")]
pub use options::SliderOptions;
pub use position::{PositionEngine, PositionState};
pub use slider::{Slider, SliderEvent};
pub use viewport::resolve_page_size;
