//! Position engine: current index, page size and the derived track offset.
//!
//! The engine is the single owner of [`PositionState`]. Every mutating call
//! re-derives the offset and returns a snapshot so the caller can forward it
//! to the render and indicator collaborators.

use tracing::{debug, trace, warn};

/// Snapshot of the slider position after an operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionState {
    /// Index of the first visible slide.
    pub current_index: usize,
    /// Number of slides visible at once.
    pub page_size: usize,
    /// Track translation in percent of the viewport; `0` or negative.
    pub offset_percent: f32,
}

/// Owns the slider index and enforces the loop/clamp policy.
#[derive(Clone, Debug)]
pub struct PositionEngine {
    slide_count: usize,
    page_size: usize,
    looping: bool,
    current_index: usize,
    offset_percent: f32,
}

impl PositionEngine {
    /// Creates an engine positioned on the first slide.
    pub fn new(slide_count: usize, page_size: usize, looping: bool) -> Self {
        let mut engine = Self {
            slide_count,
            page_size: sanitize_page_size(page_size),
            looping,
            current_index: 0,
            offset_percent: 0.0,
        };
        engine.refresh();
        engine
    }

    /// Largest valid index for the current page size.
    pub fn max_index(&self) -> usize {
        self.slide_count.saturating_sub(self.page_size)
    }

    /// Applies a new page size, clamping the index into the new range.
    pub fn set_page_size(&mut self, page_size: usize) -> PositionState {
        let page_size = sanitize_page_size(page_size);
        if page_size != self.page_size {
            debug!(from = self.page_size, to = page_size, "Slider page size changed");
        }
        self.page_size = page_size;
        self.current_index = self.current_index.min(self.max_index());
        self.refresh()
    }

    /// Advances by one slide, wrapping to the start when looping.
    pub fn next(&mut self) -> PositionState {
        if self.current_index < self.max_index() {
            self.current_index += 1;
        } else if self.looping {
            self.current_index = 0;
        }
        trace!(index = self.current_index, "Slider next");
        self.refresh()
    }

    /// Steps back by one slide, wrapping to the last page when looping.
    pub fn prev(&mut self) -> PositionState {
        if self.current_index > 0 {
            self.current_index -= 1;
        } else if self.looping {
            self.current_index = self.max_index();
        }
        trace!(index = self.current_index, "Slider prev");
        self.refresh()
    }

    /// Jumps to `index`, clamped to the last valid page.
    pub fn goto_index(&mut self, index: usize) -> PositionState {
        let max = self.max_index();
        if index > max {
            debug!(requested = index, max, "Slider selection out of range; clamping");
        }
        self.current_index = index.min(max);
        self.refresh()
    }

    /// Current track offset in percent.
    pub fn offset_percent(&self) -> f32 {
        self.offset_percent
    }

    /// Index of the first visible slide.
    pub fn active_index(&self) -> usize {
        self.current_index
    }

    /// Number of slides visible at once.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of slides in the track.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Whether navigation wraps around.
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Returns the current snapshot without mutating anything.
    pub fn state(&self) -> PositionState {
        PositionState {
            current_index: self.current_index,
            page_size: self.page_size,
            offset_percent: self.offset_percent,
        }
    }

    fn refresh(&mut self) -> PositionState {
        self.offset_percent = offset_for(self.current_index, self.page_size);
        self.state()
    }
}

fn offset_for(index: usize, page_size: usize) -> f32 {
    // Subtracting from zero keeps the first page at +0.0 rather than -0.0.
    0.0 - index as f32 * (100.0 / page_size as f32)
}

fn sanitize_page_size(page_size: usize) -> usize {
    if page_size == 0 {
        warn!("Slider page size of 0 is invalid; using 1");
        1
    } else {
        page_size
    }
}
