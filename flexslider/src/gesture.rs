//! Swipe recognition along the slider axis.

use tracing::trace;

/// Displacement, in pointer units, a swipe must exceed to count.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Navigation decision derived from a completed swipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureIntent {
    /// Move to the next slide (swipe toward the start of the axis).
    Advance,
    /// Move to the previous slide (swipe toward the end of the axis).
    Retreat,
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
enum GestureState {
    #[default]
    Idle,
    Tracking {
        start: f32,
        current: Option<f32>,
    },
}

/// Turns start/move/end samples into at most one [`GestureIntent`].
///
/// Samples are only evaluated on [`on_end`](Self::on_end), never while the
/// pointer is still moving.
#[derive(Clone, Debug, Default)]
pub struct GestureInterpreter {
    state: GestureState,
}

impl GestureInterpreter {
    /// Creates an idle interpreter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins tracking at `axis_value`, discarding any unfinished gesture.
    pub fn on_start(&mut self, axis_value: f32) {
        self.state = GestureState::Tracking {
            start: axis_value,
            current: None,
        };
    }

    /// Records the latest sample. Ignored while idle.
    pub fn on_move(&mut self, axis_value: f32) {
        if let GestureState::Tracking { current, .. } = &mut self.state {
            *current = Some(axis_value);
        }
    }

    /// Finishes the gesture and returns its intent, if any.
    pub fn on_end(&mut self) -> Option<GestureIntent> {
        let state = std::mem::take(&mut self.state);
        let GestureState::Tracking {
            start,
            current: Some(current),
        } = state
        else {
            trace!("Gesture ended without a complete sample");
            return None;
        };

        let delta = current - start;
        let intent = if delta > SWIPE_THRESHOLD {
            Some(GestureIntent::Retreat)
        } else if delta < -SWIPE_THRESHOLD {
            Some(GestureIntent::Advance)
        } else {
            None
        };
        trace!(delta, ?intent, "Gesture ended");
        intent
    }

    /// Drops any gesture in progress.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Returns `true` between a start and the matching end.
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, GestureState::Tracking { .. })
    }
}
