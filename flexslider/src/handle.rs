//! Shared ownership of a slider.
//!
//! Hosts usually register one closure per listener (resize, touch, hover,
//! frame). [`SliderHandle`] lets all of them share a single slider while
//! keeping each handler atomic with respect to the others.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    Instant,
    host::{IndicatorPanel, NoIndicators, RenderTarget},
    slider::{Slider, SliderEvent},
};

/// Cloneable, lock-protected handle to a [`Slider`].
pub struct SliderHandle<R, I = NoIndicators> {
    inner: Arc<Mutex<Slider<R, I>>>,
}

impl<R, I> Clone for SliderHandle<R, I> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R, I> SliderHandle<R, I> {
    /// Wraps `slider`.
    pub fn new(slider: Slider<R, I>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(slider)),
        }
    }

    /// Runs `f` with shared access to the slider.
    pub fn with<T>(&self, f: impl FnOnce(&Slider<R, I>) -> T) -> T {
        f(&self.inner.lock())
    }

    /// Runs `f` with exclusive access to the slider.
    pub fn with_mut<T>(&self, f: impl FnOnce(&mut Slider<R, I>) -> T) -> T {
        f(&mut self.inner.lock())
    }
}

impl<R: RenderTarget, I: IndicatorPanel> SliderHandle<R, I> {
    /// Forwards `event` to the slider under the lock.
    pub fn handle_event(&self, event: SliderEvent, now: Instant) {
        self.inner.lock().handle_event(event, now);
    }
}

impl<R, I> std::fmt::Debug for SliderHandle<R, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SliderHandle").finish_non_exhaustive()
    }
}
