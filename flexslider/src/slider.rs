//! The slider facade.
//!
//! [`Slider`] wires the viewport resolver, position engine, gesture
//! interpreter and autoplay scheduler to the host collaborators. Every input
//! goes through [`Slider::handle_event`] or one of the direct methods, runs
//! to completion, and publishes the resulting position before returning.

use glam::Vec2;
use tracing::{debug, trace};

use crate::{
    Instant,
    autoplay::{AutoplayScheduler, AutoplayState},
    config::{ConfigError, SliderArgs},
    gesture::{GestureIntent, GestureInterpreter},
    host::{ContainerStyle, IndicatorPanel, NoIndicators, RenderTarget, ViewportSource},
    position::{PositionEngine, PositionState},
    viewport::resolve_page_size,
};

/// Input delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    /// The viewport was resized to `width`.
    Resize {
        /// New viewport width.
        width: f32,
    },
    /// The primary pointer touched down.
    GestureStart(Vec2),
    /// The primary pointer moved while down.
    GestureMove(Vec2),
    /// The primary pointer was released.
    GestureEnd,
    /// A pointer entered the slider.
    HoverEnter,
    /// The pointer left the slider.
    HoverLeave,
    /// An indicator was clicked.
    Select(usize),
    /// A frame elapsed; autoplay is polled.
    Tick,
}

/// A carousel over a fixed number of slides.
pub struct Slider<R, I = NoIndicators> {
    args: SliderArgs,
    engine: PositionEngine,
    gesture: GestureInterpreter,
    autoplay: AutoplayScheduler,
    render: R,
    indicators: I,
    paused_by_hover: bool,
    destroyed: bool,
}

impl<R: RenderTarget, I: IndicatorPanel> Slider<R, I> {
    /// Builds a slider and renders its initial position.
    ///
    /// The page size is resolved from `viewport`'s current width. Autoplay,
    /// when configured, is armed from `now`.
    pub fn new(
        args: SliderArgs,
        viewport: &impl ViewportSource,
        mut render: R,
        mut indicators: I,
        now: Instant,
    ) -> Result<Self, ConfigError> {
        args.validate()?;

        let width = viewport.current_width();
        let page_size = resolve_page_size(width, args.slides_per_view, &args.breakpoints);
        let engine = PositionEngine::new(args.slide_count, page_size, args.looping);

        render.apply_container_style(&ContainerStyle {
            axis: args.axis,
            looping: args.looping,
            transition_effect: args.transition_effect.clone(),
            transition_duration: args.transition_duration,
        });
        if args.pagination {
            indicators.build(args.slide_count);
        }

        let mut slider = Self {
            autoplay: AutoplayScheduler::new(args.autoplay_delay),
            engine,
            gesture: GestureInterpreter::new(),
            render,
            indicators,
            paused_by_hover: false,
            destroyed: false,
            args,
        };
        debug!(
            slides = slider.args.slide_count,
            width,
            page_size,
            "Slider created"
        );

        let state = slider.engine.state();
        slider.publish(state);
        if slider.args.autoplay {
            slider.autoplay.start(now);
        }
        Ok(slider)
    }

    /// Dispatches a host event. Ignored after [`destroy`](Self::destroy).
    pub fn handle_event(&mut self, event: SliderEvent, now: Instant) {
        if self.destroyed {
            trace!(?event, "Event delivered to destroyed slider");
            return;
        }
        match event {
            SliderEvent::Resize { width } => self.set_viewport_width(width),
            SliderEvent::GestureStart(pos) => self.gesture.on_start(self.args.axis.main(pos)),
            SliderEvent::GestureMove(pos) => self.gesture.on_move(self.args.axis.main(pos)),
            SliderEvent::GestureEnd => match self.gesture.on_end() {
                Some(GestureIntent::Advance) => self.next(),
                Some(GestureIntent::Retreat) => self.prev(),
                None => {}
            },
            SliderEvent::HoverEnter => self.on_hover(),
            SliderEvent::HoverLeave => self.on_unhover(now),
            SliderEvent::Select(index) => self.goto_index(index),
            SliderEvent::Tick => {
                self.tick(now);
            }
        }
    }

    /// Re-resolves the page size for a new viewport width.
    pub fn set_viewport_width(&mut self, width: f32) {
        if self.destroyed {
            return;
        }
        let page_size = resolve_page_size(width, self.args.slides_per_view, &self.args.breakpoints);
        let state = self.engine.set_page_size(page_size);
        self.publish(state);
    }

    /// Moves to the next slide.
    pub fn next(&mut self) {
        if self.destroyed {
            return;
        }
        let state = self.engine.next();
        self.publish(state);
    }

    /// Moves to the previous slide.
    pub fn prev(&mut self) {
        if self.destroyed {
            return;
        }
        let state = self.engine.prev();
        self.publish(state);
    }

    /// Jumps to `index`; out-of-range indices land on the last page.
    pub fn goto_index(&mut self, index: usize) {
        if self.destroyed {
            return;
        }
        let state = self.engine.goto_index(index);
        self.publish(state);
    }

    /// Polls autoplay and advances when a tick is due. Returns whether it
    /// advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.destroyed || !self.autoplay.poll(now) {
            return false;
        }
        self.next();
        true
    }

    /// Starts (or restarts) autoplay regardless of the `autoplay` option.
    pub fn start_autoplay(&mut self, now: Instant) {
        if self.destroyed {
            return;
        }
        self.paused_by_hover = false;
        self.autoplay.start(now);
    }

    /// Pauses autoplay.
    pub fn pause_autoplay(&mut self) {
        self.paused_by_hover = false;
        self.autoplay.pause();
    }

    /// Resumes paused autoplay with a fresh interval.
    pub fn resume_autoplay(&mut self, now: Instant) {
        if self.destroyed {
            return;
        }
        self.paused_by_hover = false;
        self.autoplay.resume(now);
    }

    fn on_hover(&mut self) {
        if !self.args.pause_on_hover || self.autoplay.state() != AutoplayState::Running {
            return;
        }
        self.autoplay.pause();
        self.paused_by_hover = true;
    }

    fn on_unhover(&mut self, now: Instant) {
        if !self.paused_by_hover {
            return;
        }
        self.paused_by_hover = false;
        self.autoplay.resume(now);
    }

    /// Tears the slider down: autoplay stops and later events and
    /// navigation calls are ignored.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.autoplay.stop();
        self.gesture.cancel();
        self.destroyed = true;
        debug!("Slider destroyed");
    }

    fn publish(&mut self, state: PositionState) {
        self.render.apply_offset(state.offset_percent, self.args.axis);
        if self.args.pagination && self.args.slide_count > 0 {
            self.indicators.set_active(state.current_index);
        }
    }
}

impl<R, I> Slider<R, I> {
    /// Current position snapshot.
    pub fn state(&self) -> PositionState {
        self.engine.state()
    }

    /// Index of the first visible slide.
    pub fn active_index(&self) -> usize {
        self.engine.active_index()
    }

    /// Current track offset in percent.
    pub fn offset_percent(&self) -> f32 {
        self.engine.offset_percent()
    }

    /// Number of slides visible at once.
    pub fn page_size(&self) -> usize {
        self.engine.page_size()
    }

    /// Autoplay state.
    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    /// When the next autoplay tick is due, if armed.
    pub fn next_autoplay_deadline(&self) -> Option<Instant> {
        self.autoplay.next_deadline()
    }

    /// Configuration the slider was built with.
    pub fn args(&self) -> &SliderArgs {
        &self.args
    }

    /// Whether [`destroy`](Slider::destroy) was called.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// The render target.
    pub fn render_target(&self) -> &R {
        &self.render
    }

    /// The indicator panel.
    pub fn indicators(&self) -> &I {
        &self.indicators
    }
}

impl<R, I> std::fmt::Debug for Slider<R, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slider")
            .field("args", &self.args)
            .field("engine", &self.engine)
            .field("gesture", &self.gesture)
            .field("autoplay", &self.autoplay)
            .field("destroyed", &self.destroyed)
            .finish_non_exhaustive()
    }
}
