//! Headless slider host.
//!
//! Replays a scripted session (resizes, swipes, indicator clicks, hovering
//! and autoplay frames) against a slider and logs what a browser host would
//! apply to the page. Run with `RUST_LOG=debug` to see engine transitions.

use std::time::Duration;

use flexslider::{
    ConfigError, ContainerStyle, IndicatorPanel, Instant, RenderTarget, Slider, SliderAxis,
    SliderEvent, SliderHandle, SliderOptions,
};
use glam::Vec2;
use tracing::info;

const OPTIONS: &str = r#"{
    "slidesPerView": 1,
    "breakpoints": { "768": 2, "1024": 3 },
    "pagination": true,
    "autoplay": true,
    "autoplayDelay": 2000,
    "loop": true
}"#;

const SLIDE_COUNT: usize = 6;
const FRAME: Duration = Duration::from_millis(16);

struct ConsoleTrack;

impl RenderTarget for ConsoleTrack {
    fn apply_container_style(&mut self, style: &ContainerStyle) {
        info!(
            display = "flex",
            flex_direction = style.axis.flex_direction(),
            transition = %style.transition_css(),
            effect = %style.transition_effect,
            looping = style.looping,
            "container styled"
        );
    }

    fn apply_offset(&mut self, offset_percent: f32, axis: SliderAxis) {
        info!(transform = %axis.translate(offset_percent), "track moved");
    }
}

#[derive(Default)]
struct ConsoleDots {
    count: usize,
}

impl IndicatorPanel for ConsoleDots {
    fn build(&mut self, count: usize) {
        self.count = count;
        info!(count, "indicators built");
    }

    fn set_active(&mut self, index: usize) {
        let dots: String = (0..self.count)
            .map(|i| if i == index { '●' } else { '○' })
            .collect();
        info!(%dots, "indicators updated");
    }
}

struct Session {
    handle: SliderHandle<ConsoleTrack, ConsoleDots>,
    start: Instant,
    elapsed: Duration,
}

impl Session {
    fn now(&self) -> Instant {
        self.start + self.elapsed
    }

    fn send(&self, event: SliderEvent) {
        self.handle.handle_event(event, self.now());
    }

    fn swipe(&self, from: f32, to: f32) {
        self.send(SliderEvent::GestureStart(Vec2::new(from, 200.0)));
        self.send(SliderEvent::GestureMove(Vec2::new((from + to) / 2.0, 201.0)));
        self.send(SliderEvent::GestureMove(Vec2::new(to, 203.0)));
        self.send(SliderEvent::GestureEnd);
    }

    fn run_frames(&mut self, duration: Duration) {
        let end = self.elapsed + duration;
        while self.elapsed < end {
            self.elapsed += FRAME;
            self.send(SliderEvent::Tick);
        }
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("info") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> Result<(), ConfigError> {
    init_tracing();

    let args = SliderOptions::from_json(OPTIONS)?.into_args(SLIDE_COUNT)?;
    let start = Instant::now();
    let slider = Slider::new(args, &800.0_f32, ConsoleTrack, ConsoleDots::default(), start)?;
    let mut session = Session {
        handle: SliderHandle::new(slider),
        start,
        elapsed: Duration::ZERO,
    };

    info!("swipe left twice");
    session.swipe(600.0, 400.0);
    session.swipe(600.0, 400.0);

    info!("jitter below the swipe threshold");
    session.swipe(600.0, 580.0);

    info!("widen the window");
    session.send(SliderEvent::Resize { width: 1280.0 });

    info!("click the second indicator");
    session.send(SliderEvent::Select(1));

    info!("let autoplay run");
    session.run_frames(Duration::from_millis(4500));

    info!("hover for a while");
    session.send(SliderEvent::HoverEnter);
    session.run_frames(Duration::from_secs(5));
    session.send(SliderEvent::HoverLeave);
    session.run_frames(Duration::from_millis(2100));

    session.handle.with_mut(|slider| {
        let state = slider.state();
        info!(
            index = state.current_index,
            page_size = state.page_size,
            offset = state.offset_percent,
            "session finished"
        );
        slider.destroy();
    });
    Ok(())
}
