use std::time::Duration;

use flexslider::{
    Breakpoints, ContainerStyle, IndicatorPanel, Instant, RenderTarget, Slider, SliderArgs,
    SliderAxis, SliderEvent,
};
use glam::Vec2;

#[derive(Default)]
struct RecordingTrack {
    style: Option<ContainerStyle>,
    transforms: Vec<String>,
}

impl RenderTarget for RecordingTrack {
    fn apply_container_style(&mut self, style: &ContainerStyle) {
        self.style = Some(style.clone());
    }

    fn apply_offset(&mut self, offset_percent: f32, axis: SliderAxis) {
        self.transforms.push(axis.translate(offset_percent));
    }
}

#[derive(Default)]
struct Dots {
    count: usize,
    active: Option<usize>,
    updates: usize,
}

impl IndicatorPanel for Dots {
    fn build(&mut self, count: usize) {
        self.count = count;
    }

    fn set_active(&mut self, index: usize) {
        self.active = Some(index);
        self.updates += 1;
    }
}

fn paginated(args: SliderArgs, width: f32, now: Instant) -> Slider<RecordingTrack, Dots> {
    Slider::new(
        args.pagination(true),
        &width,
        RecordingTrack::default(),
        Dots::default(),
        now,
    )
    .expect("valid args")
}

fn swipe(slider: &mut Slider<RecordingTrack, Dots>, from: f32, to: f32, now: Instant) {
    slider.handle_event(SliderEvent::GestureStart(Vec2::new(from, 10.0)), now);
    slider.handle_event(SliderEvent::GestureMove(Vec2::new(to, 12.0)), now);
    slider.handle_event(SliderEvent::GestureEnd, now);
}

#[test]
fn indicators_follow_every_move() {
    let now = Instant::now();
    let mut slider = paginated(SliderArgs::default().slide_count(5), 400.0, now);
    assert_eq!(slider.indicators().count, 5);
    assert_eq!(slider.indicators().active, Some(0));

    slider.next();
    slider.next();
    assert_eq!(slider.indicators().active, Some(2));

    slider.handle_event(SliderEvent::Select(4), now);
    assert_eq!(slider.indicators().active, Some(4));
    assert_eq!(
        slider.render_target().transforms.last().map(String::as_str),
        Some("translateX(-400%)")
    );
}

#[test]
fn container_style_is_applied_once() {
    let now = Instant::now();
    let slider = paginated(
        SliderArgs::default()
            .slide_count(3)
            .looping(true)
            .axis(SliderAxis::Vertical),
        400.0,
        now,
    );
    let style = slider.render_target().style.clone().expect("style applied");
    assert_eq!(style.axis, SliderAxis::Vertical);
    assert!(style.looping);
    assert_eq!(style.transition_effect, "fade");
    assert_eq!(style.transition_css(), "transform 0.5s ease");
    assert_eq!(
        slider.render_target().transforms,
        vec!["translateY(0%)".to_string()]
    );
}

#[test]
fn resize_reflows_and_clamps() {
    let now = Instant::now();
    let breakpoints = Breakpoints::new().with(768.0, 2).with(1024.0, 3);
    let mut slider = paginated(
        SliderArgs::default().slide_count(5).breakpoints(breakpoints),
        500.0,
        now,
    );
    slider.handle_event(SliderEvent::Select(4), now);
    assert_eq!(slider.active_index(), 4);

    slider.handle_event(SliderEvent::Resize { width: 800.0 }, now);
    assert_eq!(slider.page_size(), 2);
    assert_eq!(slider.active_index(), 3);
    assert!((slider.offset_percent() + 150.0).abs() < 1e-4);

    slider.handle_event(SliderEvent::Resize { width: 1280.0 }, now);
    assert_eq!(slider.page_size(), 3);
    assert_eq!(slider.active_index(), 2);
    assert_eq!(slider.indicators().active, Some(2));
}

#[test]
fn swipes_walk_through_slides_and_stop_at_ends() {
    let now = Instant::now();
    let mut slider = paginated(SliderArgs::default().slide_count(3), 400.0, now);
    for _ in 0..5 {
        swipe(&mut slider, 300.0, 100.0, now);
    }
    assert_eq!(slider.active_index(), 2);

    for _ in 0..5 {
        swipe(&mut slider, 100.0, 300.0, now);
    }
    assert_eq!(slider.active_index(), 0);

    swipe(&mut slider, 100.0, 130.0, now);
    assert_eq!(slider.active_index(), 0);
}

#[test]
fn looping_swipes_wrap() {
    let now = Instant::now();
    let mut slider = paginated(
        SliderArgs::default().slide_count(4).looping(true),
        400.0,
        now,
    );
    swipe(&mut slider, 100.0, 300.0, now);
    assert_eq!(slider.active_index(), 3);
    swipe(&mut slider, 300.0, 100.0, now);
    assert_eq!(slider.active_index(), 0);
}

#[test]
fn autoplay_races_with_user_input() {
    let start = Instant::now();
    let delay = Duration::from_millis(3000);
    let mut slider = paginated(
        SliderArgs::default()
            .slide_count(6)
            .autoplay(true)
            .looping(true),
        400.0,
        start,
    );

    let mut now = start;
    let mut advanced = 0;
    for frame in 0..600u32 {
        now = start + Duration::from_millis(16) * frame;
        match frame {
            100 => slider.handle_event(SliderEvent::Select(5), now),
            200 => slider.handle_event(SliderEvent::HoverEnter, now),
            400 => slider.handle_event(SliderEvent::HoverLeave, now),
            _ => {}
        }
        if slider.tick(now) {
            advanced += 1;
        }
        let state = slider.state();
        assert!(state.current_index <= 6 - state.page_size);
    }

    // Ticks at 3.0s before the hover, and at 6.4s + 3s after it.
    assert_eq!(advanced, 2);
    assert_eq!(slider.next_autoplay_deadline().map(|d| d > now), Some(true));
}

#[test]
fn destroyed_slider_stops_reacting() {
    let now = Instant::now();
    let mut slider = paginated(SliderArgs::default().slide_count(4).autoplay(true), 400.0, now);
    let updates = slider.indicators().updates;
    slider.destroy();
    swipe(&mut slider, 300.0, 100.0, now);
    slider.handle_event(SliderEvent::Tick, now + Duration::from_secs(30));
    assert_eq!(slider.active_index(), 0);
    assert_eq!(slider.indicators().updates, updates);
}

#[test]
fn navigation_calls_after_destroy_are_ignored() {
    let now = Instant::now();
    let breakpoints = Breakpoints::new().with(1024.0, 2);
    let mut slider = paginated(
        SliderArgs::default().slide_count(5).breakpoints(breakpoints),
        400.0,
        now,
    );
    let renders = slider.render_target().transforms.len();
    let updates = slider.indicators().updates;
    slider.destroy();

    slider.next();
    slider.goto_index(3);
    slider.prev();
    slider.set_viewport_width(2000.0);

    assert_eq!(slider.active_index(), 0);
    assert_eq!(slider.page_size(), 1);
    assert_eq!(slider.render_target().transforms.len(), renders);
    assert_eq!(slider.indicators().updates, updates);
}

#[test]
fn empty_slider_never_activates_an_indicator() {
    let now = Instant::now();
    let mut slider = paginated(SliderArgs::default().slide_count(0).looping(true), 400.0, now);
    slider.next();
    slider.prev();
    slider.handle_event(SliderEvent::Select(2), now);
    slider.handle_event(SliderEvent::Resize { width: 900.0 }, now);

    assert_eq!(slider.indicators().count, 0);
    assert_eq!(slider.indicators().active, None);
    assert_eq!(slider.indicators().updates, 0);
    assert_eq!(slider.render_target().transforms.len(), 5);
}
