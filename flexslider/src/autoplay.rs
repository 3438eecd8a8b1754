//! Autoplay timer.
//!
//! The scheduler does not own a thread or an OS timer. It keeps at most one
//! armed deadline and is polled from the host's frame clock, the same way
//! the pager is ticked with `Instant::now()` every frame. Arming always
//! replaces the previous deadline, so two live timers cannot exist.

use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::Instant;

/// Observable autoplay state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayState {
    /// Never started, or torn down.
    Stopped,
    /// A tick is armed.
    Running,
    /// Suspended; [`AutoplayScheduler::resume`] re-arms it.
    Paused,
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Stopped,
    /// `None` when the delay cannot be represented past `now`; never fires.
    Running { deadline: Option<Instant> },
    Paused,
}

/// Recurring tick source that drives automatic advancing.
#[derive(Clone, Debug)]
pub struct AutoplayScheduler {
    delay: Duration,
    phase: Phase,
}

impl AutoplayScheduler {
    /// Creates a stopped scheduler ticking every `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: Phase::Stopped,
        }
    }

    /// Arms the recurring tick, replacing any armed one.
    pub fn start(&mut self, now: Instant) {
        debug!(delay = ?self.delay, "Autoplay started");
        self.arm(now);
    }

    /// Cancels the pending tick. Does nothing unless running.
    pub fn pause(&mut self) {
        if let Phase::Running { .. } = self.phase {
            debug!("Autoplay paused");
            self.phase = Phase::Paused;
        }
    }

    /// Re-arms a paused scheduler with a fresh interval.
    ///
    /// Time spent paused is not credited. Does nothing unless paused.
    pub fn resume(&mut self, now: Instant) {
        if let Phase::Paused = self.phase {
            debug!("Autoplay resumed");
            self.arm(now);
        }
    }

    /// Cancels everything; only [`start`](Self::start) leaves this state.
    pub fn stop(&mut self) {
        if !matches!(self.phase, Phase::Stopped) {
            debug!("Autoplay stopped");
        }
        self.phase = Phase::Stopped;
    }

    /// Returns `true` when the armed tick is due and re-arms it.
    ///
    /// A late poll fires a single tick; missed intervals are not replayed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Phase::Running {
            deadline: Some(deadline),
        } = self.phase
        else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let next = match deadline.checked_add(self.delay) {
            Some(next) if next > now => Some(next),
            _ => now.checked_add(self.delay),
        };
        self.phase = Phase::Running { deadline: next };
        trace!("Autoplay tick");
        true
    }

    /// Current state.
    pub fn state(&self) -> AutoplayState {
        match self.phase {
            Phase::Stopped => AutoplayState::Stopped,
            Phase::Running { .. } => AutoplayState::Running,
            Phase::Paused => AutoplayState::Paused,
        }
    }

    /// Deadline of the armed tick, for hosts that schedule wakeups.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Running { deadline } => deadline,
            _ => None,
        }
    }

    /// Interval between ticks.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn arm(&mut self, now: Instant) {
        let deadline = now.checked_add(self.delay);
        if deadline.is_none() {
            warn!(delay = ?self.delay, "Autoplay delay out of range; ticks disabled");
        }
        self.phase = Phase::Running { deadline };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(3000);

    fn ticks_between(scheduler: &mut AutoplayScheduler, from: Instant, steps: u64) -> usize {
        (1..=steps)
            .filter(|step| scheduler.poll(from + Duration::from_millis(100 * step)))
            .count()
    }

    #[test]
    fn stopped_scheduler_never_ticks() {
        let now = Instant::now();
        let mut scheduler = AutoplayScheduler::new(DELAY);
        assert_eq!(scheduler.state(), AutoplayState::Stopped);
        assert!(!scheduler.poll(now + DELAY * 4));
    }

    #[test]
    fn ticks_once_per_interval() {
        let now = Instant::now();
        let mut scheduler = AutoplayScheduler::new(DELAY);
        scheduler.start(now);
        assert!(!scheduler.poll(now + Duration::from_millis(2999)));
        assert!(scheduler.poll(now + DELAY));
        assert!(!scheduler.poll(now + DELAY));
        assert!(scheduler.poll(now + DELAY * 2));
    }

    #[test]
    fn double_start_keeps_a_single_timer() {
        let now = Instant::now();
        let mut scheduler = AutoplayScheduler::new(DELAY);
        scheduler.start(now);
        scheduler.start(now);
        // 9 seconds of polling at 100ms granularity: three ticks, not six.
        assert_eq!(ticks_between(&mut scheduler, now, 90), 3);
    }

    #[test]
    fn restart_rearms_from_new_origin() {
        let now = Instant::now();
        let mut scheduler = AutoplayScheduler::new(DELAY);
        scheduler.start(now);
        let later = now + Duration::from_millis(2000);
        scheduler.start(later);
        assert!(!scheduler.poll(now + DELAY));
        assert_eq!(scheduler.next_deadline(), Some(later + DELAY));
    }

    #[test]
    fn pause_and_resume_are_idempotent() {
        let now = Instant::now();
        let mut scheduler = AutoplayScheduler::new(DELAY);
        scheduler.pause();
        assert_eq!(scheduler.state(), AutoplayState::Stopped);

        scheduler.start(now);
        scheduler.pause();
        scheduler.pause();
        assert_eq!(scheduler.state(), AutoplayState::Paused);
        assert!(!scheduler.poll(now + DELAY * 3));

        let resumed = now + Duration::from_millis(5000);
        scheduler.resume(resumed);
        scheduler.resume(resumed + Duration::from_millis(10));
        assert_eq!(scheduler.next_deadline(), Some(resumed + DELAY));
        assert_eq!(ticks_between(&mut scheduler, resumed, 60), 2);
    }

    #[test]
    fn resume_does_not_start_a_stopped_scheduler() {
        let now = Instant::now();
        let mut scheduler = AutoplayScheduler::new(DELAY);
        scheduler.resume(now);
        assert_eq!(scheduler.state(), AutoplayState::Stopped);
    }

    #[test]
    fn late_poll_fires_once() {
        let now = Instant::now();
        let mut scheduler = AutoplayScheduler::new(DELAY);
        scheduler.start(now);
        let late = now + DELAY * 5;
        assert!(scheduler.poll(late));
        assert!(!scheduler.poll(late));
        assert_eq!(scheduler.next_deadline(), Some(late + DELAY));
    }

    #[test]
    fn huge_delay_never_ticks() {
        let now = Instant::now();
        let mut scheduler = AutoplayScheduler::new(Duration::MAX);
        assert_eq!(scheduler.delay(), Duration::MAX);
        scheduler.start(now);
        assert_eq!(scheduler.state(), AutoplayState::Running);
        assert_eq!(scheduler.next_deadline(), None);
        assert!(!scheduler.poll(now + Duration::from_secs(3600)));
        scheduler.pause();
        scheduler.resume(now);
        assert_eq!(scheduler.state(), AutoplayState::Running);
    }

    #[test]
    fn stop_cancels_everything() {
        let now = Instant::now();
        let mut scheduler = AutoplayScheduler::new(DELAY);
        scheduler.start(now);
        scheduler.stop();
        scheduler.resume(now);
        assert_eq!(scheduler.state(), AutoplayState::Stopped);
        assert_eq!(scheduler.next_deadline(), None);
    }
}
