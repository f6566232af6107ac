//! Step-by-step playback over a solver [`Trace`].
//!
//! A [`Playback`] exists only while the overlay is open: constructing one
//! enters the paused state at the first step, and dropping it releases the
//! trace, the cursor and the autoplay timer together. The timer is a single
//! deadline evaluated by [`Playback::tick`], so there is never more than one
//! and nothing can fire after the value is gone.

use std::time::{Duration, Instant};

use crate::{Step, Trace};

/// Autoplay speed as a raw slider value.
///
/// Higher values are faster: the interval is `2100 - value` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Speed(u16);

impl Speed {
    /// Slowest slider value (2000 ms).
    pub const MIN: u16 = 100;
    /// Fastest slider value (100 ms).
    pub const MAX: u16 = 2000;
    /// Initial slider value (500 ms).
    pub const DEFAULT: u16 = 1600;

    /// Creates a speed, clamping `value` into `MIN..=MAX`.
    #[must_use]
    pub fn new(value: u16) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// The raw slider value.
    #[must_use]
    pub fn value(self) -> u16 {
        self.0
    }

    /// Time between autoplay advances.
    #[must_use]
    pub fn interval(self) -> Duration {
        Duration::from_millis(u64::from(2100 - self.0))
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Whether the autoplay timer is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlaybackState {
    /// The cursor only moves on manual navigation.
    Paused,
    /// The cursor advances once per interval.
    Autoplaying,
}

/// Cursor over a trace with manual and timed advancement.
#[derive(Debug, Clone)]
pub struct Playback {
    trace: Trace,
    cursor: usize,
    speed: Speed,
    next_tick: Option<Instant>,
}

impl Playback {
    /// Starts paused at the first step.
    #[must_use]
    pub fn new(trace: Trace) -> Self {
        Self {
            trace,
            cursor: 0,
            speed: Speed::default(),
            next_tick: None,
        }
    }

    /// Index of the displayed step.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The trace being played.
    #[must_use]
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The step under the cursor.
    #[must_use]
    pub fn current_step(&self) -> &Step {
        &self.trace.steps()[self.cursor]
    }

    /// Whether autoplay is running.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        if self.next_tick.is_some() {
            PlaybackState::Autoplaying
        } else {
            PlaybackState::Paused
        }
    }

    /// The current autoplay speed.
    #[must_use]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Stops autoplay and steps back. Returns `false` at the first step.
    pub fn previous_step(&mut self) -> bool {
        self.stop_autoplay();
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Stops autoplay and steps forward. Returns `false` at the last step.
    pub fn next_step(&mut self) -> bool {
        self.stop_autoplay();
        if self.cursor >= self.trace.last_index() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Starts autoplay if paused, stops it otherwise. Returns the new state.
    pub fn toggle_autoplay(&mut self, now: Instant) -> PlaybackState {
        match self.state() {
            PlaybackState::Paused => self.start_autoplay(now),
            PlaybackState::Autoplaying => self.stop_autoplay(),
        }
        self.state()
    }

    /// Arms the timer for one interval from `now`.
    ///
    /// At the last step there is nothing to advance to, so the playback stays
    /// paused.
    pub fn start_autoplay(&mut self, now: Instant) {
        if self.cursor >= self.trace.last_index() {
            self.next_tick = None;
            return;
        }
        self.next_tick = Some(now + self.speed.interval());
    }

    /// Cancels the timer. The cursor stays where it is.
    pub fn stop_autoplay(&mut self) {
        self.next_tick = None;
    }

    /// Changes the speed. A running timer restarts at the new interval; the
    /// cursor is kept.
    pub fn set_speed(&mut self, value: u16, now: Instant) {
        self.speed = Speed::new(value);
        if self.next_tick.is_some() {
            self.next_tick = Some(now + self.speed.interval());
        }
    }

    /// Advances for every interval that elapsed up to `now`.
    ///
    /// Returns `true` if the cursor moved. Reaching the last step stops the
    /// timer.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut advanced = false;
        while let Some(at) = self.next_tick {
            if at > now {
                break;
            }
            self.cursor += 1;
            advanced = true;
            self.next_tick = if self.cursor >= self.trace.last_index() {
                None
            } else {
                Some(at + self.speed.interval())
            };
        }
        advanced
    }

    /// When the autoplay timer fires next, if running.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_tick
    }
}

#[cfg(test)]
mod tests {
    use crate::{Board, Position, StepAction};

    use super::*;

    fn trace(len: usize) -> Trace {
        let steps = (0..len)
            .map(|i| Step {
                board: Board::new(),
                action: if i % 2 == 0 {
                    StepAction::Place
                } else {
                    StepAction::Remove
                },
                position: Position::ALL[i % 81],
                value: None,
            })
            .collect();
        Trace::new(steps).unwrap()
    }

    #[test]
    fn speed_maps_slider_to_inverted_interval() {
        assert_eq!(Speed::default().interval(), Duration::from_millis(500));
        assert_eq!(Speed::new(100).interval(), Duration::from_millis(2000));
        assert_eq!(Speed::new(2000).interval(), Duration::from_millis(100));
        assert_eq!(Speed::new(5).value(), Speed::MIN);
        assert_eq!(Speed::new(9999).value(), Speed::MAX);
    }

    #[test]
    fn manual_navigation_is_clamped() {
        let mut playback = Playback::new(trace(3));
        assert_eq!(playback.cursor(), 0);
        assert!(!playback.previous_step());
        assert_eq!(playback.cursor(), 0);

        assert!(playback.next_step());
        assert!(playback.next_step());
        assert!(!playback.next_step());
        assert_eq!(playback.cursor(), 2);
    }

    #[test]
    fn manual_navigation_stops_autoplay() {
        let now = Instant::now();
        let mut playback = Playback::new(trace(5));
        playback.start_autoplay(now);
        assert!(playback.state().is_autoplaying());

        playback.next_step();
        assert!(playback.state().is_paused());
        assert_eq!(playback.cursor(), 1);
        assert_eq!(playback.next_deadline(), None);
    }

    #[test]
    fn autoplay_at_last_step_stops_immediately() {
        let now = Instant::now();
        let mut playback = Playback::new(trace(2));
        playback.next_step();

        assert_eq!(playback.toggle_autoplay(now), PlaybackState::Paused);
        assert!(!playback.tick(now + Duration::from_secs(10)));
        assert_eq!(playback.cursor(), 1);
    }

    #[test]
    fn two_step_trace_advances_once_and_stops() {
        let now = Instant::now();
        let mut playback = Playback::new(trace(2));
        let interval = playback.speed().interval();

        assert_eq!(playback.toggle_autoplay(now), PlaybackState::Autoplaying);
        assert!(!playback.tick(now + interval - Duration::from_millis(1)));
        assert_eq!(playback.cursor(), 0);

        assert!(playback.tick(now + interval));
        assert_eq!(playback.cursor(), 1);
        assert!(playback.state().is_paused());

        assert!(!playback.tick(now + interval * 5));
        assert_eq!(playback.cursor(), 1);
        assert_eq!(playback.current_step().action, StepAction::Remove);
    }

    #[test]
    fn late_tick_catches_up_without_overshooting() {
        let now = Instant::now();
        let mut playback = Playback::new(trace(4));
        let interval = playback.speed().interval();
        playback.start_autoplay(now);

        assert!(playback.tick(now + interval * 2));
        assert_eq!(playback.cursor(), 2);
        assert!(playback.state().is_autoplaying());

        assert!(playback.tick(now + interval * 100));
        assert_eq!(playback.cursor(), 3);
        assert!(playback.state().is_paused());
    }

    #[test]
    fn speed_change_restarts_timer_and_keeps_cursor() {
        let now = Instant::now();
        let mut playback = Playback::new(trace(10));
        playback.start_autoplay(now);
        playback.tick(now + Duration::from_millis(500));
        assert_eq!(playback.cursor(), 1);

        let later = now + Duration::from_millis(700);
        playback.set_speed(2000, later);
        assert_eq!(playback.cursor(), 1);
        assert_eq!(
            playback.next_deadline(),
            Some(later + Duration::from_millis(100))
        );
    }

    #[test]
    fn speed_change_while_paused_does_not_start_timer() {
        let now = Instant::now();
        let mut playback = Playback::new(trace(10));
        playback.set_speed(100, now);
        assert!(playback.state().is_paused());
        assert_eq!(playback.speed().value(), 100);
    }
}
