use std::time::{Duration, Instant};

use crate::config::{
    BASE_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, POINTS_PER_SPEED_UP, TICK_INTERVAL_STEP_MS,
};

/// Returns true once `elapsed` has reached the tick interval.
#[must_use]
pub fn should_tick(elapsed: Duration, interval_ms: u64) -> bool {
    elapsed >= Duration::from_millis(interval_ms)
}

/// Returns the interval to use after reaching `score`.
///
/// Shortens the interval by one step when `score` is a positive multiple of
/// [`POINTS_PER_SPEED_UP`], never below [`MIN_TICK_INTERVAL_MS`]. Callers must
/// invoke this once per multiple; see [`SpeedRamp`].
#[must_use]
pub fn next_interval(current_ms: u64, score: u32) -> u64 {
    if score == 0 || score % POINTS_PER_SPEED_UP != 0 {
        return current_ms;
    }

    current_ms
        .saturating_sub(TICK_INTERVAL_STEP_MS)
        .max(MIN_TICK_INTERVAL_MS)
}

/// Ratchets the tick interval down as the score crosses multiples of five.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SpeedRamp {
    interval_ms: u64,
    last_multiple: u32,
}

impl SpeedRamp {
    #[must_use]
    pub fn new() -> Self {
        Self {
            interval_ms: BASE_TICK_INTERVAL_MS,
            last_multiple: 0,
        }
    }

    /// Feeds the current score and returns the resulting interval.
    ///
    /// Each multiple of five speeds the game up exactly once, no matter how
    /// many ticks the score stays on it.
    pub fn observe_score(&mut self, score: u32) -> u64 {
        let multiple = score / POINTS_PER_SPEED_UP;
        while self.last_multiple < multiple {
            self.last_multiple += 1;
            self.interval_ms =
                next_interval(self.interval_ms, self.last_multiple * POINTS_PER_SPEED_UP);
        }
        self.interval_ms
    }

    #[must_use]
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

impl Default for SpeedRamp {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed-step scheduler converting wall-clock time into simulation ticks.
#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    last_tick: Instant,
    ramp: SpeedRamp,
}

impl GameClock {
    /// Starts the clock with the first tick due one base interval from `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            last_tick: now,
            ramp: SpeedRamp::new(),
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.ramp.interval_ms())
    }

    #[must_use]
    pub fn is_tick_due(&self, now: Instant) -> bool {
        should_tick(
            now.saturating_duration_since(self.last_tick),
            self.ramp.interval_ms(),
        )
    }

    /// Returns how long the driver may block before the next tick is due.
    #[must_use]
    pub fn time_until_tick(&self, now: Instant) -> Duration {
        self.interval()
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Records a completed tick and applies the speed ramp for `score`.
    pub fn mark_ticked(&mut self, now: Instant, score: u32) {
        self.last_tick = now;
        self.ramp.observe_score(score);
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::{next_interval, should_tick, GameClock, SpeedRamp};

    #[test]
    fn tick_fires_once_interval_elapsed() {
        assert!(!should_tick(Duration::from_millis(149), 150));
        assert!(should_tick(Duration::from_millis(150), 150));
        assert!(should_tick(Duration::from_millis(400), 150));
    }

    #[test]
    fn next_interval_only_steps_on_multiples_of_five() {
        assert_eq!(next_interval(150, 0), 150);
        assert_eq!(next_interval(150, 4), 150);
        assert_eq!(next_interval(150, 5), 145);
        assert_eq!(next_interval(150, 10), 145);
    }

    #[test]
    fn next_interval_is_clamped_to_floor() {
        assert_eq!(next_interval(92, 5), 90);
        assert_eq!(next_interval(90, 5), 90);
    }

    #[test]
    fn ramp_steps_once_per_multiple() {
        let mut ramp = SpeedRamp::new();

        assert_eq!(ramp.observe_score(4), 150);
        assert_eq!(ramp.observe_score(5), 145);
        // Score sits on 5 for several ticks.
        assert_eq!(ramp.observe_score(5), 145);
        assert_eq!(ramp.observe_score(5), 145);
        assert_eq!(ramp.observe_score(9), 145);
        assert_eq!(ramp.observe_score(10), 140);
        assert_eq!(ramp.observe_score(10), 140);
    }

    #[test]
    fn ramp_never_drops_below_floor() {
        let mut ramp = SpeedRamp::new();

        for score in 0..=500 {
            ramp.observe_score(score);
        }

        assert_eq!(ramp.interval_ms(), 90);
    }

    #[test]
    fn clock_reports_remaining_wait() {
        let start = Instant::now();
        let clock = GameClock::new(start);

        assert!(!clock.is_tick_due(start + Duration::from_millis(100)));
        assert_eq!(
            clock.time_until_tick(start + Duration::from_millis(100)),
            Duration::from_millis(50)
        );
        assert!(clock.is_tick_due(start + Duration::from_millis(150)));
        assert_eq!(
            clock.time_until_tick(start + Duration::from_millis(200)),
            Duration::ZERO
        );
    }

    #[test]
    fn clock_speeds_up_after_marking_tick_at_five() {
        let start = Instant::now();
        let mut clock = GameClock::new(start);
        let tick = start + Duration::from_millis(150);

        clock.mark_ticked(tick, 5);

        assert_eq!(clock.interval(), Duration::from_millis(145));
        assert!(clock.is_tick_due(tick + Duration::from_millis(145)));
    }
}
