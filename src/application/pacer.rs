use std::time::{Duration, Instant};

/// Wait point between ticks
pub trait Pacer {
    /// Block until the current tick has taken `1 / tick_rate` seconds
    fn wait(&mut self, tick_rate: u32);
}

/// Frame limiter: sleeps away whatever is left of the tick budget since the
/// previous call. Never sleeps when the tick already overran.
pub struct TickPacer {
    last_tick: Instant,
}

impl TickPacer {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Time remaining in the current tick, given how long it has run
    pub fn remaining(elapsed: Duration, tick_rate: u32) -> Duration {
        let budget = Duration::from_secs(1) / tick_rate.max(1);
        budget.saturating_sub(elapsed)
    }
}

impl Default for TickPacer {
    fn default() -> Self {
        Self::new()
    }
}

impl Pacer for TickPacer {
    fn wait(&mut self, tick_rate: u32) {
        let remaining = Self::remaining(self.last_tick.elapsed(), tick_rate);
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
    }
}

/// Non-blocking pacing for frame loops that already wait on vsync.
///
/// Frame times accumulate until one tick interval has passed.
#[derive(Debug, Default)]
pub struct FrameTimer {
    update_timer: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta_time` seconds and report whether a tick is due
    pub fn due(&mut self, delta_time: f32, tick_rate: u32) -> bool {
        self.update_timer += delta_time;
        let update_interval = 1.0 / tick_rate.max(1) as f32;
        if self.update_timer >= update_interval {
            self.update_timer = 0.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_timer_fires_once_per_interval() {
        let mut timer = FrameTimer::new();
        // 60 fps frames against 20 ticks/s: every third frame
        let fired: Vec<bool> = (0..6).map(|_| timer.due(1.0 / 60.0 + 1e-4, 20)).collect();
        assert_eq!(fired, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_frame_timer_long_frame_fires_immediately() {
        let mut timer = FrameTimer::new();
        assert!(timer.due(0.5, 10));
        assert!(!timer.due(0.01, 10));
    }

    #[test]
    fn test_remaining_budget() {
        let rem = TickPacer::remaining(Duration::from_millis(40), 10);
        assert_eq!(rem, Duration::from_millis(60));
    }

    #[test]
    fn test_overrun_does_not_sleep() {
        assert!(TickPacer::remaining(Duration::from_millis(500), 10).is_zero());
    }

    #[test]
    fn test_zero_rate_treated_as_one() {
        assert_eq!(TickPacer::remaining(Duration::ZERO, 0), Duration::from_secs(1));
    }
}
