use std::time::{Duration, Instant};

/// Timing snapshot taken at one tick.
#[derive(Debug, Copy, Clone)]
pub struct FrameSample {
    /// Seconds elapsed since the previous sample (clamped).
    pub dt_sec: f64,

    /// Monotonic tick counter, starting at zero.
    pub frame_index: u64,
}

/// Measures wall-clock delta time across ticks.
///
/// The first sample (and the first one after [`rebase`](Self::rebase))
/// reports a zero delta. Subsequent deltas are clamped to a maximum so a
/// stall — debugger pause, suspended process, minimized window — does not
/// teleport the animation on the next tick.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_index: u64,
    max_dt: Duration,
}

impl FrameClock {
    pub const DEFAULT_MAX_DT: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_max_dt(Self::DEFAULT_MAX_DT)
    }

    /// Creates a clock with a custom stall clamp.
    pub fn with_max_dt(max_dt: Duration) -> Self {
        Self {
            last: None,
            frame_index: 0,
            max_dt,
        }
    }

    /// Forgets the previous tick; the next sample reports a zero delta.
    ///
    /// Call when resuming a paused animation, so the pause does not show up
    /// as one giant (clamped) delta.
    pub fn rebase(&mut self) {
        self.last = None;
    }

    /// Takes a sample at the current instant.
    pub fn sample(&mut self) -> FrameSample {
        self.sample_at(Instant::now())
    }

    fn sample_at(&mut self, now: Instant) -> FrameSample {
        let dt = match self.last {
            None => Duration::ZERO,
            Some(last) => now.saturating_duration_since(last).min(self.max_dt),
        };
        self.last = Some(now);

        let sample = FrameSample {
            dt_sec: dt.as_secs_f64(),
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        sample
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn first_sample_has_zero_delta() {
        let mut clock = FrameClock::new();
        let sample = clock.sample_at(Instant::now());
        assert_eq!(sample.dt_sec, 0.0);
        assert_eq!(sample.frame_index, 0);
    }

    #[test]
    fn delta_tracks_elapsed_time() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();

        clock.sample_at(t0);
        let sample = clock.sample_at(t0 + ms(16));
        assert!((sample.dt_sec - 0.016).abs() < 1e-9);
        assert_eq!(sample.frame_index, 1);
    }

    #[test]
    fn delta_is_clamped_after_a_stall() {
        let mut clock = FrameClock::with_max_dt(ms(100));
        let t0 = Instant::now();

        clock.sample_at(t0);
        let sample = clock.sample_at(t0 + Duration::from_secs(30));
        assert!((sample.dt_sec - 0.1).abs() < 1e-9);
    }

    #[test]
    fn rebase_suppresses_the_gap() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();

        clock.sample_at(t0);
        clock.rebase();
        let sample = clock.sample_at(t0 + Duration::from_secs(5));
        assert_eq!(sample.dt_sec, 0.0);
        // The counter keeps running across a rebase.
        assert_eq!(sample.frame_index, 1);
    }

    #[test]
    fn out_of_order_instants_saturate_to_zero() {
        let mut clock = FrameClock::new();
        let t0 = Instant::now();

        clock.sample_at(t0 + ms(10));
        let sample = clock.sample_at(t0);
        assert_eq!(sample.dt_sec, 0.0);
    }
}
