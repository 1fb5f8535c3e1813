use std::time::{Duration, Instant};

/// Rolling measurement of the achieved tick rate.
///
/// The first tick opens a measurement window without counting itself; once
/// the window spans the reporting period, `tick` returns the measured rate
/// and opens the next window. Between reports it returns `None`.
#[derive(Debug, Clone)]
pub struct RateMeter {
    period: Duration,
    window_start: Option<Instant>,
    frames: u32,
    last_fps: Option<f64>,
}

impl RateMeter {
    /// Minimum reporting period; shorter windows measure mostly noise.
    pub const MIN_PERIOD: Duration = Duration::from_millis(250);

    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Self::MIN_PERIOD),
            window_start: None,
            frames: 0,
            last_fps: None,
        }
    }

    /// Most recent completed measurement, if any.
    pub fn last_fps(&self) -> Option<f64> {
        self.last_fps
    }

    /// Records one tick; returns the measured rate when a window completes.
    pub fn tick(&mut self) -> Option<f64> {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Option<f64> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            self.frames = 0;
            return None;
        };

        self.frames += 1;
        let elapsed = now.saturating_duration_since(start);
        if elapsed < self.period {
            return None;
        }

        let fps = f64::from(self.frames) / elapsed.as_secs_f64().max(1e-4);
        log::debug!("measured rate: {fps:.1} fps over {elapsed:?}");

        self.last_fps = Some(fps);
        self.window_start = Some(now);
        self.frames = 0;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn reports_nothing_before_the_period_elapses() {
        let mut meter = RateMeter::new(Duration::from_secs(1));
        let t0 = Instant::now();

        assert_eq!(meter.tick_at(t0), None);
        assert_eq!(meter.tick_at(t0 + ms(500)), None);
        assert_eq!(meter.last_fps(), None);
    }

    #[test]
    fn measures_a_steady_ten_fps() {
        let mut meter = RateMeter::new(Duration::from_secs(1));
        let t0 = Instant::now();

        let mut report = None;
        for i in 0..=10u64 {
            report = meter.tick_at(t0 + ms(100 * i));
        }

        let fps = report.expect("window should have completed");
        assert!((fps - 10.0).abs() < 0.5, "fps = {fps}");
        assert_eq!(meter.last_fps(), Some(fps));
    }

    #[test]
    fn window_restarts_after_a_report() {
        let mut meter = RateMeter::new(Duration::from_secs(1));
        let t0 = Instant::now();

        for i in 0..=10u64 {
            meter.tick_at(t0 + ms(100 * i));
        }

        // Next window runs at 20 fps.
        let t1 = t0 + ms(1000);
        let mut report = None;
        for i in 1..=20u64 {
            report = meter.tick_at(t1 + ms(50 * i));
        }

        let fps = report.expect("second window should have completed");
        assert!((fps - 20.0).abs() < 0.5, "fps = {fps}");
    }

    #[test]
    fn period_is_clamped_to_the_minimum() {
        let mut meter = RateMeter::new(Duration::ZERO);
        let t0 = Instant::now();

        assert_eq!(meter.tick_at(t0), None);
        // 10 ms later is still inside the clamped 250 ms window.
        assert_eq!(meter.tick_at(t0 + ms(10)), None);
        let fps = meter.tick_at(t0 + ms(250));
        assert!(fps.is_some());
    }
}
