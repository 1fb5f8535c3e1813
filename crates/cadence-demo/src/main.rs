//! Headless demo: drifts a geographic path under a frame scheduler.
//!
//! Builds a real run loop, schedules a tick action at a fixed rate, and
//! logs the path head plus measured timing until the tick budget runs out.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};

use cadence_engine::logging::{LoggingConfig, init_logging};
use cadence_engine::path::{GeoPoint, MoveDirection, PathDrift};
use cadence_engine::queue::RunLoop;
use cadence_engine::sched::FrameScheduler;
use cadence_engine::time::{FrameClock, RateMeter};

/// Demo run settings.
#[derive(Debug, Clone)]
struct DemoConfig {
    frame_rate_fps: f64,
    ticks: u32,
    step_deg: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frame_rate_fps: 30.0,
            ticks: 90,
            step_deg: 0.005,
        }
    }
}

struct DemoState {
    drift: PathDrift,
    clock: FrameClock,
    meter: RateMeter,
    ticks_left: u32,
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());
    let config = DemoConfig::default();

    // A short route through central Sydney; any path works.
    let route = vec![
        GeoPoint::new(-33.8735, 151.2005),
        GeoPoint::new(-33.8715, 151.2060),
        GeoPoint::new(-33.8683, 151.2086),
    ];

    let mut drift = PathDrift::new(route, config.step_deg);
    drift.set_direction(Some(MoveDirection::Right));

    let state = Rc::new(RefCell::new(DemoState {
        drift,
        clock: FrameClock::new(),
        meter: RateMeter::new(Duration::from_secs(1)),
        ticks_left: config.ticks,
    }));

    let run_loop = RunLoop::new();
    let loop_handle = run_loop.clone();
    let tick_state = state.clone();

    let scheduler = FrameScheduler::new(run_loop.clone(), move || {
        let mut state = tick_state.borrow_mut();

        let sample = state.clock.sample();
        let path = state.drift.step();
        if let Some(head) = path.first() {
            log::info!(
                "tick {:>3}  dt {:5.1} ms  head ({:.4}, {:.4})",
                sample.frame_index,
                sample.dt_sec * 1000.0,
                head.lat,
                head.lng,
            );
        }

        if let Some(fps) = state.meter.tick() {
            log::info!("achieved {fps:.1} fps");
        }

        state.ticks_left -= 1;
        if state.ticks_left == 0 {
            loop_handle.request_exit();
        }
    });

    scheduler.set_frame_rate_fps(config.frame_rate_fps);
    scheduler.start();

    log::info!(
        "drifting {} ticks at {} fps",
        config.ticks,
        config.frame_rate_fps
    );
    run_loop.run().context("run loop failed")?;
    scheduler.stop();

    let (lat, lng) = state.borrow().drift.offset();
    log::info!("final offset: ({lat:.4}, {lng:.4}) deg");
    Ok(())
}
