use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::queue::{EventQueue, TickToken};

/// Target rate for a newly built scheduler.
pub const DEFAULT_FRAME_RATE_FPS: f64 = 60.0;

/// Drives a repeating tick action at an approximate target rate.
///
/// Each tick is a single-shot timer posted to the owning queue; when it
/// fires, the action runs synchronously and the next timer is posted. The
/// effective period therefore drifts by the action's own execution time —
/// acceptable for animation, where the action should scale movement by
/// measured delta time (see [`FrameClock`](crate::time::FrameClock)).
///
/// A non-positive rate is a pause state: the chain stops posting but the
/// scheduler stays logically running. Raising the rate afterwards does not
/// revive the chain; cycle `stop`/`start` to resume.
///
/// All methods must be invoked on the thread that owns the queue. The
/// scheduler holds only state cells and provides no locking.
pub struct FrameScheduler {
    core: Rc<Core>,
}

struct Core {
    queue: Box<dyn EventQueue>,
    action: RefCell<Box<dyn FnMut()>>,
    running: Cell<bool>,
    frame_rate_fps: Cell<f64>,
    pending: Cell<Option<TickToken>>,
}

impl FrameScheduler {
    /// Builds a stopped scheduler at [`DEFAULT_FRAME_RATE_FPS`].
    ///
    /// The action is held for the scheduler's entire lifetime and invoked
    /// once per tick.
    pub fn new(queue: impl EventQueue + 'static, action: impl FnMut() + 'static) -> Self {
        Self {
            core: Rc::new(Core {
                queue: Box::new(queue),
                action: RefCell::new(Box::new(action)),
                running: Cell::new(false),
                frame_rate_fps: Cell::new(DEFAULT_FRAME_RATE_FPS),
                pending: Cell::new(None),
            }),
        }
    }

    pub fn is_running(&self) -> bool {
        self.core.running.get()
    }

    pub fn frame_rate_fps(&self) -> f64 {
        self.core.frame_rate_fps.get()
    }

    /// Updates the target rate for subsequent scheduling decisions.
    ///
    /// An already-pending tick keeps its computed delay; the new rate takes
    /// effect from the tick after it.
    pub fn set_frame_rate_fps(&self, rate: f64) {
        self.core.frame_rate_fps.set(rate);
    }

    /// Starts the tick chain. No-op if already running.
    pub fn start(&self) {
        if self.core.running.get() {
            return;
        }
        self.core.running.set(true);
        self.core.request_tick();
    }

    /// Cancels the pending tick, if any, and stops. No-op if not running.
    pub fn stop(&self) {
        if !self.core.running.get() {
            return;
        }
        if let Some(token) = self.core.pending.take() {
            self.core.queue.cancel(token);
        }
        self.core.running.set(false);
    }
}

impl Core {
    // Posts the next single-shot tick, keeping at most one pending token.
    // A non-positive rate suspends the chain without touching `running`.
    //
    // Delays are whole milliseconds with a minimum of one: a zero delay
    // would busy-spin the chain, and on a simulated clock a zero-delay
    // repost lands inside the same instant forever. Rates above 1000 fps
    // are therefore capped by the timer resolution.
    fn request_tick(self: &Rc<Self>) {
        let rate = self.frame_rate_fps.get();
        if rate <= 0.0 {
            return;
        }

        let delay = Duration::from_millis(((1000.0 / rate).floor() as u64).max(1));
        let weak = Rc::downgrade(self);
        let token = self.queue.post_delayed(
            delay,
            Box::new(move || {
                // A dropped scheduler leaves its last posted tick behind in
                // the queue; the weak upgrade turns it into a no-op.
                if let Some(core) = weak.upgrade() {
                    core.fire();
                }
            }),
        );
        self.pending.set(Some(token));
    }

    fn fire(self: &Rc<Self>) {
        self.pending.set(None);
        if !self.running.get() {
            // Stopped between posting and firing.
            return;
        }

        (&mut *self.action.borrow_mut())();

        // The action may have stopped the scheduler; re-check before
        // chaining so a stop never leaves a live tick behind.
        if self.running.get() {
            self.request_tick();
        }
    }
}
