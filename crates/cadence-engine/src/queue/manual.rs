use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::{EventQueue, QueueCallback, TickToken};

/// Deterministic event queue driven by a simulated clock.
///
/// Time starts at zero and only moves when [`advance`](Self::advance) is
/// called. Each due callback observes [`now`](Self::now) equal to its own
/// deadline while it runs, so chained posts land at exact simulated offsets.
///
/// Cloning yields another handle to the same queue.
#[derive(Clone)]
pub struct ManualQueue {
    state: Rc<RefCell<State>>,
}

struct State {
    now: Duration,
    next_token: u64,
    entries: Vec<Entry>,
}

struct Entry {
    due: Duration,
    token: TickToken,
    callback: QueueCallback,
}

impl ManualQueue {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                now: Duration::ZERO,
                next_token: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Current simulated time since queue creation.
    pub fn now(&self) -> Duration {
        self.state.borrow().now
    }

    /// Number of callbacks waiting to fire.
    pub fn pending(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Deadline of the earliest pending callback, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.state.borrow().entries.iter().map(|e| e.due).min()
    }

    /// Moves simulated time forward by `by`, firing every callback that
    /// comes due along the way.
    ///
    /// Callbacks run in (deadline, post-order) order. Work they post is
    /// fired within the same call when its deadline falls inside the
    /// advanced window.
    pub fn advance(&self, by: Duration) {
        let target = self.state.borrow().now + by;
        while let Some(entry) = self.pop_due(target) {
            (entry.callback)();
        }
        self.state.borrow_mut().now = target;
    }

    // Pops the earliest due entry and moves the clock to its deadline. The
    // borrow is released before the caller runs the callback, so callbacks
    // may post or cancel freely.
    fn pop_due(&self, target: Duration) -> Option<Entry> {
        let mut state = self.state.borrow_mut();
        let idx = state
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= target)
            .min_by_key(|(_, e)| (e.due, e.token.raw()))
            .map(|(idx, _)| idx)?;

        let entry = state.entries.remove(idx);
        state.now = entry.due.max(state.now);
        Some(entry)
    }
}

impl Default for ManualQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue for ManualQueue {
    fn post_delayed(&self, delay: Duration, callback: QueueCallback) -> TickToken {
        let mut state = self.state.borrow_mut();
        let token = TickToken::from_raw(state.next_token);
        state.next_token += 1;

        let due = state.now + delay;
        state.entries.push(Entry {
            due,
            token,
            callback,
        });
        token
    }

    fn cancel(&self, token: TickToken) {
        self.state.borrow_mut().entries.retain(|e| e.token != token);
    }
}
