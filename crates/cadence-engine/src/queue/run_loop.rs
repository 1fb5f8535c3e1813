use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::rc::Rc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, bail};

use super::{EventQueue, QueueCallback, TickToken};

/// Real single-threaded timer loop.
///
/// `run` sleeps until the earliest deadline, executes the due callback, and
/// repeats until [`request_exit`](Self::request_exit) is called or the queue
/// drains. Everything happens on the calling thread; callbacks may post and
/// cancel further work through a cloned handle.
#[derive(Clone)]
pub struct RunLoop {
    shared: Rc<Shared>,
}

struct Shared {
    state: RefCell<State>,
    exit: Cell<bool>,
    running: Cell<bool>,
}

struct State {
    timers: BinaryHeap<TimerEntry>,
    cancelled: HashSet<TickToken>,
    next_token: u64,
}

struct TimerEntry {
    due: Instant,
    token: TickToken,
    callback: QueueCallback,
}

// Heap ordering: earliest deadline first, post order among equals. The
// callback takes no part in ordering.
impl PartialEq for TimerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.token == other.token
    }
}

impl Eq for TimerEntry {}

impl PartialOrd for TimerEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the earliest entry.
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.token.raw().cmp(&self.token.raw()))
    }
}

enum Step {
    Run(QueueCallback),
    Sleep(Duration),
    Drained,
}

impl RunLoop {
    pub fn new() -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(State {
                    timers: BinaryHeap::new(),
                    cancelled: HashSet::new(),
                    next_token: 0,
                }),
                exit: Cell::new(false),
                running: Cell::new(false),
            }),
        }
    }

    /// Number of live (non-cancelled) pending callbacks.
    pub fn pending(&self) -> usize {
        let state = self.shared.state.borrow();
        state.timers.len() - state.cancelled.len()
    }

    /// Asks the loop to return after the current callback. Requested before
    /// `run`, the next `run` returns immediately.
    ///
    /// Callable only from loop callbacks or between runs; the loop owns the
    /// thread while it sleeps.
    pub fn request_exit(&self) {
        self.shared.exit.set(true);
    }

    /// Drives the loop until exit is requested or no callbacks remain. The
    /// exit request is consumed when the loop returns.
    ///
    /// Errors if called from within a callback of the same loop.
    pub fn run(&self) -> Result<()> {
        if self.shared.running.get() {
            bail!("run loop is already running on this thread");
        }
        self.shared.running.set(true);
        log::debug!("run loop started");

        loop {
            if self.shared.exit.get() {
                break;
            }
            match self.next_step() {
                Step::Run(callback) => callback(),
                Step::Sleep(wait) => thread::sleep(wait),
                Step::Drained => break,
            }
        }

        self.shared.exit.set(false);
        self.shared.running.set(false);
        log::debug!("run loop exited ({} callbacks pending)", self.pending());
        Ok(())
    }

    fn next_step(&self) -> Step {
        let mut state = self.shared.state.borrow_mut();
        loop {
            let Some(top) = state.timers.peek() else {
                return Step::Drained;
            };

            if state.cancelled.contains(&top.token) {
                let token = top.token;
                state.cancelled.remove(&token);
                state.timers.pop();
                continue;
            }

            let now = Instant::now();
            if top.due > now {
                return Step::Sleep(top.due - now);
            }

            // Peek succeeded above, so pop cannot come back empty.
            match state.timers.pop() {
                Some(entry) => return Step::Run(entry.callback),
                None => return Step::Drained,
            }
        }
    }
}

impl Default for RunLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue for RunLoop {
    fn post_delayed(&self, delay: Duration, callback: QueueCallback) -> TickToken {
        let mut state = self.shared.state.borrow_mut();
        let token = TickToken::from_raw(state.next_token);
        state.next_token += 1;

        state.timers.push(TimerEntry {
            due: Instant::now() + delay,
            token,
            callback,
        });
        token
    }

    fn cancel(&self, token: TickToken) {
        let mut state = self.shared.state.borrow_mut();
        if state.timers.iter().any(|e| e.token == token) {
            state.cancelled.insert(token);
        }
    }
}
