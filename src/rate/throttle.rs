//! Limiting a callback to at most one invocation per window.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// The throttle gate. `Throttling` holds the window timer; the handle is
/// `None` once cancelled, while the gate itself stays closed.
enum GateState {
    Open,
    Throttling(Option<JoinHandle<()>>),
}

/// Gate state plus the generation of the most recent window. A window task
/// only reopens the gate if its generation is still current.
struct GateSlot {
    generation: u64,
    state: GateState,
}

struct Shared<F> {
    function: F,
    window: Duration,
    slot: Mutex<GateSlot>,
}

/// Limits invocation of a callback to at most once per window.
///
/// The first [`call`](Self::call) while the gate is open invokes the
/// callback immediately with that call's arguments, closes the gate, and
/// arms a timer for the configured window. Calls received while the gate is
/// closed are dropped — no queuing, no trailing replay. When the timer
/// fires, the gate reopens.
///
/// [`cancel`](Self::cancel) aborts the window timer but leaves the gate
/// closed: a cancelled throttle stays closed to new calls until
/// [`reset`](Self::reset) reopens it. Dropping the handle aborts the timer.
///
/// # Examples
///
/// ```rust,no_run
/// use fnkit::rate::Throttle;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let report = Throttle::new(|n: u32| println!("progress {n}%"), Duration::from_millis(500));
///
/// report.call(10); // fires immediately
/// report.call(20); // dropped: the window is still open
/// tokio::time::sleep(Duration::from_millis(600)).await;
/// report.call(30); // fires again
/// # }
/// ```
pub struct Throttle<F> {
    shared: Arc<Shared<F>>,
}

impl<F> Throttle<F> {
    /// Wraps `function` with a throttle gate of the given window.
    pub fn new<A>(function: F, window: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                function,
                window,
                slot: Mutex::new(GateSlot {
                    generation: 0,
                    state: GateState::Open,
                }),
            }),
        }
    }

    /// Invokes the callback immediately if the gate is open, closing it
    /// for the window; drops the call otherwise.
    ///
    /// The gate lock is released before the callback runs.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn call<A>(&self, arguments: A)
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        {
            let mut slot = self.shared.slot.lock();
            if !matches!(slot.state, GateState::Open) {
                return;
            }
            slot.generation += 1;
            let generation = slot.generation;

            let shared = Arc::clone(&self.shared);
            let timer = tokio::spawn(async move {
                tokio::time::sleep(shared.window).await;
                let mut slot = shared.slot.lock();
                if slot.generation == generation {
                    slot.state = GateState::Open;
                }
            });
            slot.state = GateState::Throttling(Some(timer));
        }

        (self.shared.function)(arguments);
    }

    /// Aborts the window timer.
    ///
    /// The gate stays closed: with no timer left to reopen it, subsequent
    /// calls are dropped until [`reset`](Self::reset). This mirrors the
    /// historical cancel semantics; use `reset` for the reopening variant.
    pub fn cancel(&self) {
        let mut slot = self.shared.slot.lock();
        slot.generation += 1;
        if let GateState::Throttling(timer) = &mut slot.state {
            if let Some(timer) = timer.take() {
                timer.abort();
            }
        }
    }

    /// Aborts the window timer and reopens the gate.
    pub fn reset(&self) {
        let mut slot = self.shared.slot.lock();
        slot.generation += 1;
        if let GateState::Throttling(Some(timer)) = &slot.state {
            timer.abort();
        }
        slot.state = GateState::Open;
    }

    /// Returns `true` while the gate accepts calls.
    pub fn is_open(&self) -> bool {
        matches!(self.shared.slot.lock().state, GateState::Open)
    }
}

impl<F> Drop for Throttle<F> {
    fn drop(&mut self) {
        let mut slot = self.shared.slot.lock();
        slot.generation += 1;
        if let GateState::Throttling(Some(timer)) = &slot.state {
            timer.abort();
        }
    }
}
