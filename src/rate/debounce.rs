//! Delaying a callback until a quiet period elapses.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

/// The debounce timer: either nothing is scheduled, or one firing is.
enum TimerState {
    Idle,
    Pending(JoinHandle<()>),
}

/// Timer state plus the generation of the most recent arming. A timer task
/// only resets the state to `Idle` if its generation is still current, so
/// a superseded firing cannot clobber a newer pending timer.
struct TimerSlot {
    generation: u64,
    state: TimerState,
}

struct Shared<F> {
    function: F,
    delay: Duration,
    slot: Mutex<TimerSlot>,
}

/// Delays invocation of a callback until a quiet period has elapsed.
///
/// Each [`call`](Self::call) cancels any pending timer and arms a new one
/// for the configured delay, capturing that call's arguments. If the timer
/// fires without being superseded, the callback is invoked with the most
/// recent arguments and the state returns to idle. The callback therefore
/// fires at most once per quiescent period, with the arguments of the last
/// call before quiescence.
///
/// [`cancel`](Self::cancel) clears any pending timer without invoking the
/// callback. Dropping the handle does the same.
///
/// # Examples
///
/// ```rust,no_run
/// use fnkit::rate::Debounce;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let save = Debounce::new(|name: String| println!("saving {name}"), Duration::from_millis(300));
///
/// // Only the last call survives the quiet period.
/// save.call("draft-1".to_string());
/// save.call("draft-2".to_string());
/// tokio::time::sleep(Duration::from_millis(400)).await;
/// # }
/// ```
pub struct Debounce<F> {
    shared: Arc<Shared<F>>,
}

impl<F> Debounce<F> {
    /// Wraps `function` with a debounce timer of the given delay.
    pub fn new<A>(function: F, delay: Duration) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                function,
                delay,
                slot: Mutex::new(TimerSlot {
                    generation: 0,
                    state: TimerState::Idle,
                }),
            }),
        }
    }

    /// Supersedes any pending timer and arms a new one capturing
    /// `arguments`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn call<A>(&self, arguments: A)
    where
        F: Fn(A) + Send + Sync + 'static,
        A: Send + 'static,
    {
        let mut slot = self.shared.slot.lock();
        if let TimerState::Pending(timer) = &slot.state {
            timer.abort();
        }
        slot.generation += 1;
        let generation = slot.generation;

        let shared = Arc::clone(&self.shared);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(shared.delay).await;
            (shared.function)(arguments);
            let mut slot = shared.slot.lock();
            if slot.generation == generation {
                slot.state = TimerState::Idle;
            }
        });
        slot.state = TimerState::Pending(timer);
    }

    /// Clears any pending timer without invoking the callback, returning
    /// to idle.
    pub fn cancel(&self) {
        let mut slot = self.shared.slot.lock();
        if let TimerState::Pending(timer) = &slot.state {
            timer.abort();
        }
        slot.generation += 1;
        slot.state = TimerState::Idle;
    }

    /// Returns `true` while a firing is scheduled.
    pub fn is_pending(&self) -> bool {
        matches!(self.shared.slot.lock().state, TimerState::Pending(_))
    }
}

impl<F> Drop for Debounce<F> {
    fn drop(&mut self) {
        self.cancel();
    }
}
