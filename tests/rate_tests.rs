//! Timing tests for the debounce and throttle combinators.
//!
//! All tests run on a paused tokio clock: `tokio::time::advance` moves
//! time deterministically, and a short yield loop lets the woken timer
//! tasks run before asserting.

#![cfg(feature = "rate")]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use fnkit::rate::{Debounce, Throttle};

/// Lets already-woken tasks run to completion on the current-thread
/// test runtime.
async fn drain_tasks() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

fn counting<A: Send + 'static>(counter: &Arc<AtomicUsize>) -> impl Fn(A) + Send + Sync + 'static {
    let counter = Arc::clone(counter);
    move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Debounce
// =============================================================================

#[tokio::test(start_paused = true)]
async fn debounce_fires_once_after_quiet_period() {
    let fired = Arc::new(AtomicUsize::new(0));
    let debounced = Debounce::new(counting::<()>(&fired), Duration::from_millis(300));

    debounced.call(());
    debounced.call(());
    debounced.call(());
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    tokio::time::advance(Duration::from_millis(200)).await;
    drain_tasks().await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    tokio::time::advance(Duration::from_millis(100)).await;
    drain_tasks().await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    // Quiescent: no further firings.
    tokio::time::advance(Duration::from_millis(1_000)).await;
    drain_tasks().await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn debounce_uses_last_call_arguments() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let seen = Arc::clone(&seen);
        move |value: i32| seen.lock().unwrap().push(value)
    };
    let debounced = Debounce::new(sink, Duration::from_millis(100));

    debounced.call(1);
    debounced.call(2);
    debounced.call(3);

    tokio::time::advance(Duration::from_millis(100)).await;
    drain_tasks().await;

    assert_eq!(*seen.lock().unwrap(), vec![3]);
}

#[tokio::test(start_paused = true)]
async fn debounce_resets_on_every_call() {
    let fired = Arc::new(AtomicUsize::new(0));
    let debounced = Debounce::new(counting::<()>(&fired), Duration::from_millis(300));

    debounced.call(());
    tokio::time::advance(Duration::from_millis(200)).await;
    drain_tasks().await;

    // Superseding call: the delay starts over.
    debounced.call(());
    tokio::time::advance(Duration::from_millis(200)).await;
    drain_tasks().await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);

    tokio::time::advance(Duration::from_millis(100)).await;
    drain_tasks().await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn debounce_cancel_prevents_firing() {
    let fired = Arc::new(AtomicUsize::new(0));
    let debounced = Debounce::new(counting::<()>(&fired), Duration::from_millis(300));

    debounced.call(());
    tokio::time::advance(Duration::from_millis(200)).await;
    drain_tasks().await;

    debounced.cancel();
    assert!(!debounced.is_pending());

    tokio::time::advance(Duration::from_millis(10_000)).await;
    drain_tasks().await;
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn debounce_state_transitions() {
    let debounced = Debounce::new(|(): ()| {}, Duration::from_millis(50));
    assert!(!debounced.is_pending());

    debounced.call(());
    assert!(debounced.is_pending());

    tokio::time::advance(Duration::from_millis(50)).await;
    drain_tasks().await;
    assert!(!debounced.is_pending());
}

#[tokio::test(start_paused = true)]
async fn debounce_is_reusable_after_firing() {
    let fired = Arc::new(AtomicUsize::new(0));
    let debounced = Debounce::new(counting::<()>(&fired), Duration::from_millis(100));

    debounced.call(());
    tokio::time::advance(Duration::from_millis(100)).await;
    drain_tasks().await;
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    debounced.call(());
    tokio::time::advance(Duration::from_millis(100)).await;
    drain_tasks().await;
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

// =============================================================================
// Throttle
// =============================================================================

#[tokio::test(start_paused = true)]
async fn throttle_first_call_fires_immediately() {
    let fired = Arc::new(AtomicUsize::new(0));
    let throttled = Throttle::new(counting::<()>(&fired), Duration::from_millis(500));

    throttled.call(());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(!throttled.is_open());
}

#[tokio::test(start_paused = true)]
async fn throttle_drops_calls_inside_window() {
    // Calls at t=0, 200, 400, 600 with a 500ms window: exactly two firings.
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = {
        let seen = Arc::clone(&seen);
        move |value: i32| seen.lock().unwrap().push(value)
    };
    let throttled = Throttle::new(sink, Duration::from_millis(500));

    throttled.call(1); // t=0: fires
    tokio::time::advance(Duration::from_millis(200)).await;
    drain_tasks().await;

    throttled.call(2); // t=200: dropped
    tokio::time::advance(Duration::from_millis(200)).await;
    drain_tasks().await;

    throttled.call(3); // t=400: dropped
    tokio::time::advance(Duration::from_millis(200)).await;
    drain_tasks().await;

    throttled.call(4); // t=600: window closed at t=500, fires
    assert_eq!(*seen.lock().unwrap(), vec![1, 4]);
}

#[tokio::test(start_paused = true)]
async fn throttle_reopens_after_window() {
    let fired = Arc::new(AtomicUsize::new(0));
    let throttled = Throttle::new(counting::<()>(&fired), Duration::from_millis(500));

    throttled.call(());
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    tokio::time::advance(Duration::from_millis(500)).await;
    drain_tasks().await;
    assert!(throttled.is_open());

    throttled.call(());
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn throttle_cancel_leaves_gate_closed() {
    // Historical cancel semantics: the timer is cleared but the gate does
    // not reopen, so later calls keep being dropped.
    let fired = Arc::new(AtomicUsize::new(0));
    let throttled = Throttle::new(counting::<()>(&fired), Duration::from_millis(500));

    throttled.call(());
    assert_eq!(fired.load(Ordering::SeqCst), 1);

    throttled.cancel();
    tokio::time::advance(Duration::from_millis(10_000)).await;
    drain_tasks().await;

    assert!(!throttled.is_open());
    throttled.call(());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn throttle_reset_reopens_gate() {
    // The corrected alternative: reset aborts the timer and reopens.
    let fired = Arc::new(AtomicUsize::new(0));
    let throttled = Throttle::new(counting::<()>(&fired), Duration::from_millis(500));

    throttled.call(());
    throttled.cancel();
    assert!(!throttled.is_open());

    throttled.reset();
    assert!(throttled.is_open());

    throttled.call(());
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn throttle_cancel_before_any_call_is_harmless() {
    let fired = Arc::new(AtomicUsize::new(0));
    let throttled = Throttle::new(counting::<()>(&fired), Duration::from_millis(500));

    throttled.cancel();
    assert!(throttled.is_open());

    throttled.call(());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}
