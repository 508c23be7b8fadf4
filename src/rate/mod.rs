//! Rate-limiting combinators: debounce and throttle.
//!
//! Both combinators wrap a callback and own exactly one logical timer,
//! expressed as a spawned tokio task sleeping for the configured duration.
//! State lives behind a lock in the combinator's handle as an explicit
//! state machine:
//!
//! - [`Debounce`]: **Idle** / **Pending**. Every call re-arms the timer;
//!   the callback fires once per quiet period, with the last call's
//!   arguments (trailing edge).
//! - [`Throttle`]: **Open** / **Throttling**. The first call in an open
//!   window fires immediately (leading edge) and closes the gate; calls
//!   while closed are dropped.
//!
//! Cancellation aborts the timer task synchronously, so a scheduled firing
//! never occurs. It does not wait for a callback already mid-fire on
//! another worker thread; under a current-thread runtime no such callback
//! can exist. A generation counter makes a superseded or cancelled timer's
//! completion a no-op, so stale tasks never clobber newer state.
//!
//! Both `call` methods must run inside a tokio runtime; they panic
//! otherwise.

mod debounce;
mod throttle;

pub use debounce::Debounce;
pub use throttle::Throttle;
