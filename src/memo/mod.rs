//! Memoization - caching a pure function's results by argument key.
//!
//! [`memoize`] wraps a function with a result cache keyed by a canonical
//! serialization of the call's arguments. The cache has no eviction, no
//! size bound, and no expiration; it lives as long as the wrapper.
//! Correctness requires the wrapped function to be referentially
//! transparent — a stated precondition, not something the wrapper enforces.
//!
//! # Key equality contract
//!
//! Two argument values that produce the same key string are treated as the
//! same call: the cached result is returned and the function is not
//! re-invoked. With the default `serde_json` key this conflates values that
//! serialize identically; supply your own key function through
//! [`memoize_with`] when that matters. A key function may decline to key a
//! value by returning `None`, in which case the call bypasses the cache and
//! invokes the function directly.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::memo::memoize;
//!
//! let add = memoize(|&(a, b): &(i32, i32)| a + b);
//! assert_eq!(add.call(&(1, 2)), 3);
//! assert_eq!(add.call(&(1, 2)), 3); // served from cache
//! assert_eq!(add.cached(), 1);
//! ```

use std::collections::HashMap;

use parking_lot::Mutex;
use serde::Serialize;

/// A function wrapped with an argument-keyed result cache.
///
/// Construct with [`memoize`] or [`memoize_with`]. Results are cloned out
/// of the cache, so the result type must implement [`Clone`].
///
/// The cache lock is released while the wrapped function runs, so a
/// memoized recursive function may call itself through the wrapper.
pub struct Memoized<F, K, R> {
    function: F,
    key_function: K,
    cache: Mutex<HashMap<String, R>>,
}

/// Wraps a pure function with a result cache keyed by the canonical
/// serialization of its argument value.
///
/// Multi-argument calls are expressed as a tuple argument. Argument values
/// the serializer cannot render bypass the cache.
///
/// # Examples
///
/// ```rust
/// use fnkit::memo::memoize;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let calls = AtomicUsize::new(0);
/// let add = memoize(|&(a, b): &(i32, i32)| {
///     calls.fetch_add(1, Ordering::SeqCst);
///     a + b
/// });
///
/// assert_eq!(add.call(&(1, 2)), 3);
/// assert_eq!(add.call(&(1, 2)), 3);
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
///
/// assert_eq!(add.call(&(2, 3)), 5);
/// assert_eq!(calls.load(Ordering::SeqCst), 2);
/// ```
pub fn memoize<A, R, F>(function: F) -> Memoized<F, impl Fn(&A) -> Option<String>, R>
where
    F: Fn(&A) -> R,
    A: Serialize,
{
    memoize_with(function, |arguments: &A| {
        serde_json::to_string(arguments).ok()
    })
}

/// Wraps a pure function with a result cache using a caller-supplied key
/// function.
///
/// The key function defines call equality: calls whose keys match are the
/// same call. Returning `None` marks the arguments unkeyable; such calls
/// invoke the function without touching the cache.
///
/// # Examples
///
/// ```rust
/// use fnkit::memo::memoize_with;
///
/// // Key on the integer part only: 1.1 and 1.9 are "the same" call.
/// let floor_key = memoize_with(
///     |x: &f64| *x,
///     |x: &f64| Some(format!("{}", *x as i64)),
/// );
///
/// assert_eq!(floor_key.call(&1.1), 1.1);
/// assert_eq!(floor_key.call(&1.9), 1.1); // conflated by the key
/// ```
pub fn memoize_with<A, R, F, K>(function: F, key_function: K) -> Memoized<F, K, R>
where
    F: Fn(&A) -> R,
    K: Fn(&A) -> Option<String>,
{
    Memoized {
        function,
        key_function,
        cache: Mutex::new(HashMap::new()),
    }
}

impl<F, K, R: Clone> Memoized<F, K, R> {
    /// Invokes the wrapper with the given arguments.
    ///
    /// On a cache hit the stored result is cloned and returned without
    /// invoking the wrapped function; on a miss the function runs once and
    /// its result is cached under the arguments' key.
    pub fn call<A>(&self, arguments: &A) -> R
    where
        F: Fn(&A) -> R,
        K: Fn(&A) -> Option<String>,
    {
        let Some(key) = (self.key_function)(arguments) else {
            return (self.function)(arguments);
        };

        if let Some(cached) = self.cache.lock().get(&key) {
            return cached.clone();
        }

        let result = (self.function)(arguments);
        self.cache.lock().insert(key, result.clone());
        result
    }

    /// The number of distinct keys currently cached.
    pub fn cached(&self) -> usize {
        self.cache.lock().len()
    }

    /// Drops every cached result.
    pub fn clear(&self) {
        self.cache.lock().clear();
    }
}
