//! # fnkit
//!
//! Function combinators and minimal container types for functional-style
//! programming in Rust.
//!
//! ## Overview
//!
//! The crate is a small toolbox of independent pieces, composed only by the
//! caller:
//!
//! - **Composition**: [`pipe!`] (left-to-right) and [`compose!`]
//!   (right-to-left) build a single callable from a sequence of functions.
//! - **Currying**: `curry2!`..`curry4!` turn fixed-arity functions into
//!   chains of single-argument applications; [`compose::curry`] accumulates
//!   arguments at runtime for slice functions.
//! - **Partial application**: [`partial!`] fixes a prefix of arguments.
//! - **Memoization**: [`memo::memoize`] caches results keyed by a canonical
//!   serialization of the arguments.
//! - **Rate limiting**: [`rate::Debounce`] fires after a quiet period;
//!   [`rate::Throttle`] fires at most once per window.
//! - **Containers**: [`typeclass::Identity`] and [`typeclass::Maybe`], with
//!   `Functor`/`Applicative`/`Monad` instances.
//!
//! ## Feature Flags
//!
//! - `typeclass`: type class traits and the `Identity`/`Maybe` containers
//! - `compose`: composition, currying, and partial-application utilities
//! - `memo`: the memoizing function wrapper
//! - `rate`: the debounce/throttle combinators (pulls in tokio)
//! - `full`: everything (same as the default set)
//!
//! ## Example
//!
//! ```rust
//! use fnkit::pipe;
//!
//! fn double(x: i32) -> i32 { x * 2 }
//! fn add_one(x: i32) -> i32 { x + 1 }
//!
//! let calculate = pipe!(double, add_one);
//! assert_eq!(calculate(5), 11);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "memo")]
    pub use crate::memo::*;

    #[cfg(feature = "rate")]
    pub use crate::rate::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "memo")]
pub mod memo;

#[cfg(feature = "rate")]
pub mod rate;
