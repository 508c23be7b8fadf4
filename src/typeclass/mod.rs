//! Type class traits and the minimal container types.
//!
//! This module provides the small set of type classes the crate's containers
//! implement:
//!
//! - [`TypeConstructor`]: GAT-based emulation of higher-kinded types
//! - [`Functor`]: mapping over a container's value
//! - [`Applicative`]: lifting values and applying wrapped functions
//! - [`Monad`]: sequencing computations with dependency
//!
//! and the two containers themselves:
//!
//! - [`Identity`]: the identity functor — a value with no added behavior
//! - [`Maybe`]: an optional value that short-circuits mapping when absent
//!
//! `Option` implements all three type classes as the standard-library
//! reference instance.
//!
//! # Laws
//!
//! Implementations are expected to satisfy the functor laws
//! (`fa.fmap(identity) == fa` and `fa.fmap(f).fmap(g) == fa.fmap(g ∘ f)`)
//! and the monad laws; the crate's law test suites exercise them with
//! generated inputs.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::typeclass::{Functor, Maybe};
//!
//! let present = Maybe::Just(2).fmap(|x| x * 2);
//! assert_eq!(present, Maybe::Just(4));
//!
//! let absent: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(absent.fmap(|x| x * 2), Maybe::Nothing);
//! ```

mod applicative;
mod functor;
mod higher;
mod identity;
mod maybe;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;
pub use maybe::Maybe;
pub use monad::Monad;
