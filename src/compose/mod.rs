//! Function composition utilities.
//!
//! This module provides the combinators for building functions out of
//! functions:
//!
//! - [`pipe!`]: sequence functions left-to-right into a single callable
//! - [`compose!`]: right-to-left composition, defined as pipe over the
//!   reversed sequence
//! - [`curry2!`] through [`curry4!`]: fixed-arity currying
//! - [`curry`] / [`Curried`]: runtime argument accumulation for slice
//!   functions, with an explicit minimum argument count
//! - [`partial!`] / [`partial()`](partial): fix a prefix of arguments
//! - [`identity`], [`constant`], [`flip`]: fundamental helper combinators
//! - [`reverse`]: sequence reversal for vectors and strings
//!
//! Every target is validated by `Fn` bounds when the combinator is built —
//! a non-callable element is a compile error at the construction site,
//! before any invocation.
//!
//! # Examples
//!
//! ## Building a pipeline
//!
//! ```
//! use fnkit::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let calculate = pipe!(add_one, double);
//! assert_eq!(calculate(1), 4); // double(add_one(1))
//! ```
//!
//! ## Currying and partial application
//!
//! ```
//! use fnkit::{curry2, partial};
//!
//! fn add(first: i32, second: i32) -> i32 { first + second }
//!
//! let add_five = curry2!(add)(5);
//! assert_eq!(add_five(3), 8);
//!
//! let add_ten = partial!(add, 10, __);
//! assert_eq!(add_ten(3), 13);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left/Right Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe/Compose duality**: `pipe!(f, g, h)(x) == compose!(h, g, f)(x)`
//!
//! The law test suites verify these with generated inputs.

mod compose_macro;
mod curry;
mod curry_macro;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use curry::{Curried, Step, curry};
pub use utils::{Reversible, constant, flip, identity, partial, reverse};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry2;
pub use crate::curry3;
pub use crate::curry4;
pub use crate::partial;
pub use crate::pipe;
