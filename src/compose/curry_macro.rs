//! The curry macro family for converting fixed-arity functions to curried
//! form.
//!
//! Currying transforms a function of several arguments into a chain of
//! single-argument applications. These macros cover functions of 2 to 4
//! arguments with full type safety; for argument sequences whose length is
//! only known at runtime, see [`curry`](crate::compose::curry).
//!
//! # Design Decisions
//!
//! Each application step clones the function and the arguments captured so
//! far into the next closure, so every intermediate stage implements `Fn`
//! and partial applications can be stored and reused. The price is a
//! [`Clone`] bound on the function and on every argument except the last;
//! plain `fn` items and capture-free closures satisfy it for free.

/// Converts a 2-argument function into a curried form.
///
/// Given `f(a, b) -> c`, returns a closure taking `a` and yielding a
/// closure taking `b`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`] and [`Clone`]
/// - The first argument type must implement [`Clone`]
///
/// # Examples
///
/// ```rust
/// use fnkit::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry2!(add);
/// let add_one = curried_add(1);
/// assert_eq!(add_one(1), 2);
/// assert_eq!(add_one(10), 11);
/// ```
///
/// ## Reusing the curried function
///
/// ```rust
/// use fnkit::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first| {
            let function = function.clone();
            move |second| function(::core::clone::Clone::clone(&first), second)
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`] and [`Clone`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```rust
/// use fnkit::curry3;
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 {
///     width * height * depth
/// }
///
/// let curried = curry3!(volume);
/// let result = curried(2.0)(3.0)(4.0);
/// assert!((result - 24.0).abs() < f64::EPSILON);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first| {
            let function = function.clone();
            move |second| {
                let function = function.clone();
                let first = ::core::clone::Clone::clone(&first);
                move |third| function(
                    ::core::clone::Clone::clone(&first),
                    ::core::clone::Clone::clone(&second),
                    third,
                )
            }
        }
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`] and [`Clone`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```rust
/// use fnkit::curry4;
///
/// fn sum_four(a: i32, b: i32, c: i32, d: i32) -> i32 {
///     a + b + c + d
/// }
///
/// let curried = curry4!(sum_four);
/// assert_eq!(curried(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = $function;
        move |first| {
            let function = function.clone();
            move |second| {
                let function = function.clone();
                let first = ::core::clone::Clone::clone(&first);
                move |third| {
                    let function = function.clone();
                    let first = ::core::clone::Clone::clone(&first);
                    let second = ::core::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::core::clone::Clone::clone(&first),
                            ::core::clone::Clone::clone(&second),
                            ::core::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
}
