//! The `compose!` macro for right-to-left function composition.

/// Builds a single callable that applies the given functions from right to
/// left, following the mathematical notation for composition.
///
/// `compose!(f, g, h)` returns a closure equivalent to `|x| f(g(h(x)))`.
/// It is defined as [`pipe!`](crate::pipe!) over the reversed sequence: the
/// macro reverses its operands into an accumulator and delegates.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
///
/// # Type Requirements
///
/// Every element must be callable ([`Fn`]); a non-callable element is
/// rejected when the macro expands, before any invocation.
///
/// # Examples
///
/// ## Basic composition
///
/// ```rust
/// use fnkit::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // compose!(f, g)(x) = f(g(x)) = double(add_one(1)) = 4
/// let calculate = compose!(double, add_one);
/// assert_eq!(calculate(1), 4);
/// ```
///
/// ## Duality with pipe
///
/// ```rust
/// use fnkit::{compose, pipe};
///
/// fn f(x: i32) -> i32 { x + 1 }
/// fn g(x: i32) -> i32 { x * 2 }
/// fn h(x: i32) -> i32 { x - 3 }
///
/// let piped = pipe!(f, g, h);
/// let composed = compose!(h, g, f);
/// assert_eq!(piped(10), composed(10));
/// ```
#[macro_export]
macro_rules! compose {
    // Internal: operands fully reversed, delegate to pipe!
    (@reversed [$($reversed:expr),+]) => {
        $crate::pipe!($($reversed),+)
    };

    // Internal: move the head of the remaining operands onto the accumulator
    (@reversed [$($reversed:expr),*] $head:expr $(, $tail:expr)*) => {
        $crate::compose!(@reversed [$head $(, $reversed)*] $($tail),*)
    };

    ($($function:expr),+ $(,)?) => {
        $crate::compose!(@reversed [] $($function),+)
    };
}
