//! The `pipe!` macro for left-to-right function sequencing.

/// Builds a single callable that threads its input through the given
/// functions from left to right.
///
/// `pipe!(f, g, h)` returns a closure equivalent to `|x| h(g(f(x)))`: the
/// first function receives the argument supplied at call time, and each
/// subsequent function receives the previous function's result.
///
/// # Relationship with compose!
///
/// `pipe!(f, g, h)` and [`compose!`](crate::compose!)`(h, g, f)` build the
/// same callable; `compose!` is defined as pipe over the reversed sequence.
///
/// # Syntax
///
/// - `pipe!(f)` - Returns `|x| f(x)`
/// - `pipe!(f, g)` - Returns `|x| g(f(x))`
/// - `pipe!(f, g, h, ...)` - Returns `|x| ...h(g(f(x)))`
///
/// # Type Requirements
///
/// Every element must be callable ([`Fn`]); a non-callable element is
/// rejected when the macro expands, before any invocation. The output type
/// of each stage must match the input type of the next. A multi-argument
/// entry point is expressed with a tuple-accepting first function.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```rust
/// use fnkit::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // add_one first, then double: double(add_one(1)) = 4
/// let calculate = pipe!(add_one, double);
/// assert_eq!(calculate(1), 4);
/// assert_eq!(calculate(3), 8);
/// ```
///
/// ## Three-stage pipeline
///
/// ```rust
/// use fnkit::pipe;
///
/// let calculate = pipe!(|x: i32| x + 1, |x: i32| x * 2, |x: i32| x * 3);
/// assert_eq!(calculate(1), 12);
/// assert_eq!(calculate(3), 24);
/// ```
///
/// ## Multi-argument entry via a tuple
///
/// ```rust
/// use fnkit::pipe;
///
/// let calculate = pipe!(|(x, y): (i32, i32)| x + y, |x: i32| x * 2);
/// assert_eq!(calculate((2, 3)), 10);
/// ```
///
/// ## Type conversion through the pipeline
///
/// ```rust
/// use fnkit::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let length_of = pipe!(to_string, get_length);
/// assert_eq!(length_of(12345), 5);
/// ```
#[macro_export]
macro_rules! pipe {
    // Single function: wrap it
    ($function:expr $(,)?) => {{
        let function = $function;
        move |input| function(input)
    }};

    // Multiple functions: feed the head's output into the piped tail
    ($function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let head = $function;
        let tail = $crate::pipe!($($remaining_functions),+);
        move |input| tail(head(input))
    }};
}
