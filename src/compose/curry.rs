//! Runtime currying with an explicit argument accumulator.
//!
//! The [`curry2!`](crate::curry2!) macro family fixes the arity at compile
//! time, one argument per step. [`Curried`] instead accumulates arguments
//! at runtime for functions over uniform-type argument slices: each
//! application concatenates new arguments onto the stored sequence and
//! fires the underlying function once the count reaches the configured
//! minimum. This is the rendition for call sites that supply a varying
//! number of arguments per step.

use std::rc::Rc;

use smallvec::SmallVec;

/// The outcome of applying arguments to a [`Curried`] value.
///
/// Either the underlying function fired and produced a result, or the
/// application is still partial and a new accumulator is returned.
#[derive(Debug)]
pub enum Step<C, R> {
    /// Not enough arguments yet; holds the grown accumulator.
    Partial(C),
    /// The underlying function fired exactly once with all accumulated
    /// arguments.
    Done(R),
}

impl<C, R> Step<C, R> {
    /// Returns `true` if the underlying function fired.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Consumes the step, returning the result if the function fired.
    #[inline]
    pub fn done(self) -> Option<R> {
        match self {
            Self::Done(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// Consumes the step, returning the accumulator if still partial.
    #[inline]
    pub fn partial(self) -> Option<C> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Done(_) => None,
        }
    }
}

/// A partially applied function accumulating arguments across calls.
///
/// Holds the target function, the ordered sequence of arguments supplied so
/// far, and the minimum argument count that triggers invocation. Applying
/// arguments never mutates the receiver: the stored sequence is cloned and
/// grown by concatenation, so a partial application can be reused as a
/// fan-out point.
///
/// Construct with [`curry`].
///
/// # Examples
///
/// ```rust
/// use fnkit::compose::{curry, Step};
///
/// let add = curry(|args: &[i32]| args.iter().sum::<i32>(), 3);
///
/// let partial = add.apply([1]).partial().unwrap();
/// let partial = partial.apply([2]).partial().unwrap();
/// match partial.apply([3]) {
///     Step::Done(sum) => assert_eq!(sum, 6),
///     Step::Partial(_) => unreachable!(),
/// }
/// ```
pub struct Curried<F, T> {
    function: Rc<F>,
    stored: SmallVec<[T; 4]>,
    min_args: usize,
}

/// Transforms a slice function into an accumulating curried form.
///
/// `min_args` is the number of accumulated arguments that triggers
/// invocation; Rust function values carry no introspectable arity, so the
/// threshold is explicit. Supplying more arguments than the minimum in the
/// firing call is permitted — the excess is passed through to the function,
/// not rejected.
///
/// A non-callable `function` is rejected by the compiler at this call site,
/// before any application.
///
/// # Examples
///
/// ## Splitting arguments across calls
///
/// ```rust
/// use fnkit::compose::curry;
///
/// let sum = curry(|args: &[i32]| args.iter().sum::<i32>(), 4);
///
/// let first_two = sum.apply([1, 2]).partial().unwrap();
/// assert_eq!(first_two.apply([3, 4]).done(), Some(10));
/// ```
///
/// ## Excess arguments pass through
///
/// ```rust
/// use fnkit::compose::curry;
///
/// let count = curry(|args: &[u8]| args.len(), 2);
/// assert_eq!(count.apply([1, 2, 3, 4]).done(), Some(4));
/// ```
pub fn curry<F, T, R>(function: F, min_args: usize) -> Curried<F, T>
where
    F: Fn(&[T]) -> R,
{
    Curried {
        function: Rc::new(function),
        stored: SmallVec::new(),
        min_args,
    }
}

impl<F, T> Curried<F, T> {
    /// The number of arguments accumulated so far.
    #[inline]
    pub fn supplied(&self) -> usize {
        self.stored.len()
    }

    /// The argument count that triggers invocation.
    #[inline]
    pub const fn min_args(&self) -> usize {
        self.min_args
    }
}

impl<F, T: Clone> Curried<F, T> {
    /// Appends `args` to the accumulated sequence.
    ///
    /// If the grown sequence reaches the minimum count, the underlying
    /// function is invoked exactly once with all accumulated arguments and
    /// the result returned as [`Step::Done`]; otherwise a new accumulator
    /// holding the grown sequence is returned as [`Step::Partial`].
    pub fn apply<R, I>(&self, args: I) -> Step<Self, R>
    where
        F: Fn(&[T]) -> R,
        I: IntoIterator<Item = T>,
    {
        let mut accumulated = self.stored.clone();
        accumulated.extend(args);

        if accumulated.len() >= self.min_args {
            Step::Done((self.function)(accumulated.as_slice()))
        } else {
            Step::Partial(Self {
                function: Rc::clone(&self.function),
                stored: accumulated,
                min_args: self.min_args,
            })
        }
    }
}

impl<F, T: Clone> Clone for Curried<F, T> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            stored: self.stored.clone(),
            min_args: self.min_args,
        }
    }
}
