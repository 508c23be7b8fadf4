//! Applicative type class - lifting values and applying wrapped functions.

use super::functor::Functor;

/// A type class extending [`Functor`] with the ability to lift a plain
/// value into the container and to apply a wrapped function to a wrapped
/// value.
///
/// # Laws
///
/// - **Identity**: `pure(identity).apply(v) == v`
/// - **Homomorphism**: `pure(f).apply(pure(x)) == pure(f(x))`
///
/// # Examples
///
/// ```rust
/// use fnkit::typeclass::Applicative;
///
/// let x: Option<i32> = <Option<()>>::pure(42);
/// assert_eq!(x, Some(42));
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies the function held by this container to the value held by
    /// `other`.
    ///
    /// The receiver's inner value is the function; `other` supplies the
    /// argument.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// let value = Some(5);
    /// assert_eq!(function.apply(value), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Some(function), Some(value)) => Some(function(value)),
            _ => None,
        }
    }
}
