//! Identity wrapper type - the identity functor.
//!
//! The simplest possible container: it wraps a single value and adds no
//! behavior. Mapping produces a new `Identity`; the held value is never
//! mutated in place.

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monad::Monad;

/// The identity functor - wraps a value without adding any behavior.
///
/// Useful as the simplest model for the type class laws and as a neutral
/// carrier in compositions.
///
/// # Examples
///
/// ```rust
/// use fnkit::typeclass::{Functor, Identity};
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.fmap(|x| x + 1), Identity::new(43));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// assert_eq!(x.into_inner(), "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> Identity<Identity<A>> {
    /// Flattens one level of nesting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Identity;
    ///
    /// let nested = Identity::new(Identity::new(7));
    /// assert_eq!(nested.join(), Identity::new(7));
    /// ```
    #[inline]
    pub fn join(self) -> Identity<A> {
        self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> Functor for Identity<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity::new(function(self.0))
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Identity<B>
    where
        F: FnOnce(&A) -> B,
    {
        Identity::new(function(&self.0))
    }
}

impl<A> Applicative for Identity<A> {
    #[inline]
    fn pure<B>(value: B) -> Identity<B> {
        Identity::new(value)
    }

    /// The held value is the function: `Identity(f).apply(Identity(x))`
    /// is `Identity(f(x))`.
    #[inline]
    fn apply<B, Output>(self, other: Identity<B>) -> Identity<Output>
    where
        A: FnOnce(B) -> Output,
    {
        Identity::new((self.0)(other.0))
    }
}

impl<A> Monad for Identity<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> Identity<B>,
    {
        function(self.0)
    }
}
