//! Maybe container - an optional value functor.
//!
//! `Maybe` holds either one value (`Just`) or nothing (`Nothing`). Mapping
//! over `Nothing` short-circuits: the function is not called and `Nothing`
//! is returned. Like [`Identity`](crate::typeclass::Identity), every
//! operation produces a new container.

use super::applicative::Applicative;
use super::functor::Functor;
use super::higher::TypeConstructor;
use super::monad::Monad;

/// An optional value.
///
/// The crate-local rendition of an absence-aware container with the type
/// class instances spelled out. Converts freely to and from `Option`.
///
/// # Examples
///
/// ```rust
/// use fnkit::typeclass::{Functor, Maybe};
///
/// assert_eq!(Maybe::Just(2).fmap(|x| x * 2), Maybe::Just(4));
///
/// let absent: Maybe<i32> = Maybe::Nothing;
/// assert_eq!(absent.fmap(|x| x + 2), Maybe::Nothing);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Maybe<A> {
    /// No value present. Mapping short-circuits.
    #[default]
    Nothing,
    /// A present value.
    Just(A),
}

impl<A> Maybe<A> {
    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns the held value, or `default` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Maybe;
    ///
    /// assert_eq!(Maybe::Just(5).unwrap_or(0), 5);
    /// assert_eq!(Maybe::Nothing.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: A) -> A {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Converts into the standard-library `Option`.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.into()
    }
}

impl<A> Maybe<Maybe<A>> {
    /// Flattens one level of nesting.
    ///
    /// `chain` on this container is `fmap` followed by `join`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::typeclass::Maybe;
    ///
    /// assert_eq!(Maybe::Just(Maybe::Just(7)).join(), Maybe::Just(7));
    /// assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).join(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn join(self) -> Maybe<A> {
        match self {
            Self::Just(inner) => inner,
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> From<Option<A>> for Maybe<A> {
    fn from(value: Option<A>) -> Self {
        value.map_or(Self::Nothing, Self::Just)
    }
}

impl<A> From<Maybe<A>> for Option<A> {
    fn from(value: Maybe<A>) -> Self {
        match value {
            Maybe::Just(inner) => Some(inner),
            Maybe::Nothing => None,
        }
    }
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<A> Applicative for Maybe<A> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B> {
        Maybe::Just(value)
    }

    #[inline]
    fn apply<B, Output>(self, other: Maybe<B>) -> Maybe<Output>
    where
        A: FnOnce(B) -> Output,
    {
        match (self, other) {
            (Self::Just(function), Maybe::Just(value)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }
}

impl<A> Monad for Maybe<A> {
    /// Mapping followed by one level of flattening.
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        self.fmap(function).join()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn maybe_fmap_transforms_just() {
        assert_eq!(Maybe::Just(2).fmap(|x| x * 2), Maybe::Just(4));
    }

    #[rstest]
    fn maybe_fmap_short_circuits_nothing() {
        let absent: Maybe<i32> = Maybe::Nothing;
        assert_eq!(absent.fmap(|x| x + 2), Maybe::Nothing);
    }

    #[rstest]
    fn maybe_fmap_ref_keeps_original() {
        let original = Maybe::Just(String::from("hello"));
        assert_eq!(original.fmap_ref(|s| s.len()), Maybe::Just(5));
        assert!(original.is_just());
    }

    #[rstest]
    fn maybe_join_flattens_one_level() {
        assert_eq!(Maybe::Just(Maybe::Just(7)).join(), Maybe::Just(7));
        assert_eq!(Maybe::Just(Maybe::<i32>::Nothing).join(), Maybe::Nothing);
        assert_eq!(Maybe::<Maybe<i32>>::Nothing.join(), Maybe::Nothing);
    }

    #[rstest]
    fn maybe_chain_is_fmap_then_join() {
        let double_if_even = |x: i32| {
            if x % 2 == 0 {
                Maybe::Just(x * 2)
            } else {
                Maybe::Nothing
            }
        };

        assert_eq!(Maybe::Just(4).flat_map(double_if_even), Maybe::Just(8));
        assert_eq!(Maybe::Just(3).flat_map(double_if_even), Maybe::Nothing);
        assert_eq!(Maybe::Nothing.flat_map(double_if_even), Maybe::Nothing);
    }

    #[rstest]
    fn maybe_apply_requires_both_present() {
        let function: Maybe<fn(i32) -> i32> = Maybe::Just(|x| x + 1);
        assert_eq!(function.apply(Maybe::Just(5)), Maybe::Just(6));

        let absent: Maybe<fn(i32) -> i32> = Maybe::Nothing;
        assert_eq!(absent.apply(Maybe::Just(5)), Maybe::Nothing);
    }

    #[rstest]
    #[case(Some(3), Maybe::Just(3))]
    #[case(None, Maybe::Nothing)]
    fn maybe_option_round_trip(#[case] option: Option<i32>, #[case] maybe: Maybe<i32>) {
        assert_eq!(Maybe::from(option), maybe);
        assert_eq!(maybe.into_option(), option);
    }

    #[test]
    fn maybe_default_is_nothing() {
        assert_eq!(Maybe::<i32>::default(), Maybe::Nothing);
    }
}
