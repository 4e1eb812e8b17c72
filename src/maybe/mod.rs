//! Maybe - an optional value with explicit construction contracts
//!
//! A [`Maybe<T>`] is either present, carrying a payload, or absent. It is a thin
//! value type over the native `Option<T>`, and adds the things a plain option does
//! not spell out: which construction paths reject an absent input and which coerce
//! it to absence, a null-equivalent [`Nothing`] for comparisons, hash codes that
//! match the payload, and deferred matching through a
//! [`PatternMatcher`](crate::PatternMatcher).
//!
//! A `Maybe` is never mutated in place. Every transformation returns a new value.

pub mod iter;

use core::any::Any;
use core::fmt;
use core::hash::{BuildHasher, Hash, Hasher};

use crate::error::{Error, Misuse};
use crate::matcher::PatternMatcher;

pub use self::iter::{flatten, IntoIter, Iter, MaybeIterExt, Present};

/// An optional value.
///
/// # Examples
/// ```
/// use optmatch::{Maybe, Nothing};
///
/// let a = Maybe::some(1);
/// let b = Maybe::some(1);
/// assert_eq!(a, b);
///
/// let n: Maybe<i32> = Nothing.into();
/// assert!(n == Nothing);
/// assert_eq!(n.value_or(42), 42);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Maybe<T> {
    inner: Option<T>,
}

/// The absent value for every `Maybe<T>`.
///
/// `Nothing` converts into any `Maybe<T>`, and compares equal to a `Maybe<T>`
/// exactly when that value is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Nothing;

impl<T> Maybe<T> {
    /// Create an absent value.
    pub const fn none() -> Self {
        Maybe { inner: None }
    }

    /// Create a present value wrapping `value`.
    pub const fn some(value: T) -> Self {
        Maybe { inner: Some(value) }
    }

    /// Create a present value from an input that must carry one.
    ///
    /// Returns [`Error::InvalidArgument`] if `value` is `None`. Use
    /// [`Maybe::create`] when an absent input should become an absent `Maybe`.
    pub fn try_some(value: Option<T>) -> Result<Self, Error> {
        match value {
            Some(v) => Ok(Maybe::some(v)),
            None => {
                tracing::trace!("rejected present construction from an absent input");
                Err(Error::InvalidArgument)
            }
        }
    }

    /// Create a value from an option, where `None` becomes absent.
    pub fn create(value: Option<T>) -> Self {
        Maybe { inner: value }
    }

    /// True if a payload is present.
    pub const fn has_value(&self) -> bool {
        self.inner.is_some()
    }

    /// Borrow the payload.
    ///
    /// Returns [`Error::InvalidOperation`] if the value is absent.
    pub fn value(&self) -> Result<&T, Error> {
        self.inner
            .as_ref()
            .ok_or(Error::InvalidOperation(Misuse::AbsentValue))
    }

    /// Take the payload.
    ///
    /// Returns [`Error::InvalidOperation`] if the value is absent.
    pub fn into_value(self) -> Result<T, Error> {
        self.inner.ok_or(Error::InvalidOperation(Misuse::AbsentValue))
    }

    /// Borrow the payload if it is present.
    pub fn try_value(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Copy the payload into `out` and return true, or write `T::default()` into
    /// `out` and return false if the value is absent.
    pub fn try_get_value(&self, out: &mut T) -> bool
    where
        T: Clone + Default,
    {
        match &self.inner {
            Some(v) => {
                *out = v.clone();
                true
            }
            None => {
                *out = T::default();
                false
            }
        }
    }

    /// The payload, or `T::default()` if absent.
    pub fn value_or_default(&self) -> T
    where
        T: Clone + Default,
    {
        self.inner.clone().unwrap_or_default()
    }

    /// The payload, or `fallback` if absent.
    pub fn value_or(&self, fallback: T) -> T
    where
        T: Clone,
    {
        match &self.inner {
            Some(v) => v.clone(),
            None => fallback,
        }
    }

    /// The payload, or the result of `fallback` if absent. `fallback` is only
    /// called when the value is absent.
    pub fn value_or_else<F>(&self, fallback: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        match &self.inner {
            Some(v) => v.clone(),
            None => fallback(),
        }
    }

    /// Borrow as a native option.
    pub fn as_option(&self) -> Option<&T> {
        self.inner.as_ref()
    }

    /// Convert into a native option.
    pub fn into_option(self) -> Option<T> {
        self.inner
    }

    /// Call exactly one of `none` or `some` and return its result.
    ///
    /// ```
    /// use optmatch::Maybe;
    ///
    /// let m = Maybe::some(10);
    /// assert_eq!(m.match_with(|| 0, |x| x + 1), 11);
    /// ```
    pub fn match_with<R, N, S>(&self, none: N, some: S) -> R
    where
        N: FnOnce() -> R,
        S: FnOnce(&T) -> R,
    {
        match &self.inner {
            Some(v) => some(v),
            None => none(),
        }
    }

    /// Begin a [`PatternMatcher`] bound to this value. Evaluating the matcher
    /// without an argument matches against this value.
    pub fn matcher<'a, R>(&'a self) -> PatternMatcher<'a, T, R> {
        PatternMatcher::bound(self)
    }

    /// Begin a [`PatternMatcher`] that is not bound to any value.
    pub fn pattern_match<'a, R>() -> PatternMatcher<'a, T, R> {
        PatternMatcher::new()
    }

    /// Iterate over the zero or one payloads.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.inner.as_ref())
    }

    /// Compare against a value of unknown type.
    ///
    /// A `Maybe<T>` compares structurally and a bare `T` is treated as a present
    /// value. Anything else, including a `Maybe` of another payload type, is
    /// unequal.
    pub fn equals(&self, other: &dyn Any) -> bool
    where
        T: PartialEq + 'static,
    {
        if let Some(o) = other.downcast_ref::<Maybe<T>>() {
            o == self
        } else if let Some(v) = other.downcast_ref::<T>() {
            self.inner.as_ref() == Some(v)
        } else {
            false
        }
    }

    /// The hash code of the payload under the crate's fixed hasher, or `0` if
    /// absent. See [`hash_code`](crate::hash_code).
    pub fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        self.hash_code_with(&crate::utils::default_state())
    }

    /// As [`Maybe::hash_code`] using a caller supplied hasher.
    pub fn hash_code_with<S>(&self, state: &S) -> u64
    where
        T: Hash,
        S: BuildHasher,
    {
        match &self.inner {
            Some(v) => state.hash_one(v),
            None => 0,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::none()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Some(v) => f.debug_tuple("Some").field(v).finish(),
            None => f.write_str("None"),
        }
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.inner {
            Some(v) => v.hash(state),
            None => state.write_u64(0),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::create(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.inner
    }
}

impl<T> From<Nothing> for Maybe<T> {
    fn from(_: Nothing) -> Self {
        Maybe::none()
    }
}

impl<T> PartialEq<Nothing> for Maybe<T> {
    fn eq(&self, _: &Nothing) -> bool {
        !self.has_value()
    }
}

impl<T> PartialEq<Maybe<T>> for Nothing {
    fn eq(&self, other: &Maybe<T>) -> bool {
        !other.has_value()
    }
}

/// Conversions from a native option.
pub trait OptionExt<T> {
    /// Convert into a [`Maybe`], where `None` becomes absent.
    fn to_maybe(self) -> Maybe<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn to_maybe(self) -> Maybe<T> {
        Maybe::create(self)
    }
}
