//! Operator sugar for building a [`PatternMatcher`] with `|`.
//!
//! ```
//! use optmatch::{on_none, on_some, Maybe};
//!
//! let o = Maybe::some(1);
//! let chain = o.matcher()
//!     | on_some(|i: &i32| i.to_string())
//!     | on_none(|| "None".to_string());
//! assert_eq!(chain.result(), Ok("1".to_string()));
//! ```
//!
//! The chain never evaluates on its own. Call [`Chain::result`] or take the
//! matcher back out with [`Chain::into_matcher`]. A registration failure
//! anywhere in the chain is kept and reported by both.

use core::marker::PhantomData;
use core::ops::BitOr;

use super::PatternMatcher;
use crate::error::Error;
use crate::Maybe;

/// An absent-case handler for use with `|`.
pub struct OnNone<R, F> {
    handler: F,
    _marker: PhantomData<fn() -> R>,
}

/// A generic present-case handler for use with `|`.
pub struct OnSome<T, R, F> {
    handler: F,
    _marker: PhantomData<fn(&T) -> R>,
}

/// A literal handler for use with `|`.
pub struct OnEq<T, R, F> {
    literal: T,
    handler: F,
    _marker: PhantomData<fn() -> R>,
}

/// Wrap an absent-case handler.
pub fn on_none<R, F>(handler: F) -> OnNone<R, F>
where
    F: Fn() -> R,
{
    OnNone {
        handler,
        _marker: PhantomData,
    }
}

/// Wrap a generic present-case handler.
pub fn on_some<T, R, F>(handler: F) -> OnSome<T, R, F>
where
    F: Fn(&T) -> R,
{
    OnSome {
        handler,
        _marker: PhantomData,
    }
}

/// Wrap a handler for present values equal to `literal`.
pub fn on_eq<T, R, F>(literal: T, handler: F) -> OnEq<T, R, F>
where
    F: Fn() -> R,
{
    OnEq {
        literal,
        handler,
        _marker: PhantomData,
    }
}

/// A [`PatternMatcher`] under construction with `|`, holding the first
/// registration error if any.
pub struct Chain<'a, T, R> {
    matcher: PatternMatcher<'a, T, R>,
    error: Option<Error>,
}

impl<'a, T, R> Chain<'a, T, R> {
    fn register<F>(mut self, f: F) -> Self
    where
        F: FnOnce(&mut PatternMatcher<'a, T, R>) -> Result<(), Error>,
    {
        if self.error.is_none() {
            self.error = f(&mut self.matcher).err();
        }
        self
    }

    /// Finish the chain, returning the matcher or the first registration error.
    pub fn into_matcher(self) -> Result<PatternMatcher<'a, T, R>, Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.matcher),
        }
    }
}

impl<T, R> Chain<'_, T, R>
where
    T: PartialEq,
    R: Default,
{
    /// Evaluate against the bound value. See [`PatternMatcher::result`].
    pub fn result(&self) -> Result<R, Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.matcher.result()),
        }
    }

    /// Evaluate against `value`. See [`PatternMatcher::result_of`].
    pub fn result_of(&self, value: &Maybe<T>) -> Result<R, Error> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.matcher.result_of(value)),
        }
    }
}

impl<'a, T, R> From<PatternMatcher<'a, T, R>> for Chain<'a, T, R> {
    fn from(matcher: PatternMatcher<'a, T, R>) -> Self {
        Chain {
            matcher,
            error: None,
        }
    }
}

impl<'a, T, R, F> BitOr<OnNone<R, F>> for Chain<'a, T, R>
where
    F: Fn() -> R + 'a,
{
    type Output = Chain<'a, T, R>;

    fn bitor(self, rhs: OnNone<R, F>) -> Self::Output {
        self.register(|m| m.none(rhs.handler).map(|_| ()))
    }
}

impl<'a, T, R, F> BitOr<OnSome<T, R, F>> for Chain<'a, T, R>
where
    F: Fn(&T) -> R + 'a,
{
    type Output = Chain<'a, T, R>;

    fn bitor(self, rhs: OnSome<T, R, F>) -> Self::Output {
        self.register(|m| m.some(rhs.handler).map(|_| ()))
    }
}

impl<'a, T, R, F> BitOr<OnEq<T, R, F>> for Chain<'a, T, R>
where
    T: PartialEq,
    F: Fn() -> R + 'a,
{
    type Output = Chain<'a, T, R>;

    fn bitor(self, rhs: OnEq<T, R, F>) -> Self::Output {
        self.register(|m| m.some_eq(rhs.literal, rhs.handler).map(|_| ()))
    }
}

impl<'a, T, R, F> BitOr<OnNone<R, F>> for PatternMatcher<'a, T, R>
where
    F: Fn() -> R + 'a,
{
    type Output = Chain<'a, T, R>;

    fn bitor(self, rhs: OnNone<R, F>) -> Self::Output {
        Chain::from(self) | rhs
    }
}

impl<'a, T, R, F> BitOr<OnSome<T, R, F>> for PatternMatcher<'a, T, R>
where
    F: Fn(&T) -> R + 'a,
{
    type Output = Chain<'a, T, R>;

    fn bitor(self, rhs: OnSome<T, R, F>) -> Self::Output {
        Chain::from(self) | rhs
    }
}

impl<'a, T, R, F> BitOr<OnEq<T, R, F>> for PatternMatcher<'a, T, R>
where
    T: PartialEq,
    F: Fn() -> R + 'a,
{
    type Output = Chain<'a, T, R>;

    fn bitor(self, rhs: OnEq<T, R, F>) -> Self::Output {
        Chain::from(self) | rhs
    }
}
