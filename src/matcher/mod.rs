//! PatternMatcher - a deferred, reusable matcher over [`Maybe`] values
//!
//! A matcher is built by registering handlers for the absent case, the generic
//! present case, and for specific literal payloads. Nothing runs until the
//! matcher is evaluated, and it can then be evaluated any number of times
//! against different values.
//!
//! A matcher has two states. While `Building` it accepts registrations. The
//! first evaluation moves it to `Evaluated`, after which every registration is
//! rejected with [`Misuse::Evaluated`]. Callers that want the lock enforced by
//! the type system can [`seal`](PatternMatcher::seal) the builder instead, which
//! yields a [`SealedMatcher`] that has no registration methods at all.
//!
//! # Examples
//! ```
//! use optmatch::{Maybe, PatternMatcher};
//!
//! # fn main() -> Result<(), optmatch::Error> {
//! let mut matcher = PatternMatcher::new();
//! matcher
//!     .none(|| "none")?
//!     .some(|_: &i32| "some")?
//!     .some_eq(1, || "one")?;
//!
//! assert_eq!(matcher.result_of(&Maybe::none()), "none");
//! assert_eq!(matcher.result_of(&Maybe::some(5)), "some");
//! assert_eq!(matcher.result_of(&Maybe::some(1)), "one");
//!
//! // Locked after the first evaluation.
//! assert!(matcher.none(|| "again").is_err());
//! # Ok(())
//! # }
//! ```

mod chain;

pub use self::chain::{on_eq, on_none, on_some, Chain, OnEq, OnNone, OnSome};

use core::fmt;
use core::cell::Cell;

use smallvec::SmallVec;
use tracing::trace;

use crate::error::{Error, Misuse};
use crate::Maybe;

// Most matchers name a handful of literals at most.
const LITERAL_INLINE: usize = 4;

type NoneHandler<'a, R> = Box<dyn Fn() -> R + 'a>;
type SomeHandler<'a, T, R> = Box<dyn Fn(&T) -> R + 'a>;

/// A matcher whose handlers return nothing.
pub type ActionMatcher<'a, T> = PatternMatcher<'a, T, ()>;

struct Handlers<'a, T, R> {
    on_none: Option<NoneHandler<'a, R>>,
    on_some: Option<SomeHandler<'a, T, R>>,
    literals: SmallVec<[(T, NoneHandler<'a, R>); LITERAL_INLINE]>,
}

impl<T, R> Handlers<'_, T, R>
where
    T: PartialEq,
    R: Default,
{
    fn dispatch(&self, target: Option<&Maybe<T>>) -> R {
        match target.and_then(Maybe::try_value) {
            None => match &self.on_none {
                Some(h) => h(),
                None => {
                    trace!("no None handler registered, returning default");
                    R::default()
                }
            },
            Some(v) => {
                if let Some((_, h)) = self.literals.iter().find(|(lit, _)| lit == v) {
                    return h();
                }
                match &self.on_some {
                    Some(h) => h(v),
                    None => {
                        trace!("no Some handler matched, returning default");
                        R::default()
                    }
                }
            }
        }
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Handlers<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("none", &self.on_none.is_some())
            .field("some", &self.on_some.is_some())
            .field(
                "literals",
                &self.literals.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// A deferred matcher over [`Maybe<T>`] values, returning `R` from each
/// evaluation.
///
/// When no handler applies to a value, evaluation returns `R::default()`.
pub struct PatternMatcher<'a, T, R = ()> {
    bound: Option<&'a Maybe<T>>,
    handlers: Handlers<'a, T, R>,
    evaluated: Cell<bool>,
}

/// A matcher that can only be evaluated. See [`PatternMatcher::seal`].
pub struct SealedMatcher<'a, T, R = ()> {
    bound: Option<&'a Maybe<T>>,
    handlers: Handlers<'a, T, R>,
}

impl<'a, T, R> PatternMatcher<'a, T, R> {
    /// Create a matcher with no bound value.
    pub fn new() -> Self {
        PatternMatcher {
            bound: None,
            handlers: Handlers {
                on_none: None,
                on_some: None,
                literals: SmallVec::new(),
            },
            evaluated: Cell::new(false),
        }
    }

    /// Create a matcher bound to `value`, which is used whenever the matcher is
    /// evaluated without an explicit value.
    pub fn bound(value: &'a Maybe<T>) -> Self {
        PatternMatcher {
            bound: Some(value),
            ..Self::new()
        }
    }

    /// True once the matcher has been evaluated and no longer accepts handlers.
    pub fn is_evaluated(&self) -> bool {
        self.evaluated.get()
    }

    fn check_building(&self) -> Result<(), Error> {
        if self.is_evaluated() {
            trace!("registration rejected, matcher already evaluated");
            Err(Misuse::Evaluated.into())
        } else {
            Ok(())
        }
    }

    /// Register the handler for absent values.
    ///
    /// Fails with [`Misuse::NoneHandlerSet`] if one is already registered, or
    /// [`Misuse::Evaluated`] once the matcher has been evaluated.
    pub fn none<F>(&mut self, handler: F) -> Result<&mut Self, Error>
    where
        F: Fn() -> R + 'a,
    {
        self.check_building()?;
        if self.handlers.on_none.is_some() {
            trace!("registration rejected, None handler already set");
            return Err(Misuse::NoneHandlerSet.into());
        }
        self.handlers.on_none = Some(Box::new(handler));
        Ok(self)
    }

    /// Register the handler for present values that no literal handler claims.
    ///
    /// Fails with [`Misuse::SomeHandlerSet`] if one is already registered, or
    /// [`Misuse::Evaluated`] once the matcher has been evaluated.
    pub fn some<F>(&mut self, handler: F) -> Result<&mut Self, Error>
    where
        F: Fn(&T) -> R + 'a,
    {
        self.check_building()?;
        if self.handlers.on_some.is_some() {
            trace!("registration rejected, Some handler already set");
            return Err(Misuse::SomeHandlerSet.into());
        }
        self.handlers.on_some = Some(Box::new(handler));
        Ok(self)
    }

    /// Register a handler for present values equal to `literal`. Literal
    /// handlers take priority over the generic [`some`](Self::some) handler.
    ///
    /// Fails with [`Misuse::DuplicateLiteral`] if `literal` already has a
    /// handler, or [`Misuse::Evaluated`] once the matcher has been evaluated.
    pub fn some_eq<F>(&mut self, literal: T, handler: F) -> Result<&mut Self, Error>
    where
        T: PartialEq,
        F: Fn() -> R + 'a,
    {
        self.check_building()?;
        if self.handlers.literals.iter().any(|(k, _)| *k == literal) {
            trace!("registration rejected, literal already registered");
            return Err(Misuse::DuplicateLiteral.into());
        }
        self.handlers.literals.push((literal, Box::new(handler)));
        Ok(self)
    }

    /// Lock the matcher into a form that can only be evaluated.
    pub fn seal(self) -> SealedMatcher<'a, T, R> {
        SealedMatcher {
            bound: self.bound,
            handlers: self.handlers,
        }
    }
}

impl<'a, T, R> PatternMatcher<'a, T, R>
where
    T: PartialEq,
    R: Default,
{
    /// Evaluate against `value`, or the bound value when `value` is `None`. A
    /// matcher with neither evaluates as if given an absent value.
    ///
    /// The first evaluation locks the matcher against further registration.
    pub fn evaluate(&self, value: Option<&Maybe<T>>) -> R {
        if !self.evaluated.replace(true) {
            trace!("matcher evaluated, registration is now locked");
        }
        self.handlers.dispatch(value.or(self.bound))
    }

    /// Evaluate against the bound value, or as absent if unbound.
    pub fn result(&self) -> R {
        self.evaluate(None)
    }

    /// Evaluate against `value`.
    pub fn result_of(&self, value: &Maybe<T>) -> R {
        self.evaluate(Some(value))
    }
}

impl<T, R> Default for PatternMatcher<'_, T, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, R> fmt::Debug for PatternMatcher<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternMatcher")
            .field("bound", &self.bound)
            .field("handlers", &self.handlers)
            .field("evaluated", &self.is_evaluated())
            .finish()
    }
}

impl<T, R> SealedMatcher<'_, T, R>
where
    T: PartialEq,
    R: Default,
{
    /// See [`PatternMatcher::evaluate`].
    pub fn evaluate(&self, value: Option<&Maybe<T>>) -> R {
        self.handlers.dispatch(value.or(self.bound))
    }

    /// See [`PatternMatcher::result`].
    pub fn result(&self) -> R {
        self.evaluate(None)
    }

    /// See [`PatternMatcher::result_of`].
    pub fn result_of(&self, value: &Maybe<T>) -> R {
        self.evaluate(Some(value))
    }
}

impl<T: fmt::Debug, R> fmt::Debug for SealedMatcher<'_, T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SealedMatcher")
            .field("bound", &self.bound)
            .field("handlers", &self.handlers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::PatternMatcher;
    use crate::error::{Error, Misuse};
    use crate::Maybe;
    use std::cell::Cell;

    #[derive(Default)]
    struct Hits {
        none: Cell<bool>,
        some: Cell<bool>,
        one: Cell<bool>,
    }

    impl Hits {
        fn reset(&self) {
            self.none.set(false);
            self.some.set(false);
            self.one.set(false);
        }

        fn get(&self) -> (bool, bool, bool) {
            (self.none.get(), self.some.get(), self.one.get())
        }
    }

    #[test]
    fn test_action_matcher() {
        let _ = tracing_subscriber::fmt::try_init();
        let option_none: Maybe<i32> = Maybe::none();
        let option_some = Maybe::some(10);
        let option_one = Maybe::some(1);

        let hits = Hits::default();

        let mut static_matcher = Maybe::<i32>::pattern_match();
        static_matcher
            .none(|| hits.none.set(true))
            .unwrap()
            .some_eq(1, || hits.one.set(true))
            .unwrap()
            .some(|_| hits.some.set(true))
            .unwrap();

        let mut matcher = option_some.matcher();
        matcher
            .none(|| hits.none.set(true))
            .unwrap()
            .some_eq(1, || hits.one.set(true))
            .unwrap()
            .some(|_| hits.some.set(true))
            .unwrap();

        static_matcher.result();
        assert_eq!(hits.get(), (true, false, false));
        hits.reset();

        static_matcher.evaluate(None);
        assert_eq!(hits.get(), (true, false, false));
        hits.reset();

        matcher.result();
        assert_eq!(hits.get(), (false, true, false));
        hits.reset();

        matcher.result_of(&option_none);
        assert_eq!(hits.get(), (true, false, false));
        hits.reset();

        matcher.result_of(&option_some);
        assert_eq!(hits.get(), (false, true, false));
        hits.reset();

        matcher.result_of(&option_one);
        assert_eq!(hits.get(), (false, false, true));

        let locked = Error::InvalidOperation(Misuse::Evaluated);
        assert_eq!(matcher.none(|| ()).err(), Some(locked));
        assert_eq!(matcher.some(|_| ()).err(), Some(locked));
        assert_eq!(matcher.some_eq(1, || ()).err(), Some(locked));
    }

    #[test]
    fn test_value_matcher() {
        let option_none: Maybe<i32> = Maybe::none();
        let option_some = Maybe::some(10);
        let option_one = Maybe::some(1);

        let static_matcher: PatternMatcher<'_, i32, i32> = Maybe::pattern_match();

        let mut matcher = option_some.matcher();
        matcher
            .none(|| 0)
            .unwrap()
            .some(|_| 1)
            .unwrap()
            .some_eq(1, || 2)
            .unwrap();

        assert_eq!(static_matcher.result(), 0);
        assert_eq!(static_matcher.evaluate(None), 0);
        assert_eq!(matcher.result(), 1);
        assert_eq!(matcher.result_of(&option_none), 0);
        assert_eq!(matcher.result_of(&option_some), 1);
        assert_eq!(matcher.result_of(&option_one), 2);

        assert!(matcher.none(|| 0).unwrap_err().is_invalid_operation());
        assert!(matcher.some(|_| 1).unwrap_err().is_invalid_operation());
        assert!(matcher.some_eq(1, || 2).unwrap_err().is_invalid_operation());
    }

    #[test]
    fn test_duplicate_registration() {
        let mut matcher: PatternMatcher<'_, i32, i32> = PatternMatcher::new();
        matcher.none(|| 0).unwrap();
        matcher.some(|v| *v).unwrap();
        matcher.some_eq(3, || 30).unwrap();
        matcher.some_eq(4, || 40).unwrap();

        assert_eq!(
            matcher.none(|| 1).err(),
            Some(Error::InvalidOperation(Misuse::NoneHandlerSet))
        );
        assert_eq!(
            matcher.some(|_| 1).err(),
            Some(Error::InvalidOperation(Misuse::SomeHandlerSet))
        );
        assert_eq!(
            matcher.some_eq(3, || 31).err(),
            Some(Error::InvalidOperation(Misuse::DuplicateLiteral))
        );
        // Rejected registrations leave the matcher usable and unchanged.
        assert!(!matcher.is_evaluated());
        assert_eq!(matcher.result_of(&Maybe::some(3)), 30);
        assert_eq!(matcher.result_of(&Maybe::some(4)), 40);
        assert_eq!(matcher.result_of(&Maybe::some(5)), 5);
        assert!(matcher.is_evaluated());
    }

    #[test]
    fn test_unmatched_defaults() {
        let mut only_literal: PatternMatcher<'_, &str, usize> = PatternMatcher::new();
        only_literal.some_eq("a", || 1).unwrap();
        assert_eq!(only_literal.result_of(&Maybe::some("a")), 1);
        assert_eq!(only_literal.result_of(&Maybe::some("b")), 0);
        assert_eq!(only_literal.result_of(&Maybe::none()), 0);
    }

    #[test]
    fn test_bound_overridden() {
        let bound = Maybe::some(7);
        let mut matcher = bound.matcher();
        matcher.some(|v| *v * 2).unwrap().none(|| -1).unwrap();

        assert_eq!(matcher.result(), 14);
        assert_eq!(matcher.evaluate(None), 14);
        assert_eq!(matcher.evaluate(Some(&Maybe::some(2))), 4);
        assert_eq!(matcher.evaluate(Some(&Maybe::none())), -1);
    }

    #[test]
    fn test_sealed() {
        let mut matcher = PatternMatcher::new();
        matcher.none(|| "none").unwrap().some(|_: &u8| "some").unwrap();
        let sealed = matcher.seal();
        assert_eq!(sealed.result(), "none");
        assert_eq!(sealed.result_of(&Maybe::some(1)), "some");
        assert_eq!(sealed.evaluate(Some(&Maybe::none())), "none");
    }

    #[test]
    fn test_debug() {
        let mut matcher: PatternMatcher<'_, i32, ()> = PatternMatcher::default();
        matcher.some_eq(2, || ()).unwrap();
        let s = format!("{:?}", matcher);
        assert!(s.contains("literals: [2]"));
        assert!(s.contains("evaluated: false"));
    }
}
