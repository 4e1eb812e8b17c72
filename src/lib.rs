//! Optmatch - an optional value with deferred pattern matching
//!
//! [`Maybe<T>`] holds either a present payload or nothing. It sits on top of the
//! native `Option<T>` and makes the contracts around absence explicit:
//!
//! * [`Maybe::some`] always wraps a value, and [`Maybe::try_some`] rejects an
//!   absent input with [`Error::InvalidArgument`].
//! * [`Maybe::create`], `From<Option<T>>` and [`OptionExt::to_maybe`] turn an
//!   absent input into an absent `Maybe`.
//! * [`Nothing`] is the absent value of every `Maybe<T>`, and compares equal to
//!   any absent `Maybe`.
//!
//! A `Maybe` is a sequence of zero or one payloads, so the usual iterator
//! adaptors apply to it, and [`flatten`] drops the absent values from a
//! sequence of them.
//!
//! Matching can be immediate with [`Maybe::match_with`], or deferred with a
//! [`PatternMatcher`]. A pattern matcher collects handlers for the absent case,
//! the present case and specific literal payloads, and is evaluated on demand
//! against as many values as needed. It locks against new handlers once first
//! evaluated.
//!
//! ```
//! use optmatch::{Maybe, PatternMatcher};
//!
//! # fn main() -> Result<(), optmatch::Error> {
//! let mut describe = PatternMatcher::new();
//! describe
//!     .none(|| "nothing".to_string())?
//!     .some(|v: &i32| format!("the number {v}"))?
//!     .some_eq(0, || "zero".to_string())?;
//!
//! assert_eq!(describe.result_of(&Maybe::some(0)), "zero");
//! assert_eq!(describe.result_of(&Maybe::some(3)), "the number 3");
//! assert_eq!(describe.result_of(&Maybe::none()), "nothing");
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! * `foldhash` - use foldhash for [`hash_code`] (default)
//! * `ahash` - use ahash for [`hash_code`]
//!
//! With neither enabled the std `DefaultHasher` is used.

#![deny(warnings)]
#![warn(unused_extern_crates)]
#![warn(missing_docs)]
#![allow(clippy::needless_lifetimes)]

pub mod error;
pub mod matcher;
pub mod maybe;

mod utils;

pub use error::{Error, Misuse};
pub use matcher::{
    on_eq, on_none, on_some, ActionMatcher, Chain, PatternMatcher, SealedMatcher,
};
pub use maybe::{flatten, Maybe, MaybeIterExt, Nothing, OptionExt};
pub use utils::hash_code;
