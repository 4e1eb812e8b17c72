use core::hash::{BuildHasher, Hash};

#[cfg(feature = "ahash")]
pub(crate) type DefaultState = ahash::RandomState;

#[cfg(all(feature = "foldhash", not(feature = "ahash")))]
pub(crate) type DefaultState = foldhash::fast::FixedState;

#[cfg(all(not(feature = "ahash"), not(feature = "foldhash")))]
pub(crate) type DefaultState =
    core::hash::BuildHasherDefault<std::collections::hash_map::DefaultHasher>;

// Every state must be seeded identically between calls, otherwise hash codes
// of equal values drift apart.
#[cfg(feature = "ahash")]
pub(crate) fn default_state() -> DefaultState {
    ahash::RandomState::with_seeds(0, 0, 0, 0)
}

#[cfg(all(feature = "foldhash", not(feature = "ahash")))]
pub(crate) fn default_state() -> DefaultState {
    foldhash::fast::FixedState::with_seed(0)
}

#[cfg(all(not(feature = "ahash"), not(feature = "foldhash")))]
pub(crate) fn default_state() -> DefaultState {
    DefaultState::default()
}

/// Hash a value with the crate's fixed-seed hasher.
///
/// A present [`Maybe`](crate::Maybe) reports exactly this value from
/// [`Maybe::hash_code`](crate::Maybe::hash_code).
pub fn hash_code<T: Hash + ?Sized>(value: &T) -> u64 {
    default_state().hash_one(value)
}
