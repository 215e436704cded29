#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

/// Bound for item keys: hashable with `std`, ordered without it.
///
/// Keys are cloned into the engine's key → index map, so they should be cheap to clone
/// (integers, `Arc<str>`, short strings).
#[cfg(feature = "std")]
pub trait ListKey: core::hash::Hash + Eq + Clone {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone> ListKey for K {}

#[cfg(not(feature = "std"))]
pub trait ListKey: Ord + Clone {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone> ListKey for K {}
