#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
pub(crate) type RowKeySet<'a, K> = HashSet<&'a K>;
#[cfg(not(feature = "std"))]
pub(crate) type RowKeySet<'a, K> = BTreeSet<&'a K>;

/// Bound for row keys returned by a [`crate::RowKeySelector`].
#[cfg(feature = "std")]
#[doc(hidden)]
pub trait RowKey: core::hash::Hash + Eq + Clone + core::fmt::Debug {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq + Clone + core::fmt::Debug> RowKey for K {}

#[cfg(not(feature = "std"))]
#[doc(hidden)]
pub trait RowKey: Ord + Clone + core::fmt::Debug {}
#[cfg(not(feature = "std"))]
impl<K: Ord + Clone + core::fmt::Debug> RowKey for K {}
