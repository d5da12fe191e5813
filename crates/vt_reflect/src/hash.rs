//! Hash containers with a fixed hasher, re-exports *hashbrown* and *foldhash*.
//!
//! Field-name and token lookups only need stable, fast hashing of short
//! strings, so every container in the workspace uses [`FixedHashState`].

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

/// A fixed hash seed.
const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x6C8E_9CF5_7093_2BD1);

/// A hasher whose results only depend on the input.
pub type FixedHasher = FoldHasher<'static>;

/// Fixed hash state based upon a random but fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::BuildHasher;
/// use vt_reflect::hash::FixedHashState;
///
/// assert_eq!(FixedHashState.hash_one("id"), FixedHashState.hash_one("id"));
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

/// A [`hashbrown::HashMap`] using [`FixedHashState`].
pub type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`].
pub type HashSet<T> = hashbrown::HashSet<T, FixedHashState>;

pub use foldhash;
pub use hashbrown;
