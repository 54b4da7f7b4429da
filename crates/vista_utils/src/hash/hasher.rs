//! Hash states used by the `vista` containers.
//!
//! - [`FixedHashState`]: *foldhash* with a constant seed, results depend only on the input.
//! - [`NoOpHashState`]: passes a single `u64` write straight through, meant for keys
//!   that are already well distributed (such as `TypeId`).

use core::hash::{BuildHasher, Hash, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

const SEED: FixedState = FixedState::with_seed(0x5EED_0F_71_57A5_2B1D);

/// The hasher produced by [`FixedHashState`].
pub type FixedHasher = FoldHasher<'static>;

/// A deterministic hash state based on *foldhash*.
///
/// # Examples
///
/// ```
/// use vista_utils::hash::FixedHashState;
///
/// let a = FixedHashState::hash_one("id");
/// let b = FixedHashState::hash_one("id");
/// assert_eq!(a, b);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl FixedHashState {
    /// Hashes a single value with the fixed seed.
    #[inline]
    pub fn hash_one<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut hasher = FixedHashState.build_hasher();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        SEED.build_hasher()
    }
}

// -----------------------------------------------------------------------------
// NoOpHasher

/// A hasher that stores the last `u64` it was given.
///
/// Byte writes are folded in reverse order, so `write_u32(7)` and
/// `write_u64(7)` agree when only one of them is called.
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHasher {
    hash: u64,
}

impl Hasher for NoOpHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }
}

/// Builds [`NoOpHasher`]s.
///
/// ```
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use vista_utils::hash::NoOpHashState;
///
/// let mut hasher = NoOpHashState.build_hasher();
/// 42_u64.hash(&mut hasher);
/// assert_eq!(hasher.finish(), 42);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct NoOpHashState;

impl BuildHasher for NoOpHashState {
    type Hasher = NoOpHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        NoOpHasher { hash: 0 }
    }
}
