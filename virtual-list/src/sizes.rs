use alloc::vec::Vec;

use crate::fenwick::Fenwick;
use crate::key::{KeyMap, ListKey};

/// Per-item sizes: a dense [`Fenwick`] index plus a sparse key → delta cache.
///
/// The cache stores `measured - base` only for items whose measured size differs from the base
/// size. It is keyed by identity, so it survives reorders and removals, and the dense index can
/// be rebuilt from it whenever the item sequence changes.
#[derive(Clone, Debug)]
pub(crate) struct ItemSizes<K> {
    base: u32,
    sums: Fenwick,
    deltas: KeyMap<K, i64>,
}

impl<K: ListKey> ItemSizes<K> {
    pub(crate) fn new(base: u32) -> Self {
        Self {
            base,
            sums: Fenwick::new(0, base),
            deltas: KeyMap::new(),
        }
    }

    /// Rebuilds the dense index for `keys`: every slot starts at `base`, then cached deltas of
    /// keys still present are reapplied.
    pub(crate) fn rebuild(&mut self, keys: &[K], base: u32) {
        self.base = base;
        let mut sizes: Vec<u32> = alloc::vec![base; keys.len()];
        let mut reapplied = 0usize;
        for (size, key) in sizes.iter_mut().zip(keys) {
            if let Some(&delta) = self.deltas.get(key) {
                *size = apply_delta(base, delta);
                reapplied += 1;
            }
        }
        vdebug!(
            count = keys.len(),
            base,
            cached = self.deltas.len(),
            reapplied,
            "ItemSizes::rebuild"
        );
        self.sums = Fenwick::from_sizes(&sizes);
    }

    /// Records the measured `height` of `key` relative to the base size.
    pub(crate) fn record(&mut self, key: &K, height: u32) {
        let delta = height as i64 - self.base as i64;
        if delta == 0 {
            self.deltas.remove(key);
        } else {
            self.deltas.insert(key.clone(), delta);
        }
    }

    pub(crate) fn clear_cache(&mut self) {
        self.deltas.clear();
    }

    pub(crate) fn cached_len(&self) -> usize {
        self.deltas.len()
    }

    pub(crate) fn base(&self) -> u32 {
        self.base
    }

    pub(crate) fn adjust(&mut self, index: usize, delta: i64) {
        self.sums.add(index, delta);
    }

    pub(crate) fn size_at(&self, index: usize) -> u32 {
        self.sums.get(index)
    }

    pub(crate) fn offset_of(&self, index: usize) -> u64 {
        self.sums.prefix_sum(index)
    }

    pub(crate) fn locate(&self, offset: u64) -> usize {
        self.sums.locate(offset)
    }

    pub(crate) fn total(&self) -> u64 {
        self.sums.total()
    }
}

fn apply_delta(base: u32, delta: i64) -> u32 {
    (base as i64 + delta).clamp(0, u32::MAX as i64) as u32
}
