use alloc::vec::Vec;
use core::cmp;

/// A cumulative size index over `n` item sizes (binary indexed tree).
///
/// Point updates, prefix sums, and offset → index lookups all run in `O(log n)`:
///
/// - [`Fenwick::prefix_sum`] answers "where does item `i` start?"
/// - [`Fenwick::locate`] answers "which item covers scroll offset `t`?"
#[derive(Clone, Debug)]
pub struct Fenwick {
    tree: Vec<u64>, // 1-indexed
    total: u64,
    max_bit: usize,
}

impl Fenwick {
    /// Creates an index with `n` slots, each equal to `default_size`.
    pub fn new(n: usize, default_size: u32) -> Self {
        let v = default_size as u64;
        let mut tree = alloc::vec![0u64; n + 1];
        for (i, slot) in tree.iter_mut().enumerate().skip(1) {
            // tree[i] covers the lsb(i) values ending at i.
            *slot = v.saturating_mul(lsb(i) as u64);
        }
        Self {
            tree,
            total: v.saturating_mul(n as u64),
            max_bit: highest_power_of_two_leq(n),
        }
    }

    /// Builds an index from explicit sizes in `O(n)`.
    pub fn from_sizes(sizes: &[u32]) -> Self {
        let n = sizes.len();
        let mut tree = alloc::vec![0u64; n + 1];
        let mut total = 0u64;
        for i in 1..=n {
            let v = sizes[i - 1] as u64;
            total = total.saturating_add(v);
            tree[i] = tree[i].saturating_add(v);
            let j = i + lsb(i);
            if j <= n {
                tree[j] = tree[j].saturating_add(tree[i]);
            }
        }
        Self {
            tree,
            total,
            max_bit: highest_power_of_two_leq(n),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds `delta` to the size of item `index`.
    ///
    /// `index` must be `< len()`. Out-of-range calls are ignored (and debug-asserted).
    pub fn add(&mut self, index: usize, delta: i64) {
        let n = self.len();
        if index >= n {
            vwarn!(index, len = n, "Fenwick::add: out-of-range index");
            debug_assert!(index < n, "Fenwick::add out of range (i={index}, n={n})");
            return;
        }
        if delta == 0 {
            return;
        }
        if delta > 0 {
            self.total = self.total.saturating_add(delta as u64);
        } else {
            self.total = self.total.saturating_sub(delta.unsigned_abs());
        }
        let mut i = index + 1;
        while i <= n {
            let cur = self.tree[i] as i128;
            let next = cur + delta as i128;
            debug_assert!(
                next >= 0,
                "Fenwick underflow (idx={i}, cur={cur}, delta={delta})"
            );
            self.tree[i] = next.clamp(0, u64::MAX as i128) as u64;
            i += lsb(i);
        }
    }

    /// Returns the current size of item `index` (`0` when out of range).
    pub fn get(&self, index: usize) -> u32 {
        if index >= self.len() {
            return 0;
        }
        let size = self
            .prefix_sum(index + 1)
            .saturating_sub(self.prefix_sum(index));
        size.min(u32::MAX as u64) as u32
    }

    /// Returns the sum of the sizes of items `[0, count)`, i.e. the offset of item `count`.
    ///
    /// `count` is clamped to `len()`, so `prefix_sum(len())` is the total size.
    pub fn prefix_sum(&self, count: usize) -> u64 {
        let mut i = cmp::min(count, self.len());
        let mut sum = 0u64;
        while i > 0 {
            sum = sum.saturating_add(self.tree[i]);
            i &= i - 1;
        }
        sum
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the index of the item whose span `[prefix_sum(i), prefix_sum(i + 1))` contains
    /// `offset`: the smallest `i` with `prefix_sum(i + 1) > offset`.
    ///
    /// Offsets at or past the total size return `len()`; callers clamp to the last item.
    /// Zero-sized items never contain an offset and are skipped.
    pub fn locate(&self, mut offset: u64) -> usize {
        let n = self.len();
        let mut idx = 0usize;
        let mut bit = self.max_bit;
        while bit != 0 {
            let next = idx + bit;
            if next <= n && self.tree[next] <= offset {
                offset -= self.tree[next];
                idx = next;
            }
            bit >>= 1;
        }
        idx
    }
}

fn lsb(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn highest_power_of_two_leq(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    let mut p = 1usize;
    while p <= n / 2 {
        p <<= 1;
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_build_matches_from_sizes() {
        for n in 0..40usize {
            let a = Fenwick::new(n, 7);
            let b = Fenwick::from_sizes(&alloc::vec![7u32; n]);
            assert_eq!(a.total(), b.total());
            for i in 0..=n {
                assert_eq!(a.prefix_sum(i), b.prefix_sum(i), "n={n} i={i}");
            }
        }
    }

    #[test]
    fn locate_on_empty_index_is_zero() {
        let f = Fenwick::new(0, 10);
        assert_eq!(f.locate(0), 0);
        assert_eq!(f.locate(100), 0);
        assert_eq!(f.total(), 0);
    }

    #[test]
    fn locate_past_total_returns_len() {
        let f = Fenwick::new(5, 10);
        assert_eq!(f.locate(49), 4);
        assert_eq!(f.locate(50), 5);
        assert_eq!(f.locate(u64::MAX), 5);
    }

    #[test]
    fn locate_skips_zero_sized_items() {
        let f = Fenwick::from_sizes(&[10, 0, 0, 5]);
        assert_eq!(f.locate(9), 0);
        assert_eq!(f.locate(10), 3);
        assert_eq!(f.locate(14), 3);
    }

    #[test]
    fn shrinking_and_growing_keeps_total_in_sync() {
        let mut f = Fenwick::new(8, 10);
        f.add(3, -4);
        f.add(7, 12);
        assert_eq!(f.get(3), 6);
        assert_eq!(f.get(7), 22);
        assert_eq!(f.total(), 88);
        assert_eq!(f.prefix_sum(8), f.total());
    }
}
