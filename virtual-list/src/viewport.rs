//! Visible range computation.
//!
//! The range is derived in two steps so the engine can memoize the first one:
//!
//! 1. [`start_index`] maps the scroll offset to the first item to realize, plus one leading
//!    item.
//! 2. [`range_from_start`] estimates how many items fit using the *base* size. This
//!    over-provisions when measured items are smaller than the base and may under-provision
//!    when they are larger.

use crate::ViewportRange;
use crate::key::ListKey;
use crate::sizes::ItemSizes;

pub(crate) fn start_index<K: ListKey>(
    sizes: &ItemSizes<K>,
    scroll_offset: u64,
    padding_top: u32,
) -> usize {
    let offset = scroll_offset.saturating_sub(padding_top as u64);
    sizes.locate(offset).saturating_sub(1)
}

/// Returns `None` while the container height is unknown, for an empty list, or when
/// `start_index` is past the last item.
pub(crate) fn range_from_start(
    start_index: usize,
    count: usize,
    container_height: Option<u32>,
    base_size: u32,
) -> Option<ViewportRange> {
    let height = container_height?;
    let last = count.checked_sub(1)?;
    let fits = height.div_ceil(base_size.max(1)) as usize + 1;
    let end_index = start_index.saturating_add(fits).min(last);
    if start_index > end_index {
        return None;
    }
    Some(ViewportRange {
        start_index,
        end_index,
    })
}
