use crate::ScrollCommand;
use crate::key::ListKey;
use crate::sizes::ItemSizes;

/// Anchor bookkeeping for resize compensation.
///
/// `pending` is set by index/key scrolls; `current` is captured once per viewport sync as
/// `pending.take()` falling back to the start index seen before the sync. Resizes at or above
/// `current` shift already-visible content and get compensated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct AnchorState {
    pending: Option<usize>,
    current: Option<usize>,
}

impl AnchorState {
    pub(crate) fn set_pending(&mut self, index: usize) {
        self.pending = Some(index);
    }

    pub(crate) fn pending(&self) -> Option<usize> {
        self.pending
    }

    pub(crate) fn current(&self) -> Option<usize> {
        self.current
    }

    pub(crate) fn capture(&mut self, start_index: usize) {
        self.current = Some(self.pending.take().unwrap_or(start_index));
    }
}

/// The effect of a single item resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ResizeOutcome {
    /// Size change applied to the index (`0` when the index already held `height`).
    pub(crate) delta: i64,
    pub(crate) compensation: Option<ScrollCommand>,
}

/// Records the measured `height` of the item `key` at `index` and applies the difference to the
/// size index, compensating the scroll offset when the item sits at or above the anchor.
pub(crate) fn apply_item_resize<K: ListKey>(
    sizes: &mut ItemSizes<K>,
    anchor: &AnchorState,
    index: usize,
    key: &K,
    height: u32,
) -> ResizeOutcome {
    sizes.record(key, height);

    let delta = height as i64 - sizes.size_at(index) as i64;
    if delta == 0 {
        return ResizeOutcome::default();
    }

    let compensation = match anchor.current() {
        Some(anchor_index) if index <= anchor_index => {
            vtrace!(index, anchor_index, delta, "resize above anchor, scrolling by delta");
            Some(ScrollCommand::By { top: delta })
        }
        _ => None,
    };
    sizes.adjust(index, delta);
    ResizeOutcome {
        delta,
        compensation,
    }
}
