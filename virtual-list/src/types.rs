/// Scroll offset sentinel for "scroll to the very end".
///
/// A real scroll region clamps it to its actual scrollable extent.
pub const SCROLL_END: u64 = u64::MAX;

/// The contiguous slice of items to realize.
///
/// Both ends are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportRange {
    pub start_index: usize,
    pub end_index: usize,
}

impl ViewportRange {
    /// Number of items in the range. Ranges produced by the engine are never empty.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.end_index - self.start_index + 1
    }

    /// `true` for an inverted range (`start_index > end_index`).
    pub fn is_empty(&self) -> bool {
        self.start_index > self.end_index
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }

    pub fn indices(&self) -> core::ops::RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

/// A snapshot of the viewport geometry the engine last observed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: u64,
    /// `None` until the container has been measured.
    pub container_height: Option<u32>,
    pub padding_top: u32,
    pub padding_bottom: u32,
}

/// Live scroll metrics reported by the host's scroll region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub scroll_top: u64,
    pub view_height: u32,
}

/// Sizing of the items container.
///
/// Rendered items are placed inside a box of `items_size` (plus padding); the visible slice is
/// then translated by [`crate::VirtualList::slice_offset`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentLayout {
    /// Sum of all item sizes (padding excluded).
    pub items_size: u64,
    pub padding_top: u32,
    pub padding_bottom: u32,
    /// When items are resizable, `items_size` is a lower bound (e.g. `min-height`) rather
    /// than an exact size.
    pub size_is_minimum: bool,
}

impl ContentLayout {
    /// Total scrollable extent, padding included.
    pub fn scroll_height(&self) -> u64 {
        self.items_size
            .saturating_add(self.padding_top as u64)
            .saturating_add(self.padding_bottom as u64)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Instant,
    Smooth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Bottom,
}

/// An imperative command for the host's scroll region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollCommand {
    /// Scroll to an absolute position. `None` axes are left untouched.
    To {
        left: Option<u64>,
        top: Option<u64>,
        behavior: Option<ScrollBehavior>,
    },
    /// Scroll vertically by a relative amount.
    By { top: i64 },
}

impl ScrollCommand {
    pub(crate) fn to_top(top: u64, behavior: Option<ScrollBehavior>) -> Self {
        Self::To {
            left: Some(0),
            top: Some(top),
            behavior,
        }
    }
}
