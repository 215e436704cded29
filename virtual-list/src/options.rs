use alloc::sync::Arc;

use crate::virtual_list::VirtualList;

/// A callback fired when the engine's observable output changes (visible range, total size,
/// or slice offset).
pub type OnChangeCallback<K> = Arc<dyn Fn(&VirtualList<K>) + Send + Sync>;

/// Where to scroll when the list is first mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialScroll<K> {
    Index(usize),
    Key(K),
}

/// Configuration for [`crate::VirtualList`].
pub struct VirtualListOptions<K> {
    /// Base (estimated) item size. Items that were never measured use it, and the visible range
    /// end is estimated from it. Clamped to at least `1`.
    pub item_size: u32,
    /// Space before the first item.
    pub padding_top: u32,
    /// Space after the last item.
    pub padding_bottom: u32,
    /// Enables per-item resize tracking. When off, resize notifications are ignored and the
    /// content size is exact.
    pub item_resizable: bool,
    /// Ignores resize notifications even when `item_resizable` is on (the content size stays a
    /// minimum).
    pub ignore_item_resize: bool,
    /// Applied once by [`crate::VirtualList::initial_scroll`].
    pub initial_scroll: Option<InitialScroll<K>>,
    pub on_change: Option<OnChangeCallback<K>>,
}

impl<K: Clone> Clone for VirtualListOptions<K> {
    fn clone(&self) -> Self {
        Self {
            item_size: self.item_size,
            padding_top: self.padding_top,
            padding_bottom: self.padding_bottom,
            item_resizable: self.item_resizable,
            ignore_item_resize: self.ignore_item_resize,
            initial_scroll: self.initial_scroll.clone(),
            on_change: self.on_change.clone(),
        }
    }
}

impl<K> VirtualListOptions<K> {
    pub fn new(item_size: u32) -> Self {
        Self {
            item_size,
            padding_top: 0,
            padding_bottom: 0,
            item_resizable: false,
            ignore_item_resize: false,
            initial_scroll: None,
            on_change: None,
        }
    }

    pub(crate) fn base_size(&self) -> u32 {
        self.item_size.max(1)
    }

    pub(crate) fn tracks_item_resize(&self) -> bool {
        self.item_resizable && !self.ignore_item_resize
    }

    pub fn with_item_size(mut self, item_size: u32) -> Self {
        self.item_size = item_size;
        self
    }

    pub fn with_padding(mut self, padding_top: u32, padding_bottom: u32) -> Self {
        self.padding_top = padding_top;
        self.padding_bottom = padding_bottom;
        self
    }

    pub fn with_item_resizable(mut self, item_resizable: bool) -> Self {
        self.item_resizable = item_resizable;
        self
    }

    pub fn with_ignore_item_resize(mut self, ignore_item_resize: bool) -> Self {
        self.ignore_item_resize = ignore_item_resize;
        self
    }

    pub fn with_initial_scroll(mut self, initial_scroll: Option<InitialScroll<K>>) -> Self {
        self.initial_scroll = initial_scroll;
        self
    }

    pub fn with_initial_scroll_index(mut self, index: usize) -> Self {
        self.initial_scroll = Some(InitialScroll::Index(index));
        self
    }

    pub fn with_initial_scroll_key(mut self, key: K) -> Self {
        self.initial_scroll = Some(InitialScroll::Key(key));
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&VirtualList<K>) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl<K: core::fmt::Debug> core::fmt::Debug for VirtualListOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualListOptions")
            .field("item_size", &self.item_size)
            .field("padding_top", &self.padding_top)
            .field("padding_bottom", &self.padding_bottom)
            .field("item_resizable", &self.item_resizable)
            .field("ignore_item_resize", &self.ignore_item_resize)
            .field("initial_scroll", &self.initial_scroll)
            .finish_non_exhaustive()
    }
}
