use alloc::vec::Vec;
use core::cell::Cell;

use crate::anchor::{AnchorState, apply_item_resize};
use crate::key::{KeyMap, ListKey};
use crate::scroll::{resolve_edge, resolve_item_scroll};
use crate::sizes::ItemSizes;
use crate::{
    ContentLayout, InitialScroll, ScrollBehavior, ScrollCommand, ScrollMetrics, ScrollTarget,
    ScrollToOptions, ViewportRange, ViewportState, VirtualListOptions, viewport,
};

/// A headless windowing engine for a vertical list.
///
/// The engine owns no UI objects and no item data. The host:
/// - hands it the item keys (`set_items` / `set_keys`) and the container height,
/// - forwards scroll events (`request_sync` + `sync_viewport` once per frame),
/// - forwards item resize notifications (`item_resized`),
/// - applies the [`ScrollCommand`]s it returns to the real scroll region,
/// - renders `visible_items` translated by `slice_offset` inside a box sized by
///   `content_layout`.
///
/// Derived values (start index, slice offset) are cached and invalidated explicitly by every
/// mutation; reads recompute them lazily.
#[derive(Clone, Debug)]
pub struct VirtualList<K> {
    options: VirtualListOptions<K>,
    keys: Vec<K>,
    key_index: KeyMap<K, usize>,
    sizes: ItemSizes<K>,

    scroll_offset: u64,
    container_height: Option<u32>,
    sync_pending: bool,
    anchor: AnchorState,

    start_index: Cell<Option<usize>>,
    slice_offset: Cell<Option<u64>>,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl<K: ListKey> VirtualList<K> {
    pub fn new(options: VirtualListOptions<K>) -> Self {
        vdebug!(
            item_size = options.item_size,
            item_resizable = options.item_resizable,
            padding_top = options.padding_top,
            padding_bottom = options.padding_bottom,
            "VirtualList::new"
        );
        Self {
            sizes: ItemSizes::new(options.base_size()),
            options,
            keys: Vec::new(),
            key_index: KeyMap::new(),
            scroll_offset: 0,
            container_height: None,
            sync_pending: false,
            anchor: AnchorState::default(),
            start_index: Cell::new(None),
            slice_offset: Cell::new(None),
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        }
    }

    pub fn options(&self) -> &VirtualListOptions<K> {
        &self.options
    }

    /// Replaces the options, rebuilding the size index only when the base size changed.
    pub fn set_options(&mut self, options: VirtualListOptions<K>) {
        let prev_base = self.options.base_size();
        self.options = options;
        vdebug!(
            item_size = self.options.item_size,
            item_resizable = self.options.item_resizable,
            ignore_item_resize = self.options.ignore_item_resize,
            "VirtualList::set_options"
        );
        if self.options.base_size() != prev_base {
            self.rebuild_sizes();
        }
        self.invalidate();
        self.notify();
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut VirtualListOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Self) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| alloc::sync::Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    /// Replaces the item sequence. `key_of` must return a unique, stable key per item.
    ///
    /// Measured sizes follow keys: items still present keep their recorded size.
    pub fn set_items<T>(&mut self, items: &[T], key_of: impl FnMut(&T) -> K) {
        self.set_keys(items.iter().map(key_of));
    }

    /// Same as [`Self::set_items`], from the keys directly.
    pub fn set_keys(&mut self, keys: impl IntoIterator<Item = K>) {
        self.keys.clear();
        self.keys.extend(keys);
        self.key_index.clear();
        for (index, key) in self.keys.iter().enumerate() {
            if self.key_index.insert(key.clone(), index).is_some() {
                vwarn!(index, "VirtualList::set_keys: duplicate item key");
            }
        }
        self.rebuild_sizes();
        self.invalidate();
        self.notify();
    }

    pub fn set_item_size(&mut self, item_size: u32) {
        if self.options.item_size == item_size {
            return;
        }
        self.update_options(|o| o.item_size = item_size);
    }

    pub fn set_padding(&mut self, padding_top: u32, padding_bottom: u32) {
        self.options.padding_top = padding_top;
        self.options.padding_bottom = padding_bottom;
        self.invalidate();
        self.notify();
    }

    pub fn set_item_resizable(&mut self, item_resizable: bool) {
        if self.options.item_resizable == item_resizable {
            return;
        }
        self.options.item_resizable = item_resizable;
        self.notify();
    }

    pub fn set_ignore_item_resize(&mut self, ignore_item_resize: bool) {
        self.options.ignore_item_resize = ignore_item_resize;
    }

    /// Drops every recorded measurement and resets all items to the base size.
    pub fn reset_measurements(&mut self) {
        self.sizes.clear_cache();
        self.rebuild_sizes();
        self.invalidate();
        self.notify();
    }

    /// Number of items whose recorded size differs from the base size.
    pub fn measured_len(&self) -> usize {
        self.sizes.cached_len()
    }

    /// Container resize notification.
    pub fn set_container_height(&mut self, height: u32) {
        if self.container_height == Some(height) {
            return;
        }
        vtrace!(height, "set_container_height");
        self.container_height = Some(height);
        self.notify();
    }

    pub fn container_height(&self) -> Option<u32> {
        self.container_height
    }

    /// Marks a viewport sync as pending.
    ///
    /// Returns `true` for the first call since the last [`Self::sync_viewport`]; the host should
    /// then schedule exactly one post-frame callback that calls `sync_viewport`.
    pub fn request_sync(&mut self) -> bool {
        if self.sync_pending {
            return false;
        }
        self.sync_pending = true;
        true
    }

    pub fn is_sync_pending(&self) -> bool {
        self.sync_pending
    }

    /// Applies the scroll offset read from the host at frame time.
    ///
    /// Captures the resize anchor first (the pending scroll anchor, else the start index before
    /// this sync), then updates the offset. Returns `true` when the visible range changed.
    pub fn sync_viewport(&mut self, scroll_top: u64) -> bool {
        let prev = self.visible_range();
        let start = self.start_index();
        self.anchor.capture(start);
        self.sync_pending = false;

        if self.scroll_offset != scroll_top {
            self.scroll_offset = scroll_top;
            self.invalidate();
        }

        let next = self.visible_range();
        vtrace!(
            scroll_top,
            anchor = ?self.anchor.current(),
            start = ?next.map(|r| r.start_index),
            "sync_viewport"
        );
        if next == prev {
            return false;
        }
        self.notify();
        true
    }

    /// Resolves a scroll request into a command for the host.
    ///
    /// `metrics` are the host's live scroll metrics; they only matter for debounced index/key
    /// scrolls. Returns `None` when nothing needs to move (unknown key, empty list, item already
    /// fully visible).
    pub fn scroll_to(
        &mut self,
        options: ScrollToOptions<K>,
        metrics: ScrollMetrics,
    ) -> Option<ScrollCommand> {
        let ScrollToOptions {
            target,
            behavior,
            debounce,
        } = options;
        match target {
            ScrollTarget::Position { left, top } => {
                if left.is_none() && top.is_none() {
                    return None;
                }
                Some(ScrollCommand::To {
                    left,
                    top,
                    behavior,
                })
            }
            ScrollTarget::Index(index) => self.scroll_to_index(index, behavior, debounce, metrics),
            ScrollTarget::Key(key) => {
                let Some(index) = self.index_of(&key) else {
                    vtrace!("scroll_to: unknown key");
                    return None;
                };
                self.scroll_to_index(index, behavior, debounce, metrics)
            }
            ScrollTarget::Edge(edge) => Some(resolve_edge(edge, behavior)),
        }
    }

    fn scroll_to_index(
        &mut self,
        index: usize,
        behavior: Option<ScrollBehavior>,
        debounce: bool,
        metrics: ScrollMetrics,
    ) -> Option<ScrollCommand> {
        let last = self.keys.len().checked_sub(1)?;
        let index = index.min(last);
        let item_top = self
            .sizes
            .offset_of(index)
            .saturating_add(self.options.padding_top as u64);
        let cmd = resolve_item_scroll(
            item_top,
            self.sizes.size_at(index),
            metrics,
            behavior,
            debounce,
        );
        self.anchor.set_pending(index);
        vtrace!(index, item_top, debounce, issued = cmd.is_some(), "scroll_to_index");
        cmd
    }

    /// Resolves the configured initial scroll target, if any (call once after mounting).
    pub fn initial_scroll(&mut self, metrics: ScrollMetrics) -> Option<ScrollCommand> {
        let target = match self.options.initial_scroll.clone()? {
            InitialScroll::Index(index) => ScrollTarget::Index(index),
            InitialScroll::Key(key) => ScrollTarget::Key(key),
        };
        self.scroll_to(ScrollToOptions::new(target), metrics)
    }

    /// Item resize notification: `height` is the item's new measured size.
    ///
    /// Returns a `ScrollCommand::By` when the item lies at or above the anchor item, so content
    /// already on screen does not shift. Ignored when resize tracking is off or the key is not
    /// in the current item sequence.
    pub fn item_resized(&mut self, key: &K, height: u32) -> Option<ScrollCommand> {
        if !self.options.tracks_item_resize() {
            vtrace!(height, "item_resized: resize tracking disabled");
            return None;
        }
        let Some(&index) = self.key_index.get(key) else {
            vdebug!(height, "item_resized: stale notification for unknown key");
            return None;
        };

        let outcome = apply_item_resize(&mut self.sizes, &self.anchor, index, key, height);
        if outcome.delta == 0 {
            return None;
        }
        // The scroll offset only moves on the next sync, once the host reports where it ended up.
        self.invalidate();
        self.notify();
        outcome.compensation
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.key_index.get(key).copied()
    }

    pub fn key_at(&self, index: usize) -> Option<&K> {
        self.keys.get(index)
    }

    /// Offset of item `index` from the start of the items (padding excluded).
    pub fn item_offset(&self, index: usize) -> Option<u64> {
        (index < self.len()).then(|| self.sizes.offset_of(index))
    }

    pub fn item_size(&self, index: usize) -> Option<u32> {
        (index < self.len()).then(|| self.sizes.size_at(index))
    }

    pub fn base_size(&self) -> u32 {
        self.sizes.base()
    }

    /// Scroll offset as of the last sync.
    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn viewport_state(&self) -> ViewportState {
        ViewportState {
            scroll_offset: self.scroll_offset,
            container_height: self.container_height,
            padding_top: self.options.padding_top,
            padding_bottom: self.options.padding_bottom,
        }
    }

    /// Anchor captured by the last sync, used to decide resize compensation.
    pub fn anchor_index(&self) -> Option<usize> {
        self.anchor.current()
    }

    /// Index recorded by the last index/key scroll, consumed by the next sync.
    pub fn pending_scroll_anchor(&self) -> Option<usize> {
        self.anchor.pending()
    }

    /// First item to realize (one item before the item at the scroll offset).
    pub fn start_index(&self) -> usize {
        if let Some(start) = self.start_index.get() {
            return start;
        }
        let start =
            viewport::start_index(&self.sizes, self.scroll_offset, self.options.padding_top);
        self.start_index.set(Some(start));
        start
    }

    /// Range of items to realize; `None` while the container height is unknown or the list is
    /// empty.
    pub fn visible_range(&self) -> Option<ViewportRange> {
        viewport::range_from_start(
            self.start_index(),
            self.len(),
            self.container_height,
            self.sizes.base(),
        )
    }

    /// The slice of `items` to render. `items` must be the sequence last passed to `set_items`.
    pub fn visible_items<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let Some(range) = self.visible_range() else {
            return &[];
        };
        items.get(range.indices()).unwrap_or(&[])
    }

    /// Calls `f(index, item)` for every item to render, in order.
    pub fn for_each_visible<T>(&self, items: &[T], mut f: impl FnMut(usize, &T)) {
        let Some(range) = self.visible_range() else {
            return;
        };
        for (index, item) in range.indices().zip(self.visible_items(items)) {
            f(index, item);
        }
    }

    /// Sum of all item sizes.
    pub fn total_size(&self) -> u64 {
        self.sizes.total()
    }

    /// Offset at which the rendered slice is positioned inside the items box.
    pub fn slice_offset(&self) -> u64 {
        if let Some(offset) = self.slice_offset.get() {
            return offset;
        }
        let offset = self.sizes.offset_of(self.start_index());
        self.slice_offset.set(Some(offset));
        offset
    }

    pub fn content_layout(&self) -> ContentLayout {
        ContentLayout {
            items_size: self.total_size(),
            padding_top: self.options.padding_top,
            padding_bottom: self.options.padding_bottom,
            size_is_minimum: self.options.item_resizable,
        }
    }

    fn rebuild_sizes(&mut self) {
        self.sizes.rebuild(&self.keys, self.options.base_size());
    }

    fn invalidate(&self) {
        self.start_index.set(None);
        self.slice_offset.set(None);
    }
}
