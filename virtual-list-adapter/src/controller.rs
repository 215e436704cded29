use virtual_list::{ListKey, ScrollToOptions, VirtualList, VirtualListOptions};

use crate::{FrameScheduler, ScrollSurface};

/// A framework-neutral controller that wires a [`VirtualList`] to a host scroll region.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` for every native scroll event (coalesced into one frame request)
/// - `on_frame` when the requested frame fires
/// - `on_container_resize` / `on_item_resize` for size notifications
///
/// Scroll commands produced by the engine are applied to the surface passed in.
#[derive(Clone, Debug)]
pub struct Controller<K> {
    list: VirtualList<K>,
    mounted: bool,
}

impl<K: ListKey> Controller<K> {
    pub fn new(options: VirtualListOptions<K>) -> Self {
        Self::from_list(VirtualList::new(options))
    }

    pub fn from_list(list: VirtualList<K>) -> Self {
        Self {
            list,
            mounted: false,
        }
    }

    pub fn list(&self) -> &VirtualList<K> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut VirtualList<K> {
        &mut self.list
    }

    pub fn into_list(self) -> VirtualList<K> {
        self.list
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Applies the configured initial scroll target. Only the first call has an effect.
    ///
    /// Returns `true` when a scroll command was issued.
    pub fn mount(&mut self, surface: &mut impl ScrollSurface) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        let Some(cmd) = self.list.initial_scroll(surface.metrics()) else {
            return false;
        };
        vdebug!(?cmd, "mount: initial scroll");
        surface.apply(cmd);
        true
    }

    pub fn set_items<T>(&mut self, items: &[T], key_of: impl FnMut(&T) -> K) {
        self.list.set_items(items, key_of);
    }

    /// Native scroll event. Requests a frame for the first event since the last sync.
    pub fn on_scroll(&mut self, frames: &mut impl FrameScheduler) -> bool {
        if !self.list.request_sync() {
            return false;
        }
        vtrace!("on_scroll: frame requested");
        frames.request_frame();
        true
    }

    /// The frame requested by `on_scroll` fired: reads the surface offset and recomputes the
    /// visible range. Returns `true` when the range changed.
    pub fn on_frame(&mut self, surface: &impl ScrollSurface) -> bool {
        let scroll_top = surface.metrics().scroll_top;
        let changed = self.list.sync_viewport(scroll_top);
        vtrace!(scroll_top, changed, "on_frame");
        changed
    }

    pub fn on_container_resize(&mut self, height: u32) {
        self.list.set_container_height(height);
    }

    /// Item resize notification. Applies the anchoring scroll-by (if any) to `surface`.
    pub fn on_item_resize(
        &mut self,
        surface: &mut impl ScrollSurface,
        key: &K,
        height: u32,
    ) -> bool {
        let Some(cmd) = self.list.item_resized(key, height) else {
            return false;
        };
        vtrace!(?cmd, "on_item_resize: compensating");
        surface.apply(cmd);
        true
    }

    /// Resolves `options` against the surface's live metrics and applies the result.
    ///
    /// Returns `true` when a scroll command was issued.
    pub fn scroll_to(
        &mut self,
        surface: &mut impl ScrollSurface,
        options: ScrollToOptions<K>,
    ) -> bool {
        let Some(cmd) = self.list.scroll_to(options, surface.metrics()) else {
            return false;
        };
        surface.apply(cmd);
        true
    }
}
