use crate::{Edge, ScrollBehavior, ScrollCommand, ScrollMetrics};

/// What a [`ScrollToOptions`] request scrolls to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollTarget<K> {
    /// Absolute position. `None` axes are left untouched.
    Position {
        left: Option<u64>,
        top: Option<u64>,
    },
    Index(usize),
    /// Resolved through the current key → index map. Unknown keys are a no-op.
    Key(K),
    Edge(Edge),
}

/// A scroll request for [`crate::VirtualList::scroll_to`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollToOptions<K> {
    pub target: ScrollTarget<K>,
    pub behavior: Option<ScrollBehavior>,
    /// For index/key targets: scroll only as far as needed to bring the item fully into view
    /// instead of snapping its top to the viewport top. Defaults to `true`.
    pub debounce: bool,
}

impl<K> ScrollToOptions<K> {
    pub fn new(target: ScrollTarget<K>) -> Self {
        Self {
            target,
            behavior: None,
            debounce: true,
        }
    }

    pub fn position(left: Option<u64>, top: Option<u64>) -> Self {
        Self::new(ScrollTarget::Position { left, top })
    }

    pub fn top(top: u64) -> Self {
        Self::position(None, Some(top))
    }

    pub fn index(index: usize) -> Self {
        Self::new(ScrollTarget::Index(index))
    }

    pub fn key(key: K) -> Self {
        Self::new(ScrollTarget::Key(key))
    }

    pub fn edge(edge: Edge) -> Self {
        Self::new(ScrollTarget::Edge(edge))
    }

    pub fn with_behavior(mut self, behavior: Option<ScrollBehavior>) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_debounce(mut self, debounce: bool) -> Self {
        self.debounce = debounce;
        self
    }
}

/// Resolves a scroll to an item spanning `[item_top, item_top + item_size)`.
///
/// With `debounce`, an item already fully visible below the current top yields no command, an
/// item below the viewport is bottom-aligned, and anything else is top-aligned.
pub(crate) fn resolve_item_scroll(
    item_top: u64,
    item_size: u32,
    metrics: ScrollMetrics,
    behavior: Option<ScrollBehavior>,
    debounce: bool,
) -> Option<ScrollCommand> {
    if !debounce || item_top <= metrics.scroll_top {
        return Some(ScrollCommand::to_top(item_top, behavior));
    }
    let item_bottom = item_top.saturating_add(item_size as u64);
    let view = metrics.view_height as u64;
    if item_bottom <= metrics.scroll_top.saturating_add(view) {
        return None;
    }
    Some(ScrollCommand::to_top(item_bottom.saturating_sub(view), behavior))
}

pub(crate) fn resolve_edge(edge: Edge, behavior: Option<ScrollBehavior>) -> ScrollCommand {
    match edge {
        Edge::Top => ScrollCommand::to_top(0, behavior),
        Edge::Bottom => ScrollCommand::to_top(crate::SCROLL_END, behavior),
    }
}
