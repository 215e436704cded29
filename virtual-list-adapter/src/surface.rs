use alloc::vec::Vec;

use virtual_list::{ScrollBehavior, ScrollCommand, ScrollMetrics};

/// The host's scrollable region (a DOM element, a terminal pane, a GUI scroll view).
pub trait ScrollSurface {
    /// Current scroll offset and visible height.
    fn metrics(&self) -> ScrollMetrics;

    /// Scrolls to an absolute position. `None` axes stay where they are.
    fn scroll_to(&mut self, left: Option<u64>, top: Option<u64>, behavior: Option<ScrollBehavior>);

    /// Scrolls vertically by a relative amount.
    fn scroll_by(&mut self, top: i64);

    fn apply(&mut self, cmd: ScrollCommand) {
        match cmd {
            ScrollCommand::To {
                left,
                top,
                behavior,
            } => self.scroll_to(left, top, behavior),
            ScrollCommand::By { top } => self.scroll_by(top),
        }
    }
}

/// A "run this after the next frame" primitive.
///
/// The controller requests at most one frame per batch of scroll events; the host must call
/// [`crate::Controller::on_frame`] when it fires.
pub trait FrameScheduler {
    fn request_frame(&mut self);
}

impl<F: FnMut()> FrameScheduler for F {
    fn request_frame(&mut self) {
        self()
    }
}

/// An in-memory scroll region.
///
/// Useful for hosts without a native scroll container (TUIs, canvases) and for tests. The
/// offset is clamped to `[0, content_height - view_height]`, and every offset change raises a
/// scroll event the host drains with [`Self::take_scroll_event`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatedSurface {
    scroll_left: u64,
    scroll_top: u64,
    view_height: u32,
    content_height: u64,
    scroll_event: bool,
    history: Vec<ScrollCommand>,
}

impl SimulatedSurface {
    pub fn new(view_height: u32, content_height: u64) -> Self {
        Self {
            view_height,
            content_height,
            ..Self::default()
        }
    }

    pub fn scroll_top(&self) -> u64 {
        self.scroll_top
    }

    pub fn scroll_left(&self) -> u64 {
        self.scroll_left
    }

    pub fn view_height(&self) -> u32 {
        self.view_height
    }

    pub fn content_height(&self) -> u64 {
        self.content_height
    }

    pub fn max_scroll_top(&self) -> u64 {
        self.content_height.saturating_sub(self.view_height as u64)
    }

    pub fn set_view_height(&mut self, view_height: u32) {
        self.view_height = view_height;
        self.set_scroll_top(self.scroll_top);
    }

    /// Updates the scrollable extent (e.g. from `ContentLayout::scroll_height`).
    pub fn set_content_height(&mut self, content_height: u64) {
        self.content_height = content_height;
        self.set_scroll_top(self.scroll_top);
    }

    /// Simulates a user scroll (wheel, drag, keyboard).
    pub fn user_scroll_to(&mut self, top: u64) {
        self.set_scroll_top(top);
    }

    /// Returns `true` once after each offset change.
    pub fn take_scroll_event(&mut self) -> bool {
        core::mem::take(&mut self.scroll_event)
    }

    /// Commands applied through [`ScrollSurface`], oldest first.
    pub fn history(&self) -> &[ScrollCommand] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn set_scroll_top(&mut self, top: u64) {
        let top = top.min(self.max_scroll_top());
        if top != self.scroll_top {
            self.scroll_top = top;
            self.scroll_event = true;
        }
    }
}

impl ScrollSurface for SimulatedSurface {
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.scroll_top,
            view_height: self.view_height,
        }
    }

    fn scroll_to(&mut self, left: Option<u64>, top: Option<u64>, behavior: Option<ScrollBehavior>) {
        self.history.push(ScrollCommand::To {
            left,
            top,
            behavior,
        });
        if let Some(left) = left {
            self.scroll_left = left;
        }
        if let Some(top) = top {
            self.set_scroll_top(top);
        }
    }

    fn scroll_by(&mut self, top: i64) {
        self.history.push(ScrollCommand::By { top });
        self.set_scroll_top(self.scroll_top.saturating_add_signed(top));
    }
}
