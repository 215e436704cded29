use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use virtual_list::{
    Edge, SCROLL_END, ScrollBehavior, ScrollCommand, ScrollToOptions, ViewportRange,
    VirtualListOptions,
};

#[derive(Debug, Default)]
struct Frames(usize);

impl FrameScheduler for Frames {
    fn request_frame(&mut self) {
        self.0 += 1;
    }
}

fn setup(options: VirtualListOptions<u64>, count: u64) -> (Controller<u64>, SimulatedSurface) {
    let mut c = Controller::new(options);
    c.list_mut().set_keys(0..count);
    c.on_container_resize(400);
    let surface = SimulatedSurface::new(400, c.list().content_layout().scroll_height());
    (c, surface)
}

fn resizable() -> VirtualListOptions<u64> {
    VirtualListOptions::new(50).with_item_resizable(true)
}

/// Drains the surface's scroll event and, if a frame was requested, runs it.
fn pump(c: &mut Controller<u64>, surface: &mut SimulatedSurface, frames: &mut Frames) -> bool {
    if surface.take_scroll_event() {
        c.on_scroll(frames);
    }
    if !c.list().is_sync_pending() {
        return false;
    }
    c.on_frame(&*surface)
}

fn range(start_index: usize, end_index: usize) -> Option<ViewportRange> {
    Some(ViewportRange {
        start_index,
        end_index,
    })
}

#[test]
fn mount_applies_initial_index_once() {
    let (mut c, mut surface) = setup(resizable().with_initial_scroll_index(20), 100);
    let mut frames = Frames::default();

    assert!(c.mount(&mut surface));
    assert!(c.is_mounted());
    assert_eq!(surface.scroll_top(), 650);
    assert_eq!(c.list().pending_scroll_anchor(), Some(20));

    assert!(!c.mount(&mut surface));
    assert_eq!(surface.history().len(), 1);

    assert!(pump(&mut c, &mut surface, &mut frames));
    assert_eq!(frames.0, 1);
    assert_eq!(c.list().anchor_index(), Some(20));
    assert_eq!(c.list().visible_range(), range(12, 21));
}

#[test]
fn mount_without_initial_target_is_noop() {
    let (mut c, mut surface) = setup(resizable(), 100);
    assert!(!c.mount(&mut surface));
    assert!(c.is_mounted());
    assert!(surface.history().is_empty());
}

#[test]
fn scroll_events_are_coalesced_into_one_frame() {
    let (mut c, mut surface) = setup(resizable(), 100);
    let mut frames = Frames::default();

    for _ in 0..5 {
        c.on_scroll(&mut frames);
    }
    assert_eq!(frames.0, 1);

    surface.user_scroll_to(1000);
    assert!(c.on_frame(&surface));
    assert_eq!(c.list().scroll_offset(), 1000);
    assert_eq!(c.list().visible_range(), range(19, 28));

    assert!(c.on_scroll(&mut frames));
    assert_eq!(frames.0, 2);
}

#[test]
fn closures_schedule_frames() {
    let (mut c, _surface) = setup(resizable(), 10);
    let mut requested = 0;
    {
        let mut frames = || requested += 1;
        c.on_scroll(&mut frames);
        c.on_scroll(&mut frames);
    }
    assert_eq!(requested, 1);
}

#[test]
fn resize_above_anchor_keeps_visible_content_in_place() {
    let (mut c, mut surface) = setup(resizable(), 100);
    let mut frames = Frames::default();

    surface.user_scroll_to(550);
    assert!(pump(&mut c, &mut surface, &mut frames));
    surface.user_scroll_to(560);
    assert!(!pump(&mut c, &mut surface, &mut frames));
    assert_eq!(c.list().anchor_index(), Some(10));
    assert_eq!(c.list().visible_range(), range(10, 19));

    assert!(c.on_item_resize(&mut surface, &5, 80));
    assert_eq!(surface.history().last(), Some(&ScrollCommand::By { top: 30 }));
    assert_eq!(surface.scroll_top(), 590);

    // The host reports the compensated offset; the first visible item is unchanged.
    assert!(pump(&mut c, &mut surface, &mut frames));
    assert_eq!(c.list().scroll_offset(), 590);
    assert_eq!(c.list().visible_range(), range(10, 19));
    assert_eq!(c.list().slice_offset(), 530);
}

#[test]
fn compensation_clamped_at_bottom_keeps_engine_on_host_offset() {
    let (mut c, mut surface) = setup(resizable(), 100);
    let mut frames = Frames::default();

    surface.user_scroll_to(surface.max_scroll_top());
    assert!(pump(&mut c, &mut surface, &mut frames));
    c.on_scroll(&mut frames);
    c.on_frame(&surface);
    assert_eq!(c.list().anchor_index(), Some(91));

    // The surface has not grown yet, so the scroll-by is clamped away.
    assert!(c.on_item_resize(&mut surface, &91, 80));
    surface.set_content_height(c.list().content_layout().scroll_height());
    assert_eq!(surface.scroll_top(), 4600);
    assert!(!surface.take_scroll_event());

    assert_eq!(c.list().scroll_offset(), surface.scroll_top());
    assert_eq!(c.list().start_index(), 90);
    assert_eq!(c.list().slice_offset(), 4500);
}

#[test]
fn resize_below_anchor_leaves_surface_alone() {
    let (mut c, mut surface) = setup(resizable(), 100);
    let mut frames = Frames::default();

    surface.user_scroll_to(550);
    pump(&mut c, &mut surface, &mut frames);
    surface.user_scroll_to(560);
    pump(&mut c, &mut surface, &mut frames);

    assert!(!c.on_item_resize(&mut surface, &50, 100));
    assert!(surface.history().is_empty());
    assert_eq!(surface.scroll_top(), 560);
    assert_eq!(c.list().total_size(), 5050);
}

#[test]
fn stale_resize_notification_is_ignored() {
    let (mut c, mut surface) = setup(resizable(), 10);
    assert!(!c.on_item_resize(&mut surface, &1000, 80));
    assert_eq!(c.list().total_size(), 500);
    assert!(surface.history().is_empty());
}

#[test]
fn scroll_to_bottom_is_clamped_by_the_surface() {
    let (mut c, mut surface) = setup(resizable(), 100);
    let mut frames = Frames::default();

    assert!(c.scroll_to(&mut surface, ScrollToOptions::edge(Edge::Bottom)));
    assert_eq!(
        surface.history(),
        &[ScrollCommand::To {
            left: Some(0),
            top: Some(SCROLL_END),
            behavior: None,
        }]
    );
    assert_eq!(surface.scroll_top(), 4600);

    assert!(pump(&mut c, &mut surface, &mut frames));
    assert_eq!(c.list().visible_range(), range(91, 99));

    assert!(c.scroll_to(&mut surface, ScrollToOptions::edge(Edge::Top)));
    assert_eq!(surface.scroll_top(), 0);
}

#[test]
fn scroll_to_key_moves_surface() {
    let items: Vec<String> = (0..100).map(|i| format!("row-{i}")).collect();
    let mut c = Controller::new(VirtualListOptions::new(50).with_item_resizable(true));
    c.set_items(&items, |s| s.clone());
    c.on_container_resize(400);
    let mut surface = SimulatedSurface::new(400, c.list().content_layout().scroll_height());

    let opts = ScrollToOptions::key(String::from("row-30"))
        .with_behavior(Some(ScrollBehavior::Smooth));
    assert!(c.scroll_to(&mut surface, opts));
    assert_eq!(surface.scroll_top(), 1150);
    assert_eq!(c.list().pending_scroll_anchor(), Some(30));

    // Already fully visible.
    assert!(!c.scroll_to(&mut surface, ScrollToOptions::key(String::from("row-25"))));
    assert!(!c.scroll_to(&mut surface, ScrollToOptions::key(String::from("missing"))));
    assert_eq!(surface.history().len(), 1);
}

#[test]
fn container_resize_changes_window_size() {
    let (mut c, _surface) = setup(resizable(), 100);
    assert_eq!(c.list().visible_range(), range(0, 9));
    c.on_container_resize(200);
    assert_eq!(c.list().container_height(), Some(200));
    assert_eq!(c.list().visible_range(), range(0, 5));
}

#[test]
fn simulated_surface_clamps_offsets() {
    let mut surface = SimulatedSurface::new(100, 250);
    assert_eq!(surface.max_scroll_top(), 150);

    surface.scroll_by(-20);
    assert_eq!(surface.scroll_top(), 0);
    assert!(!surface.take_scroll_event());

    surface.scroll_by(1000);
    assert_eq!(surface.scroll_top(), 150);
    assert!(surface.take_scroll_event());
    assert!(!surface.take_scroll_event());

    surface.set_content_height(120);
    assert_eq!(surface.scroll_top(), 20);

    surface.scroll_to(Some(7), None, None);
    assert_eq!(surface.scroll_left(), 7);
    assert_eq!(surface.scroll_top(), 20);
    assert_eq!(surface.history().len(), 3);

    surface.clear_history();
    assert!(surface.history().is_empty());
}
