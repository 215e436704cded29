// Example: a host event loop driving the controller against an in-memory scroll region.
use virtual_list::{Edge, ScrollToOptions, VirtualListOptions};
use virtual_list_adapter::{Controller, SimulatedSurface};

fn main() {
    let messages: Vec<String> = (0..500).map(|i| format!("message #{i}")).collect();

    let opts = VirtualListOptions::new(24)
        .with_item_resizable(true)
        .with_initial_scroll_index(250);
    let mut c = Controller::new(opts);
    c.set_items(&messages, |m| m.clone());
    c.on_container_resize(240);

    let mut surface = SimulatedSurface::new(240, c.list().content_layout().scroll_height());
    let mut frame_requested = false;

    c.mount(&mut surface);
    println!("mounted at scroll_top={}", surface.scroll_top());

    let mut run_frame = |c: &mut Controller<String>, surface: &mut SimulatedSurface| {
        if surface.take_scroll_event() {
            c.on_scroll(&mut || frame_requested = true);
        }
        if std::mem::take(&mut frame_requested) && c.on_frame(&*surface) {
            println!(
                "  frame: scroll_top={} range={:?} slice_offset={}",
                surface.scroll_top(),
                c.list().visible_range(),
                c.list().slice_offset()
            );
        }
    };
    run_frame(&mut c, &mut surface);

    // A message above the viewport renders taller than estimated.
    let key = messages[245].clone();
    c.on_item_resize(&mut surface, &key, 72);
    surface.set_content_height(c.list().content_layout().scroll_height());
    println!("after resize: scroll_top={}", surface.scroll_top());
    run_frame(&mut c, &mut surface);

    c.scroll_to(&mut surface, ScrollToOptions::edge(Edge::Bottom));
    run_frame(&mut c, &mut surface);
    println!("history={:?}", surface.history());
}
