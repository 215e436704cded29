// Example: item resizes above the viewport keep visible content in place.
use virtual_list::{ScrollCommand, VirtualList, VirtualListOptions};

fn main() {
    let mut list = VirtualList::new(VirtualListOptions::new(50).with_item_resizable(true));
    list.set_keys(0u32..1_000);
    list.set_container_height(400);

    // Two frames: the second captures the start index of the first as the anchor.
    list.sync_viewport(550);
    list.sync_viewport(560);
    println!(
        "before: off={} total={} range={:?} anchor={:?}",
        list.scroll_offset(),
        list.total_size(),
        list.visible_range(),
        list.anchor_index()
    );

    // An item above the anchor grows: the host must scroll by the delta.
    match list.item_resized(&5, 80) {
        Some(ScrollCommand::By { top }) => println!("item 5 grew, host scrolls by {top}"),
        other => println!("item 5 grew, command={other:?}"),
    }

    // An item below the anchor grows: nothing on screen moves.
    println!("item 500 grew, command={:?}", list.item_resized(&500, 120));

    println!(
        "after: off={} total={} range={:?} slice_offset={}",
        list.scroll_offset(),
        list.total_size(),
        list.visible_range(),
        list.slice_offset()
    );
}
