// Example: minimal windowing over a long list.
use virtual_list::{ScrollMetrics, ScrollToOptions, VirtualList, VirtualListOptions};

fn main() {
    let rows: Vec<String> = (0..100_000).map(|i| format!("row {i}")).collect();

    let mut list = VirtualList::new(VirtualListOptions::new(20).with_padding(8, 8));
    list.set_items(&rows, |row| row.clone());
    list.set_container_height(300);

    // Host scroll event: request a sync, then run it once per frame.
    if list.request_sync() {
        list.sync_viewport(123_456);
    }

    println!("content_layout={:?}", list.content_layout());
    println!("visible_range={:?}", list.visible_range());
    println!("slice_offset={}", list.slice_offset());
    list.for_each_visible(&rows, |index, row| {
        if index % 5 == 0 {
            println!("  {index}: {row}");
        }
    });

    let metrics = ScrollMetrics {
        scroll_top: list.scroll_offset(),
        view_height: 300,
    };
    let cmd = list.scroll_to(ScrollToOptions::index(99_999), metrics);
    println!("scroll_to(99_999)={cmd:?}");
}
