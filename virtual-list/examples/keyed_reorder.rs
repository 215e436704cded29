// Example: measurements follow keys after reorder.
use virtual_list::{VirtualList, VirtualListOptions};

fn main() {
    let mut list = VirtualList::new(VirtualListOptions::new(10).with_item_resizable(true));
    list.set_keys(["a", "b", "c"]);
    list.item_resized(&"a", 40);
    println!(
        "before reorder: size0={:?} size1={:?} total={}",
        list.item_size(0),
        list.item_size(1),
        list.total_size()
    );

    list.set_keys(["b", "a", "c"]);
    println!(
        "after reorder: size0={:?} size1={:?} total={}",
        list.item_size(0),
        list.item_size(1),
        list.total_size()
    );

    // Removed keys stop contributing; reinserted keys get their recorded size back.
    list.set_keys(["b", "c"]);
    println!("after removal: total={}", list.total_size());
    list.set_keys(["a", "b", "c"]);
    println!("after reinsert: size0={:?}", list.item_size(0));
}
