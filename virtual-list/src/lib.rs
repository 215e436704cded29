//! A headless windowing engine for long vertical lists.
//!
//! Only the slice of items intersecting the viewport is realized. Items share a base size but
//! may resize individually at runtime; the engine tracks per-item deviations and keeps the
//! scroll offset ↔ item mapping consistent as sizes change:
//!
//! - a cumulative size index ([`Fenwick`]) mapping index ↔ offset in `O(log n)`
//! - visible range computation from the scroll offset
//! - scroll-to-target resolution (offset, index, key, top/bottom), optionally "debounced"
//! - resize anchoring, so items above the viewport never shift visible content
//!
//! It is UI-agnostic. The host layer is expected to provide the container height, the scroll
//! offset once per frame, item resize notifications, and to apply the returned
//! [`ScrollCommand`]s. See the `virtual-list-adapter` crate for framework-neutral wiring.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod fenwick;
mod key;
mod options;
mod scroll;
mod sizes;
mod types;
mod viewport;
mod virtual_list;


pub use fenwick::Fenwick;
pub use options::{InitialScroll, OnChangeCallback, VirtualListOptions};
pub use scroll::{ScrollTarget, ScrollToOptions};
pub use types::{
    ContentLayout, Edge, SCROLL_END, ScrollBehavior, ScrollCommand, ScrollMetrics, ViewportRange,
    ViewportState,
};
pub use virtual_list::VirtualList;

#[doc(hidden)]
pub use key::ListKey;
