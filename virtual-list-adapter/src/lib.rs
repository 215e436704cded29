//! Adapter utilities for the `virtual-list` crate.
//!
//! The `virtual-list` crate is UI-agnostic: it returns scroll commands and expects the host to
//! forward events. This crate provides the small, framework-neutral glue most hosts need:
//!
//! - [`ScrollSurface`] / [`FrameScheduler`]: the two host capabilities the engine relies on
//! - [`Controller`]: frame-coalesced scroll syncing and command application
//! - [`SimulatedSurface`]: an in-memory scroll region for TUIs, canvases and tests
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod surface;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use surface::{FrameScheduler, ScrollSurface, SimulatedSurface};
