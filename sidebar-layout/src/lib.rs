//! Responsive sidebar layout controller.
//!
//! The crate keeps three visual aspects of a page layout consistent with a
//! single `closed` flag:
//! - sidebar visibility (the `closed` class on the sidebar panel);
//! - main content width (the `full-width` class on the content region);
//! - toggle button placement and icon (left offset and bars/times glyph).
//!
//! Two triggers drive it: a toggle click flips the flag, a viewport resize
//! snaps it to the width band (closed at or below the breakpoint, open
//! above it).
//!
//! Elements are passed in as handles implementing [`SidebarPanel`],
//! [`MainContent`] and [`ToggleControl`]. A missing handle turns the effects
//! on that element into no-ops. The [`memory`] module provides in-memory
//! handles for headless hosts and tests.
//!
//! # Quick Example
//!
//! ```
//! use sidebar_layout::memory::{MemoryContent, MemoryPanel, MemoryToggle};
//! use sidebar_layout::{LayoutConfig, SidebarLayoutController, ToggleIcon};
//!
//! let mut controller = SidebarLayoutController::new(
//!     Some(MemoryPanel::new(250.0)),
//!     Some(MemoryContent::new()),
//!     Some(MemoryToggle::new()),
//!     LayoutConfig::default(),
//! );
//!
//! controller.initialize(&1024_u32);
//! assert!(!controller.is_closed());
//! assert_eq!(controller.toggle().map(|t| t.left_offset()), Some(265.0));
//!
//! controller.on_toggle_clicked();
//! assert!(controller.is_closed());
//! assert_eq!(controller.toggle().map(|t| t.icon()), Some(Some(ToggleIcon::Bars)));
//! ```

mod coalescer;
mod config;
mod controller;
mod element;
mod errors;
mod event;
pub mod memory;
mod state;

pub use crate::coalescer::ResizeCoalescer;
pub use crate::config::{DEFAULT_BREAKPOINT, DEFAULT_GUTTER, LayoutConfig};
pub use crate::controller::SidebarLayoutController;
pub use crate::element::{
    CLOSED_CLASS, ClassList, FULL_WIDTH_CLASS, MainContent, SidebarPanel,
    ToggleControl, ToggleIcon, Viewport,
};
pub use crate::errors::ConfigError;
pub use crate::event::{SidebarLayoutEffect, SidebarLayoutEvent};
