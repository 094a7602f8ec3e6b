//! Core systems for ClearEdit.
//!
//! This crate provides the foundational pieces the widget layer is built on:
//!
//! - **Signal/Slot System**: Type-safe, synchronous notification lists
//! - **Property System**: Value cells that report real changes
//! - **Geometry**: Points, sizes, padding and layout direction
//! - **Logging**: `tracing` target names for each subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use clearedit_core::Signal;
//!
//! let value_changed = Signal::<i32>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod property;
pub mod signal;
pub mod types;

pub use logging::PerfSpan;
pub use property::Property;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use types::{Insets, LayoutDirection, Point, Size};
