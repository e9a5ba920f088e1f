//! # scopedim-display
//!
//! Display-side collaborators for scopedim: finding the X displays of
//! running gamescope/steam sessions, and publishing root-window properties
//! on them through the `xprop` binary.
//!
//! # Usage
//!
//! ```rust,no_run
//! use scopedim_display::{steam_displays, PropertySink, PropertyValue, XpropSink};
//!
//! let sink = XpropSink;
//! for display in steam_displays() {
//!     sink.set(&display, "GAMESCOPE_COMPOSITE_FORCE", &PropertyValue::Bool(true))?;
//! }
//! # Ok::<(), scopedim_display::PropertyError>(())
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - Error handling
//! - [`tracing`] - Structured logging
//!
//! # Used By
//!
//! - `scopedim-session` - Lifecycle orchestration
//! - `scopedim-cli` - `displays` subcommand

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod discover;
mod error;
mod props;

pub use discover::{displays_from_proc, steam_displays};
pub use error::{PropertyError, PropertyResult};
pub use props::{PropertySink, PropertyValue, XpropSink};
