//! Transparent overlay windows for on-screen measurement tools.
//!
//! Each tool session spawns a dedicated worker thread that owns a
//! borderless topmost window, a DirectComposition graphics pipeline, and
//! a blocking render loop. The caller keeps an [`OverlaySession`] handle;
//! dropping it closes the window and joins the worker.
//!
//! Two tools are supported:
//!
//! - **measure**: a passive surface whose draw callback renders whatever
//!   the host's measurement logic has computed. The cursor is hidden while
//!   the surface lives.
//! - **bounds**: a drag-to-select surface. Mouse input drives a small
//!   state machine and a completed drag puts the region's dimensions on
//!   the clipboard.
//!
//! The input state machines, theme resolution, and geometry types are
//! portable and unit-tested on any platform; everything that touches a
//! window handle is Windows only.

pub mod clipboard;
pub mod error;
pub mod input;
pub mod monitor;
pub mod theme;
pub mod types;

#[cfg(windows)]
pub mod graphics;
#[cfg(windows)]
pub mod render;
#[cfg(windows)]
pub mod session;
#[cfg(windows)]
mod surface;
#[cfg(windows)]
mod wndproc;

pub use error::OverlayError;
pub use input::{BoundsToolState, OverlayEvent, OverlayReaction, RegionSelection};
pub use monitor::MonitorId;
pub use theme::{AppearanceMode, Palette};
pub use types::{Color, Point, Rect};

#[cfg(windows)]
pub use render::{DrawCallback, FrameContext};
#[cfg(windows)]
pub use session::{CommonConfig, OverlaySession};
