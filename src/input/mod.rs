//! Input state machines for the two overlay kinds.
//!
//! The machines are plain logic over an already-translated event vocabulary
//! so they can be driven (and tested) without a live window; the Win32
//! window procedures in `wndproc` do nothing but translate messages into
//! [`OverlayEvent`]s and apply the resulting [`OverlayReaction`]s.

pub mod bounds;
pub mod measure;

use crate::types::Point;

pub use bounds::{BoundsToolState, RegionSelection};

/// Virtual-key code for Escape, duplicated here so the machines stay
/// buildable off-Windows.
pub(crate) const VK_ESCAPE: u32 = 0x1B;

/// An input happening the overlays care about, in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// The overlay surface has just been created.
    SurfaceCreated,
    /// A key was released; payload is the virtual-key code.
    KeyUp(u32),
    LeftButtonDown(Point),
    LeftButtonUp(Point),
    RightButtonUp,
    /// The host asked to erase the surface background.
    EraseBackground,
}

/// What the host window should do in response to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayReaction {
    /// Fall through to default message handling.
    Ignored,
    /// Message fully consumed; no default handling (used to swallow
    /// background erases and avoid flicker).
    Handled,
    /// Post a close request to the surface.
    RequestClose,
    /// Hide the system cursor for the process.
    HideCursor,
    /// Emit the current measurement to the clipboard sink.
    CopyMeasurement,
    /// A drag-selection completed.
    CommitRegion(RegionSelection),
}
