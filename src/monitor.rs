//! Monitor queries for overlay placement.
//!
//! Surfaces are sized to a monitor's work area (the desktop minus the
//! taskbar). Queries that fail degrade to harmless defaults rather than
//! aborting session startup.

#[cfg(windows)]
use crate::types::Rect;

/// Opaque handle to the monitor an overlay should cover.
///
/// On Windows this wraps an `HMONITOR` value. It is carried as `isize`
/// so sessions can move it across thread boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonitorId(pub isize);

/// Get the work area of a monitor in screen coordinates.
///
/// Returns a zero rect when the monitor info query fails; the caller
/// still creates a surface, it just has no useful extent.
#[cfg(windows)]
pub fn work_area(monitor: MonitorId) -> Rect {
    use windows::Win32::Graphics::Gdi::{GetMonitorInfoW, HMONITOR, MONITORINFO};

    unsafe {
        let mut info = MONITORINFO {
            cbSize: std::mem::size_of::<MONITORINFO>() as u32,
            ..Default::default()
        };

        if GetMonitorInfoW(HMONITOR(monitor.0 as *mut core::ffi::c_void), &mut info).as_bool() {
            let rc = info.rcWork;
            Rect::new(rc.left, rc.top, rc.right, rc.bottom)
        } else {
            log::warn!("[monitor] GetMonitorInfoW failed for {:?}", monitor);
            Rect::new(0, 0, 0, 0)
        }
    }
}

/// Width of the virtual screen (all monitors combined), in pixels.
///
/// Used to park overlay windows far off-screen before they are shown.
#[cfg(windows)]
pub fn virtual_screen_width() -> i32 {
    use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXVIRTUALSCREEN};

    unsafe { GetSystemMetrics(SM_CXVIRTUALSCREEN) }
}
