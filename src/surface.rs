//! Overlay surface creation.
//!
//! Each tool session gets one borderless popup window sized to a monitor's
//! work area. The window relies on DirectComposition for its pixels, plus a
//! DWM blur region parked off-screen so the composition output stays
//! transparent without WS_EX_LAYERED and its video blackout problems.

use std::sync::Once;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Dwm::{
    DwmEnableBlurBehindWindow, DWM_BB_BLURREGION, DWM_BB_ENABLE, DWM_BLURBEHIND,
};
use windows::Win32::Graphics::Gdi::{CombineRgn, CreateRectRgn, DeleteObject, RGN_DIFF};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, GetWindowRect, LoadCursorW, RegisterClassW, SetWindowRgn, ShowWindow,
    IDC_CROSS, SW_SHOWNORMAL, WNDCLASSW, WS_EX_TOOLWINDOW, WS_POPUP,
};

use crate::error::OverlayError;
use crate::monitor::{self, MonitorId};
use crate::types::Rect;
use crate::wndproc;

const MEASURE_CLASS: PCWSTR = w!("MeasureOverlay.MeasureSurface");
const BOUNDS_CLASS: PCWSTR = w!("MeasureOverlay.BoundsSurface");
const WINDOW_TITLE: PCWSTR = w!("MeasureOverlay");

/// Which tool a surface hosts. Selects the window class and thus the
/// window procedure and cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Measure,
    Bounds,
}

/// A created overlay window.
pub struct Surface {
    /// Native window handle. Owned by the render loop; destroyed via
    /// WM_CLOSE -> DestroyWindow.
    pub hwnd: HWND,
    /// Work area the window covers, in screen coordinates.
    pub bounds: Rect,
}

/// Register both overlay window classes exactly once per process.
///
/// The bounds class carries a crosshair cursor; the measure class keeps
/// the default arrow since the measure tool hides the cursor entirely.
fn register_classes() {
    static REGISTER: Once = Once::new();

    REGISTER.call_once(|| unsafe {
        let hinstance = match GetModuleHandleW(None) {
            Ok(h) => h,
            Err(e) => {
                log::error!("[surface] GetModuleHandleW failed: {:?}", e);
                return;
            }
        };

        let mut wc = WNDCLASSW {
            lpfnWndProc: Some(wndproc::measure_wnd_proc),
            hInstance: hinstance.into(),
            lpszClassName: MEASURE_CLASS,
            ..Default::default()
        };
        if RegisterClassW(&wc) == 0 {
            log::error!("[surface] failed to register measure window class");
        }

        wc.lpfnWndProc = Some(wndproc::bounds_wnd_proc);
        wc.lpszClassName = BOUNDS_CLASS;
        wc.hCursor = LoadCursorW(None, IDC_CROSS).unwrap_or_default();
        if RegisterClassW(&wc) == 0 {
            log::error!("[surface] failed to register bounds window class");
        }
    });
}

/// Create an overlay window covering the monitor's work area.
///
/// `create_param` is forwarded as the window's `lpCreateParams`; bounds
/// surfaces use it to hand their shared tool state to the window
/// procedure, measure surfaces pass zero.
pub fn create_surface(
    kind: SurfaceKind,
    monitor: MonitorId,
    toolbar_bounds: Rect,
    create_param: isize,
) -> Result<Surface, OverlayError> {
    register_classes();

    let bounds = monitor::work_area(monitor);
    let class = match kind {
        SurfaceKind::Measure => MEASURE_CLASS,
        SurfaceKind::Bounds => BOUNDS_CLASS,
    };

    unsafe {
        let hinstance = GetModuleHandleW(None)
            .map_err(|e| OverlayError::SurfaceCreation(format!("module handle: {:?}", e)))?;

        let param = if create_param != 0 {
            Some(create_param as *const core::ffi::c_void)
        } else {
            None
        };

        let hwnd = CreateWindowExW(
            WS_EX_TOOLWINDOW,
            class,
            WINDOW_TITLE,
            WS_POPUP,
            bounds.left,
            bounds.top,
            bounds.width() as i32,
            bounds.height() as i32,
            None,
            None,
            hinstance,
            param,
        )
        .map_err(|e| OverlayError::SurfaceCreation(format!("CreateWindowExW: {:?}", e)))?;

        let _ = ShowWindow(hwnd, SW_SHOWNORMAL);
        pin_topmost(hwnd);
        enable_composition_transparency(hwnd);
        carve_toolbar_hole(hwnd, toolbar_bounds);

        Ok(Surface { hwnd, bounds })
    }
}

/// Keep the overlay above every other window.
#[cfg(not(feature = "debug-overlay"))]
fn pin_topmost(hwnd: HWND) {
    use windows::Win32::UI::WindowsAndMessaging::{
        SetWindowPos, HWND_TOPMOST, SWP_NOMOVE, SWP_NOSIZE,
    };

    unsafe {
        if let Err(e) = SetWindowPos(hwnd, HWND_TOPMOST, 0, 0, 0, 0, SWP_NOMOVE | SWP_NOSIZE) {
            log::warn!("[surface] SetWindowPos(HWND_TOPMOST) failed: {:?}", e);
        }
    }
}

/// Debug builds keep the overlay in the normal z-order so a debugger
/// window can sit on top of it.
#[cfg(feature = "debug-overlay")]
fn pin_topmost(_hwnd: HWND) {}

/// Enable DWM blur-behind with a 1x1 region parked beyond the virtual
/// screen. The region never covers a visible pixel, but with blur enabled
/// DWM honors the alpha channel of the composition swap chain.
fn enable_composition_transparency(hwnd: HWND) {
    unsafe {
        let pos = -monitor::virtual_screen_width() - 8;
        let hrgn = CreateRectRgn(pos, 0, pos + 1, 1);
        if hrgn.is_invalid() {
            log::warn!("[surface] CreateRectRgn for blur region failed");
            return;
        }

        let bb = DWM_BLURBEHIND {
            dwFlags: DWM_BB_ENABLE | DWM_BB_BLURREGION,
            fEnable: true.into(),
            hRgnBlur: hrgn,
            fTransitionOnMaximized: false.into(),
        };
        if let Err(e) = DwmEnableBlurBehindWindow(hwnd, &bb) {
            log::warn!("[surface] DwmEnableBlurBehindWindow failed: {:?}", e);
        }

        let _ = DeleteObject(hrgn);
    }
}

/// Punch the toolbar's bounding box out of the window region so clicks
/// there land on the toolbar instead of the overlay.
fn carve_toolbar_hole(hwnd: HWND, toolbar_bounds: Rect) {
    unsafe {
        let mut window_rect = windows::Win32::Foundation::RECT::default();
        if GetWindowRect(hwnd, &mut window_rect).is_err() {
            return;
        }

        // Freed by SetWindowRgn on success.
        let window_rgn = CreateRectRgn(
            window_rect.left,
            window_rect.top,
            window_rect.right,
            window_rect.bottom,
        );
        let toolbar_rgn = CreateRectRgn(
            toolbar_bounds.left,
            toolbar_bounds.top,
            toolbar_bounds.right,
            toolbar_bounds.bottom,
        );

        let combined = CombineRgn(window_rgn, window_rgn, toolbar_rgn, RGN_DIFF);
        if combined.0 != 0 {
            SetWindowRgn(hwnd, window_rgn, true);
        } else {
            let _ = DeleteObject(window_rgn);
        }
        let _ = DeleteObject(toolbar_rgn);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_classes_are_distinct_per_kind() {
        let measure = unsafe { MEASURE_CLASS.to_string().unwrap() };
        let bounds = unsafe { BOUNDS_CLASS.to_string().unwrap() };
        assert_ne!(measure, bounds);
    }
}
