//! Win32 window procedures for the two overlay surfaces.
//!
//! The procedures only translate raw messages into [`OverlayEvent`]s, run
//! them through the pure reaction functions in [`crate::input`], and apply
//! the resulting [`OverlayReaction`]. All decision logic lives in the
//! input module where it is testable without a window.

use parking_lot::Mutex;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, WPARAM};
use windows::Win32::Graphics::Gdi::ScreenToClient;
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, GetCursorPos, GetWindowLongPtrW, PostMessageW, PostQuitMessage,
    SetWindowLongPtrW, CREATESTRUCTW, GWLP_USERDATA, WM_CLOSE, WM_CREATE, WM_DESTROY,
    WM_ERASEBKGND, WM_KEYUP, WM_LBUTTONDOWN, WM_LBUTTONUP, WM_RBUTTONUP,
};

use crate::clipboard;
use crate::input::{bounds, measure, BoundsToolState, OverlayEvent, OverlayReaction};
use crate::types::Point;

/// Window procedure for measure surfaces.
///
/// # Safety
/// Win32 callback; called only on the surface's worker thread.
pub unsafe extern "system" fn measure_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    if msg == WM_DESTROY {
        restore_cursor();
        PostQuitMessage(0);
        return LRESULT(0);
    }

    let event = match msg {
        WM_CREATE => OverlayEvent::SurfaceCreated,
        WM_KEYUP => OverlayEvent::KeyUp(wparam.0 as u32),
        WM_LBUTTONUP => OverlayEvent::LeftButtonUp(cursor_in_client(hwnd)),
        WM_RBUTTONUP => OverlayEvent::RightButtonUp,
        WM_ERASEBKGND => OverlayEvent::EraseBackground,
        _ => return DefWindowProcW(hwnd, msg, wparam, lparam),
    };

    apply_reaction(hwnd, measure::react(event), msg, wparam, lparam)
}

/// Window procedure for bounds surfaces.
///
/// The shared tool state arrives as `lpCreateParams` and is stashed in the
/// window's user data, so every surface carries its own state pointer.
///
/// # Safety
/// Win32 callback; the create param must point to a `Mutex<BoundsToolState>`
/// that outlives the window. The session owns both and joins the worker
/// before dropping the state.
pub unsafe extern "system" fn bounds_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_CREATE => {
            let create = lparam.0 as *const CREATESTRUCTW;
            if !create.is_null() {
                SetWindowLongPtrW(hwnd, GWLP_USERDATA, (*create).lpCreateParams as isize);
            }
            return LRESULT(0);
        }
        WM_DESTROY => {
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
            PostQuitMessage(0);
            return LRESULT(0);
        }
        _ => {}
    }

    let event = match msg {
        WM_KEYUP => OverlayEvent::KeyUp(wparam.0 as u32),
        WM_LBUTTONDOWN => OverlayEvent::LeftButtonDown(cursor_in_client(hwnd)),
        WM_LBUTTONUP => OverlayEvent::LeftButtonUp(cursor_in_client(hwnd)),
        WM_RBUTTONUP => OverlayEvent::RightButtonUp,
        WM_ERASEBKGND => OverlayEvent::EraseBackground,
        _ => return DefWindowProcW(hwnd, msg, wparam, lparam),
    };

    let state_ptr = GetWindowLongPtrW(hwnd, GWLP_USERDATA) as *const Mutex<BoundsToolState>;
    if state_ptr.is_null() {
        return DefWindowProcW(hwnd, msg, wparam, lparam);
    }

    let reaction = bounds::react(&mut (*state_ptr).lock(), event);
    apply_reaction(hwnd, reaction, msg, wparam, lparam)
}

/// Act on a reaction from the input machines.
unsafe fn apply_reaction(
    hwnd: HWND,
    reaction: OverlayReaction,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match reaction {
        OverlayReaction::Handled => LRESULT(1),
        OverlayReaction::HideCursor => {
            hide_cursor();
            LRESULT(0)
        }
        OverlayReaction::RequestClose => {
            let _ = PostMessageW(hwnd, WM_CLOSE, WPARAM(0), LPARAM(0));
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
        OverlayReaction::CommitRegion(selection) => {
            let rect = selection.rect();
            clipboard::set_text(&format!("{} x {}", rect.width(), rect.height()));
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
        OverlayReaction::CopyMeasurement => {
            // TODO: route the measurement text produced by the draw
            // callback into clipboard::set_text.
            DefWindowProcW(hwnd, msg, wparam, lparam)
        }
        OverlayReaction::Ignored => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

/// Current cursor position in the window's client coordinates.
unsafe fn cursor_in_client(hwnd: HWND) -> Point {
    let mut pos = POINT::default();
    let _ = GetCursorPos(&mut pos);
    let _ = ScreenToClient(hwnd, &mut pos);
    Point::new(pos.x, pos.y)
}

/// Hide the system cursor; the measure surface draws its own crosshair.
#[cfg(not(feature = "debug-overlay"))]
fn hide_cursor() {
    use windows::Win32::UI::WindowsAndMessaging::ShowCursor;

    unsafe { while ShowCursor(false) >= 0 {} }
}

/// Bring the cursor back when a measure surface is destroyed.
#[cfg(not(feature = "debug-overlay"))]
fn restore_cursor() {
    use windows::Win32::UI::WindowsAndMessaging::ShowCursor;

    unsafe { while ShowCursor(true) < 0 {} }
}

/// Debug builds keep the cursor visible so the overlay can be inspected.
#[cfg(feature = "debug-overlay")]
fn hide_cursor() {}

#[cfg(feature = "debug-overlay")]
fn restore_cursor() {}
