//! Per-session render loop.
//!
//! Frames are produced continuously: draw, present, invalidate, then block
//! on exactly one window message. Input therefore wakes the loop
//! immediately while an idle overlay still repaints after every message
//! instead of spinning.

use parking_lot::Mutex;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct2D::Common::D2D1_COLOR_F;
use windows::Win32::Graphics::Direct2D::ID2D1DeviceContext;
use windows::Win32::Graphics::DirectWrite::IDWriteTextFormat;
use windows::Win32::Graphics::Dxgi::{IDXGISurface, DXGI_PRESENT};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, InvalidateRect, IsWindow, TranslateMessage, MSG,
};

use crate::graphics::{d2d, GraphicsContext, PaletteBrushes};
use crate::theme::Palette;

/// Drawing context handed to the tool's draw callback each frame.
///
/// The target is already cleared to fully transparent and BeginDraw has
/// been called; the callback only adds the tool's own geometry and text.
pub struct FrameContext<'a> {
    /// Surface being drawn. Tools use it to map screen coordinates into
    /// client space.
    pub hwnd: HWND,
    pub context: &'a ID2D1DeviceContext,
    pub brushes: &'a PaletteBrushes,
    pub text_format: &'a IDWriteTextFormat,
    pub palette: &'a Palette,
    /// Surface extent in pixels.
    pub size: (u32, u32),
}

/// Tool-specific frame drawing. Runs on the session worker with the tool
/// state lock held, so callbacks must not call back into the session.
pub type DrawCallback<T> = Box<dyn FnMut(&T, &FrameContext<'_>) + Send>;

/// Drive the surface until its window is destroyed.
///
/// A failed frame is logged and skipped; the loop only ends when the
/// window goes away or the message pump sees WM_QUIT.
pub fn run_loop<T>(
    hwnd: HWND,
    graphics: &GraphicsContext,
    palette: &Palette,
    size: (u32, u32),
    tool_state: &Mutex<T>,
    draw: &mut DrawCallback<T>,
) {
    unsafe {
        while IsWindow(hwnd).as_bool() {
            if let Err(e) = draw_frame(hwnd, graphics, palette, size, tool_state, draw) {
                log::error!("[render] frame failed: {:?}", e);
            }

            let _ = InvalidateRect(hwnd, None, true);

            if !pump_one_message() {
                break;
            }
        }
    }
}

fn draw_frame<T>(
    hwnd: HWND,
    graphics: &GraphicsContext,
    palette: &Palette,
    size: (u32, u32),
    tool_state: &Mutex<T>,
    draw: &mut DrawCallback<T>,
) -> windows::core::Result<()> {
    let d2d = &graphics.d2d;

    unsafe {
        let surface: IDXGISurface = graphics.swap_chain.GetBuffer(0)?;
        let target_bitmap = d2d::create_target_bitmap(&d2d.context, &surface)?;

        d2d.context.SetTarget(&target_bitmap);
        d2d.context.BeginDraw();

        d2d.context.Clear(Some(&D2D1_COLOR_F {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        }));

        {
            let frame = FrameContext {
                hwnd,
                context: &d2d.context,
                brushes: &d2d.brushes,
                text_format: &d2d.text_format,
                palette,
                size,
            };
            let state = tool_state.lock();
            draw(&state, &frame);
        }

        d2d.context.EndDraw(None, None)?;

        graphics.swap_chain.Present(1, DXGI_PRESENT(0)).ok()?;
        graphics.compositor.device.Commit()?;
    }

    Ok(())
}

/// Block for one message and dispatch it. Returns false when the pump
/// should stop (WM_QUIT or a pump error).
fn pump_one_message() -> bool {
    unsafe {
        let mut msg = MSG::default();
        let res = GetMessageW(&mut msg, None, 0, 0);
        if res.0 <= 0 {
            return false;
        }
        let _ = TranslateMessage(&msg);
        DispatchMessageW(&msg);
        true
    }
}
