//! Overlay session lifecycle.
//!
//! A session owns one overlay surface and the worker thread that drives
//! it. Construction blocks until the worker reports the surface ready (or
//! failed); teardown posts WM_CLOSE and joins the worker, so by the time
//! the session is dropped nothing references the shared tool state from
//! another thread.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;

use parking_lot::Mutex;
use windows::Win32::Foundation::{HWND, LPARAM, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{DestroyWindow, PostMessageW, WM_CLOSE};

use crate::error::OverlayError;
use crate::graphics::GraphicsContext;
use crate::input::BoundsToolState;
use crate::monitor::MonitorId;
use crate::render::{self, DrawCallback};
use crate::surface::{self, SurfaceKind};
use crate::theme::Palette;
use crate::types::{Color, Rect};

/// Configuration shared by both tools.
pub struct CommonConfig {
    /// Monitor whose work area the overlay covers.
    pub monitor: MonitorId,
    /// Screen-space bounding box of the host's toolbar, carved out of the
    /// overlay so the toolbar stays clickable.
    pub toolbar_bounds: Rect,
    /// Accent color for measurement lines; the rest of the palette follows
    /// the system light/dark setting.
    pub line_color: Color,
    /// Invoked exactly once, on the worker thread, after the overlay
    /// window is gone and the last frame has been presented.
    pub on_session_completed: Option<Box<dyn FnOnce() + Send>>,
}

/// A live overlay. Dropping it closes the window and waits for the worker
/// to finish.
pub struct OverlaySession {
    hwnd: isize,
    worker: Option<JoinHandle<()>>,
}

impl OverlaySession {
    /// Start a measure tool overlay.
    ///
    /// `tool_state` is whatever the caller's draw callback reads; the
    /// session never interprets it.
    pub fn measure<T: Send + 'static>(
        tool_state: Arc<Mutex<T>>,
        config: CommonConfig,
        draw: DrawCallback<T>,
    ) -> Result<Self, OverlayError> {
        Self::spawn(SurfaceKind::Measure, "measure-overlay", 0, tool_state, config, draw)
    }

    /// Start a bounds tool overlay.
    ///
    /// The shared state is additionally handed to the window procedure so
    /// mouse input can drive the drag machine directly on the worker.
    pub fn bounds(
        tool_state: Arc<Mutex<BoundsToolState>>,
        config: CommonConfig,
        draw: DrawCallback<BoundsToolState>,
    ) -> Result<Self, OverlayError> {
        let create_param = Arc::as_ptr(&tool_state) as isize;
        Self::spawn(
            SurfaceKind::Bounds,
            "bounds-overlay",
            create_param,
            tool_state,
            config,
            draw,
        )
    }

    fn spawn<T: Send + 'static>(
        kind: SurfaceKind,
        thread_name: &str,
        create_param: isize,
        tool_state: Arc<Mutex<T>>,
        mut config: CommonConfig,
        mut draw: DrawCallback<T>,
    ) -> Result<Self, OverlayError> {
        let (tx, rx) = mpsc::channel::<Result<isize, OverlayError>>();

        let worker = std::thread::Builder::new()
            .name(thread_name.to_owned())
            .spawn(move || {
                let on_completed = config.on_session_completed.take();

                let surface = match surface::create_surface(
                    kind,
                    config.monitor,
                    config.toolbar_bounds,
                    create_param,
                ) {
                    Ok(surface) => surface,
                    Err(e) => {
                        let _ = tx.send(Err(e));
                        return;
                    }
                };

                let palette = Palette::resolve(config.line_color);
                let size = (surface.bounds.width(), surface.bounds.height());

                let graphics = match GraphicsContext::new(surface.hwnd, size.0, size.1, &palette)
                {
                    Ok(graphics) => graphics,
                    Err(e) => {
                        unsafe {
                            let _ = DestroyWindow(surface.hwnd);
                        }
                        let _ = tx.send(Err(e));
                        return;
                    }
                };

                let _ = tx.send(Ok(surface.hwnd.0 as isize));

                render::run_loop(surface.hwnd, &graphics, &palette, size, &tool_state, &mut draw);

                log::debug!("[session] render loop finished");
                if let Some(callback) = on_completed {
                    callback();
                }
            })?;

        match rx.recv() {
            Ok(Ok(hwnd)) => Ok(OverlaySession {
                hwnd,
                worker: Some(worker),
            }),
            Ok(Err(e)) => {
                // Worker is already unwinding; reap it before reporting.
                let _ = worker.join();
                Err(e)
            }
            Err(_) => {
                let _ = worker.join();
                Err(OverlayError::WorkerVanished)
            }
        }
    }

    /// Native handle of the overlay window, for callers that need to
    /// position other UI relative to it.
    pub fn surface_handle(&self) -> isize {
        self.hwnd
    }
}

impl Drop for OverlaySession {
    fn drop(&mut self) {
        unsafe {
            let hwnd = HWND(self.hwnd as *mut core::ffi::c_void);
            if let Err(e) = PostMessageW(hwnd, WM_CLOSE, WPARAM(0), LPARAM(0)) {
                // Window may already be gone (user pressed Escape); the
                // join below still reaps the worker either way.
                log::debug!("[session] WM_CLOSE post failed: {:?}", e);
            }
        }

        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("[session] overlay worker panicked");
            }
        }
    }
}
