//! Graphics pipeline for overlay surfaces.
//!
//! ```text
//! D3D11 device
//!     +-- DXGI swap chain (composition, premultiplied alpha)
//!     |       +-- DirectComposition visual tree (transparent window)
//!     +-- D2D device context
//!             +-- palette brushes, label text format
//! ```
//!
//! A [`GraphicsContext`] is built once per session on the session's worker
//! thread and dropped there when the render loop exits.

pub mod compositor;
pub mod d2d;
pub mod d3d;

use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct3D11::ID3D11Device;
use windows::Win32::Graphics::Dxgi::IDXGISwapChain1;

use crate::error::OverlayError;
use crate::theme::Palette;

pub use d2d::{D2dResources, PaletteBrushes};

/// Everything needed to draw one frame on one surface.
pub struct GraphicsContext {
    pub device: ID3D11Device,
    pub swap_chain: IDXGISwapChain1,
    pub compositor: compositor::CompositorResources,
    pub d2d: D2dResources,
}

impl GraphicsContext {
    /// Build the full pipeline for a surface. Any failure here is fatal
    /// for the session; the surface can never show a frame without it.
    pub fn new(
        hwnd: HWND,
        width: u32,
        height: u32,
        palette: &Palette,
    ) -> Result<Self, OverlayError> {
        let device = d3d::create_device()
            .map_err(|e| OverlayError::GraphicsInit(format!("D3D11 device: {:?}", e)))?;

        // A zero-extent work area still gets a (useless but valid) 1x1
        // swap chain so session startup has one failure mode, not two.
        let swap_chain = d3d::create_swap_chain(&device, width.max(1), height.max(1))
            .map_err(|e| OverlayError::GraphicsInit(format!("swap chain: {:?}", e)))?;

        let compositor = compositor::create_compositor(&device, hwnd, &swap_chain)
            .map_err(|e| OverlayError::GraphicsInit(format!("DirectComposition: {:?}", e)))?;

        let d2d = d2d::create_resources(&device, palette)
            .map_err(|e| OverlayError::GraphicsInit(format!("D2D resources: {:?}", e)))?;

        Ok(GraphicsContext {
            device,
            swap_chain,
            compositor,
            d2d,
        })
    }
}
