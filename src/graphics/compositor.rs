//! DirectComposition visual tree for the overlay window.

// Target and visual are kept alive for the session even though only the
// device is touched after setup.
#![allow(dead_code)]

use windows::core::{Interface, Result};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Direct3D11::ID3D11Device;
use windows::Win32::Graphics::DirectComposition::{
    DCompositionCreateDevice, IDCompositionDevice, IDCompositionTarget, IDCompositionVisual,
};
use windows::Win32::Graphics::Dxgi::{IDXGIDevice, IDXGISwapChain1};

/// Composition device, window target, and the single root visual that
/// shows the swap chain.
pub struct CompositorResources {
    pub device: IDCompositionDevice,
    pub target: IDCompositionTarget,
    pub visual: IDCompositionVisual,
}

/// Bind the swap chain to the window through a one-visual tree and commit
/// the initial (empty) frame.
pub fn create_compositor(
    d3d_device: &ID3D11Device,
    hwnd: HWND,
    swap_chain: &IDXGISwapChain1,
) -> Result<CompositorResources> {
    unsafe {
        let dxgi_device: IDXGIDevice = d3d_device.cast()?;

        let device: IDCompositionDevice = DCompositionCreateDevice(&dxgi_device)?;
        let target = device.CreateTargetForHwnd(hwnd, true)?;
        let visual = device.CreateVisual()?;

        visual.SetContent(swap_chain)?;
        target.SetRoot(&visual)?;
        device.Commit()?;

        Ok(CompositorResources {
            device,
            target,
            visual,
        })
    }
}
