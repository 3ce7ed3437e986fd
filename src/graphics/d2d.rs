//! Direct2D resources for overlay drawing.
//!
//! One device context per session plus the solid brushes derived from the
//! session palette and a text format for measurement labels. The render
//! target bitmap is recreated each frame from the swap chain back buffer.

use windows::core::{Interface, Result, PCWSTR};
use windows::Foundation::Numerics::Matrix3x2;
use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_ALPHA_MODE_PREMULTIPLIED, D2D1_PIXEL_FORMAT,
};
use windows::Win32::Graphics::Direct2D::{
    D2D1CreateFactory, D2D1_BITMAP_OPTIONS_CANNOT_DRAW, D2D1_BITMAP_OPTIONS_TARGET,
    D2D1_BITMAP_PROPERTIES1, D2D1_BRUSH_PROPERTIES, D2D1_DEVICE_CONTEXT_OPTIONS_NONE,
    D2D1_FACTORY_TYPE_SINGLE_THREADED, ID2D1Bitmap1, ID2D1Device, ID2D1DeviceContext,
    ID2D1Factory1, ID2D1RenderTarget, ID2D1SolidColorBrush,
};
use windows::Win32::Graphics::Direct3D11::ID3D11Device;
use windows::Win32::Graphics::DirectWrite::{
    DWriteCreateFactory, IDWriteFactory, IDWriteTextFormat, DWRITE_FACTORY_TYPE_SHARED,
    DWRITE_FONT_STRETCH_NORMAL, DWRITE_FONT_STYLE_NORMAL, DWRITE_FONT_WEIGHT_BOLD,
    DWRITE_PARAGRAPH_ALIGNMENT_CENTER, DWRITE_TEXT_ALIGNMENT_CENTER,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_B8G8R8A8_UNORM;
use windows::Win32::Graphics::Dxgi::{IDXGIDevice, IDXGISurface};

use crate::theme::Palette;

/// Solid brushes matching the session palette, one per role.
pub struct PaletteBrushes {
    /// Measurement lines and region outlines.
    pub line: ID2D1SolidColorBrush,
    /// Label text.
    pub foreground: ID2D1SolidColorBrush,
    /// Label background fill.
    pub background: ID2D1SolidColorBrush,
    /// Label border.
    pub border: ID2D1SolidColorBrush,
}

/// Direct2D state held for the lifetime of a session.
pub struct D2dResources {
    pub context: ID2D1DeviceContext,
    pub brushes: PaletteBrushes,
    pub text_format: IDWriteTextFormat,
}

/// Create a D2D device context on top of the session's D3D device.
pub fn create_context(d3d_device: &ID3D11Device) -> Result<ID2D1DeviceContext> {
    unsafe {
        let factory: ID2D1Factory1 = D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)?;
        let dxgi_device: IDXGIDevice = d3d_device.cast()?;
        let d2d_device: ID2D1Device = factory.CreateDevice(&dxgi_device)?;
        d2d_device.CreateDeviceContext(D2D1_DEVICE_CONTEXT_OPTIONS_NONE)
    }
}

/// Create the four palette brushes.
pub fn create_brushes(context: &ID2D1DeviceContext, palette: &Palette) -> Result<PaletteBrushes> {
    let render_target: ID2D1RenderTarget = context.cast()?;
    let props = D2D1_BRUSH_PROPERTIES {
        opacity: 1.0,
        transform: Matrix3x2::identity(),
    };

    unsafe {
        Ok(PaletteBrushes {
            line: render_target.CreateSolidColorBrush(&palette.line.to_d2d(), Some(&props))?,
            foreground: render_target
                .CreateSolidColorBrush(&palette.foreground.to_d2d(), Some(&props))?,
            background: render_target
                .CreateSolidColorBrush(&palette.background.to_d2d(), Some(&props))?,
            border: render_target.CreateSolidColorBrush(&palette.border.to_d2d(), Some(&props))?,
        })
    }
}

/// Text format for measurement labels.
pub fn create_text_format() -> Result<IDWriteTextFormat> {
    unsafe {
        let factory: IDWriteFactory = DWriteCreateFactory(DWRITE_FACTORY_TYPE_SHARED)?;

        let font: Vec<u16> = "Segoe UI\0".encode_utf16().collect();
        let locale: Vec<u16> = "en-US\0".encode_utf16().collect();

        let format = factory.CreateTextFormat(
            PCWSTR(font.as_ptr()),
            None,
            DWRITE_FONT_WEIGHT_BOLD,
            DWRITE_FONT_STYLE_NORMAL,
            DWRITE_FONT_STRETCH_NORMAL,
            14.0,
            PCWSTR(locale.as_ptr()),
        )?;

        format.SetTextAlignment(DWRITE_TEXT_ALIGNMENT_CENTER)?;
        format.SetParagraphAlignment(DWRITE_PARAGRAPH_ALIGNMENT_CENTER)?;

        Ok(format)
    }
}

/// Create everything the render loop needs for drawing.
pub fn create_resources(d3d_device: &ID3D11Device, palette: &Palette) -> Result<D2dResources> {
    let context = create_context(d3d_device)?;
    let brushes = create_brushes(&context, palette)?;
    let text_format = create_text_format()?;

    Ok(D2dResources {
        context,
        brushes,
        text_format,
    })
}

/// Wrap the swap chain back buffer in a D2D bitmap. Called once per frame.
pub fn create_target_bitmap(
    context: &ID2D1DeviceContext,
    surface: &IDXGISurface,
) -> Result<ID2D1Bitmap1> {
    let bitmap_props = D2D1_BITMAP_PROPERTIES1 {
        pixelFormat: D2D1_PIXEL_FORMAT {
            format: DXGI_FORMAT_B8G8R8A8_UNORM,
            alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED,
        },
        dpiX: 96.0,
        dpiY: 96.0,
        bitmapOptions: D2D1_BITMAP_OPTIONS_TARGET | D2D1_BITMAP_OPTIONS_CANNOT_DRAW,
        colorContext: std::mem::ManuallyDrop::new(None),
    };

    unsafe { context.CreateBitmapFromDxgiSurface(surface, Some(&bitmap_props)) }
}
