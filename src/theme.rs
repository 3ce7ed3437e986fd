//! Palette resolution from the system light/dark appearance.
//!
//! A session resolves its palette exactly once at construction; the palette
//! is immutable for the lifetime of the overlay.

use serde::Serialize;

use crate::types::Color;

/// System appearance mode, polled once per palette resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppearanceMode {
    Light,
    Dark,
}

/// The resolved set of colors used for one render session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    /// The caller-chosen measurement line color, passed through unchanged.
    pub line: Color,
    pub foreground: Color,
    pub background: Color,
    pub border: Color,
}

mod colors {
    use crate::types::Color;

    pub const LIGHT_FOREGROUND: Color = Color::opaque(0.0, 0.0, 0.0);
    pub const LIGHT_BACKGROUND: Color = Color::opaque(0.96, 0.96, 0.96);

    pub const DARK_FOREGROUND: Color = Color::opaque(1.0, 1.0, 1.0);
    pub const DARK_BACKGROUND: Color = Color::opaque(0.17, 0.17, 0.17);

    /// Same border in both modes.
    pub const BORDER: Color = Color::new(0.44, 0.44, 0.44, 0.4);
}

/// Derive the 4-color palette for a given line color and appearance mode.
pub fn resolve_palette(line: Color, mode: AppearanceMode) -> Palette {
    match mode {
        AppearanceMode::Light => Palette {
            line,
            foreground: colors::LIGHT_FOREGROUND,
            background: colors::LIGHT_BACKGROUND,
            border: colors::BORDER,
        },
        AppearanceMode::Dark => Palette {
            line,
            foreground: colors::DARK_FOREGROUND,
            background: colors::DARK_BACKGROUND,
            border: colors::BORDER,
        },
    }
}

impl Palette {
    /// Resolve a palette against the current system appearance.
    pub fn resolve(line: Color) -> Self {
        resolve_palette(line, system_appearance())
    }
}

/// Read the current system appearance mode.
///
/// Queries the per-user `AppsUseLightTheme` registry value; an unreadable
/// value is treated as light mode.
#[cfg(windows)]
pub fn system_appearance() -> AppearanceMode {
    use windows::core::w;
    use windows::Win32::System::Registry::{RegGetValueW, HKEY_CURRENT_USER, RRF_RT_REG_DWORD};

    let mut data: u32 = 1;
    let mut size = std::mem::size_of::<u32>() as u32;

    let status = unsafe {
        RegGetValueW(
            HKEY_CURRENT_USER,
            w!("Software\\Microsoft\\Windows\\CurrentVersion\\Themes\\Personalize"),
            w!("AppsUseLightTheme"),
            RRF_RT_REG_DWORD,
            None,
            Some(&mut data as *mut u32 as *mut _),
            Some(&mut size),
        )
    };

    if status.is_ok() && data == 0 {
        AppearanceMode::Dark
    } else {
        AppearanceMode::Light
    }
}

#[cfg(not(windows))]
pub fn system_appearance() -> AppearanceMode {
    AppearanceMode::Light
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINE: Color = Color::opaque(0.2, 0.5, 0.9);

    #[test]
    fn light_mode_palette() {
        let p = resolve_palette(LINE, AppearanceMode::Light);
        assert_eq!(p.foreground, Color::opaque(0.0, 0.0, 0.0));
        assert_eq!(p.background, Color::opaque(0.96, 0.96, 0.96));
        assert_eq!(p.border, Color::new(0.44, 0.44, 0.44, 0.4));
    }

    #[test]
    fn dark_mode_palette() {
        let p = resolve_palette(LINE, AppearanceMode::Dark);
        assert_eq!(p.foreground, Color::opaque(1.0, 1.0, 1.0));
        assert_eq!(p.background, Color::opaque(0.17, 0.17, 0.17));
        assert_eq!(p.border, Color::new(0.44, 0.44, 0.44, 0.4));
    }

    #[test]
    fn line_color_passes_through_in_both_modes() {
        assert_eq!(resolve_palette(LINE, AppearanceMode::Light).line, LINE);
        assert_eq!(resolve_palette(LINE, AppearanceMode::Dark).line, LINE);
    }
}
