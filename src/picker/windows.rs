//! Windows implementation of the color dialog
//!
//! Uses the common dialog `ChooseColorW`. The Win32 dialog has no alpha
//! control, so the seed alpha is carried over to the result.

use windows::Win32::Foundation::{COLORREF, HWND};
use windows::Win32::System::Console::GetConsoleWindow;
use windows::Win32::UI::Controls::Dialogs::{
    ChooseColorW, CommDlgExtendedError, CC_ANYCOLOR, CC_FULLOPEN, CC_RGBINIT, CHOOSECOLORW,
};
use windows::Win32::UI::WindowsAndMessaging::{ShowWindow, SW_HIDE, SW_SHOW};

use super::PickRequest;
use crate::common::Color;
use crate::config::CUSTOM_COLOR_SLOTS;
use crate::error::PickerError;

// =============================================================================
// CONVERSIONS COLORREF
// COLORREF CONVERSIONS
// =============================================================================

/// Crée un COLORREF Win32 (0x00BBGGRR) à partir d'une couleur
/// Creates a Win32 COLORREF (0x00BBGGRR) from a color
fn color_to_colorref(color: Color) -> COLORREF {
    COLORREF((color.r as u32) | ((color.g as u32) << 8) | ((color.b as u32) << 16))
}

/// Convertit un COLORREF en couleur avec l'alpha donné
/// Converts a COLORREF back to a color with the given alpha
fn colorref_to_color(cr: COLORREF, alpha: u8) -> Color {
    Color::rgba(
        (cr.0 & 0xFF) as u8,
        ((cr.0 >> 8) & 0xFF) as u8,
        ((cr.0 >> 16) & 0xFF) as u8,
        alpha,
    )
}

// =============================================================================
// CONSOLE
// =============================================================================

/// Masque la fenêtre console et la restaure à la destruction
/// Hides the console window and restores it on drop
struct ConsoleGuard {
    hwnd: HWND,
    hidden: bool,
}

impl ConsoleGuard {
    fn new(hide: bool) -> Self {
        let hwnd = unsafe { GetConsoleWindow() };
        let hidden = hide && !hwnd.0.is_null();
        if hidden {
            unsafe {
                let _ = ShowWindow(hwnd, SW_HIDE);
            }
        }
        Self { hwnd, hidden }
    }
}

impl Drop for ConsoleGuard {
    fn drop(&mut self) {
        if self.hidden {
            unsafe {
                let _ = ShowWindow(self.hwnd, SW_SHOW);
            }
        }
    }
}

// =============================================================================
// API PUBLIQUE
// PUBLIC API
// =============================================================================

/// Affiche ChooseColorW et attend la réponse
/// Shows ChooseColorW and waits for the answer
///
/// # Returns
/// * `Ok(Some(color))` - OK pressed
/// * `Ok(None)` - Cancel pressed or dialog closed
/// * `Err(..)` - the dialog could not be created
pub fn pick(request: &PickRequest) -> Result<Option<Color>, PickerError> {
    let console = ConsoleGuard::new(request.hide_console);

    // Couleurs personnalisées, locales à cet appel
    // Custom colors, local to this call
    let mut custom_colors = [COLORREF(0x00FF_FFFF); CUSTOM_COLOR_SLOTS];

    let mut cc = CHOOSECOLORW {
        lStructSize: std::mem::size_of::<CHOOSECOLORW>() as u32,
        hwndOwner: console.hwnd,
        rgbResult: color_to_colorref(request.seed),
        lpCustColors: custom_colors.as_mut_ptr(),
        Flags: CC_FULLOPEN | CC_RGBINIT | CC_ANYCOLOR,
        ..Default::default()
    };

    if unsafe { ChooseColorW(&mut cc) }.as_bool() {
        return Ok(Some(colorref_to_color(cc.rgbResult, request.seed.a)));
    }

    // 0 = annulé par l'utilisateur, sinon échec du dialogue
    // 0 = cancelled by the user, otherwise the dialog failed
    let code = unsafe { CommDlgExtendedError() };
    if code.0 == 0 {
        Ok(None)
    } else {
        Err(PickerError::Unavailable(format!(
            "ChooseColorW failed with error {:#06X}",
            code.0
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorref_layout() {
        assert_eq!(color_to_colorref(Color::rgb(0x12, 0x34, 0x56)).0, 0x0056_3412);
    }

    #[test]
    fn test_colorref_keeps_alpha() {
        let color = Color::rgba(255, 0, 128, 0x80);
        assert_eq!(colorref_to_color(color_to_colorref(color), color.a), color);
    }
}
