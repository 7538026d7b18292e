// =============================================================================
// picker/mod.rs - Color dialog module
// =============================================================================

use crate::cli::Cli;
use crate::common::{decode_argument, Color};
use crate::error::{ColorParseError, PickerError};

/// Implémentation macOS
/// macOS implementation
#[cfg(target_os = "macos")]
pub mod macos;

/// Implémentation Windows
/// Windows implementation
#[cfg(target_os = "windows")]
pub mod windows;

/// Implémentation Linux (sélecteur GTK via zenity)
/// Linux implementation (GTK chooser through zenity)
#[cfg(target_os = "linux")]
pub mod linux;

// =============================================================================
// REQUÊTE
// REQUEST
// =============================================================================

/// Paramètres d'ouverture de la boîte de dialogue
/// Parameters used to open the dialog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickRequest {
    /// Couleur initiale / Initial color
    pub seed: Color,
    /// Affiche le contrôle alpha / Shows the alpha control
    pub alpha: bool,
    pub title: String,
    /// Masque la console pendant le dialogue (Windows)
    /// Hides the console while the dialog is open (Windows)
    pub hide_console: bool,
}

impl PickRequest {
    /// Construit la requête à partir des arguments, sans ouvrir de fenêtre
    /// Builds the request from the arguments, without opening any window
    pub fn from_cli(cli: &Cli) -> Result<Self, ColorParseError> {
        let seed = decode_argument(cli.color.as_deref())?;
        let alpha = !cli.no_alpha;

        Ok(Self {
            seed: if alpha { seed } else { seed.opaque() },
            alpha,
            title: cli.title.clone(),
            hide_console: cli.hide_console,
        })
    }
}

// =============================================================================
// TRAIT
// =============================================================================

/// Boîte de dialogue modale de sélection de couleur
/// Modal color selection dialog
///
/// Blocks until the user confirms or cancels.
/// Returns `Ok(None)` on cancellation.
pub trait ColorDialog {
    fn pick(&mut self, request: &PickRequest) -> Result<Option<Color>, PickerError>;
}

/// Boîte de dialogue native de la plateforme courante
/// Native dialog of the current platform
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeDialog;

impl ColorDialog for NativeDialog {
    fn pick(&mut self, request: &PickRequest) -> Result<Option<Color>, PickerError> {
        #[cfg(target_os = "macos")]
        {
            macos::pick(request)
        }

        #[cfg(target_os = "windows")]
        {
            windows::pick(request)
        }

        #[cfg(target_os = "linux")]
        {
            linux::pick(request)
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            let _ = request;
            Err(PickerError::Unavailable(
                "Plateforme non supportée / Unsupported platform".to_string(),
            ))
        }
    }
}

/// Convertit une composante [0.0, 1.0] en octet
/// Converts a [0.0, 1.0] component to a byte
#[cfg_attr(not(any(target_os = "macos", target_os = "linux")), allow(dead_code))]
pub(crate) fn unit_to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
