//! Configuration constants shared across all platforms
//!
//! These values control the defaults and the output contract of the picker.

use crate::common::Color;

/// Title shown on the dialog when `--title` is not given
/// Titre affiché sur la boîte de dialogue sans `--title`
pub const DEFAULT_TITLE: &str = "Color Picker";

/// Seed color used when no argument is passed (opaque black)
/// Couleur initiale sans argument (noir opaque)
pub const DEFAULT_SEED: Color = Color::rgba(0, 0, 0, 0xFF);

/// Printed instead of a color when the user dismisses the dialog
pub const CANCEL_TOKEN: &str = "CANCEL";

/// Exit code for a malformed color argument
/// Code de sortie pour un argument couleur invalide
pub const EXIT_PARSE_ERROR: u8 = 1;

/// Exit code when stdout cannot be written
pub const EXIT_IO_ERROR: u8 = 1;

/// Exit code when no dialog can be shown (headless session, missing helper...)
/// Code de sortie quand aucune boîte de dialogue ne peut être affichée
/// Note: 2 is left to clap for usage errors
pub const EXIT_DIALOG_UNAVAILABLE: u8 = 3;

/// Number of custom color slots in the Windows color dialog
/// Nombre d'emplacements de couleurs personnalisées (Windows)
pub const CUSTOM_COLOR_SLOTS: usize = 16;

/// Size of the color well shown inside the macOS alert (in points)
/// Taille du puits de couleur dans l'alerte macOS (en points)
pub const COLOR_WELL_WIDTH: f64 = 220.0;
pub const COLOR_WELL_HEIGHT: f64 = 44.0;

/// External helper used on Linux to show the GTK color chooser
/// Programme externe utilisé sous Linux pour le sélecteur GTK
pub const ZENITY_PROGRAM: &str = "zenity";
