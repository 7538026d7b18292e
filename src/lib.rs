//! =============================================================================
//! colorpicker - Sélecteur de couleur natif en ligne de commande
//! colorpicker - Native color picker for the command line
//! =============================================================================
//!
//! Ouvre la boîte de dialogue de couleur du système, initialisée avec la
//! couleur passée en argument, et imprime la couleur choisie.
//!
//! Opens the system color dialog, seeded with the color given as argument,
//! and prints the chosen color.
//!
//! # Sortie / Output
//! - `#RRGGBBAA` (uppercase) when the user confirms
//! - `CANCEL` when the user dismisses the dialog
//!
//! Nothing else is written to stdout; diagnostics go to stderr.

// =============================================================================
// MODULES
// =============================================================================

/// Arguments de la ligne de commande
/// Command line arguments
pub mod cli;

/// Type couleur et codec de l'argument
/// Color type and argument codec
pub mod common;

/// Configuration partagée (constantes)
/// Shared configuration (constants)
pub mod config;

pub mod error;

/// Boîtes de dialogue natives par plateforme
/// Native dialogs per platform
pub mod picker;

use std::io::Write;

use crate::cli::Cli;
use crate::common::PickOutcome;
use crate::error::AppError;
use crate::picker::{ColorDialog, PickRequest};

// =============================================================================
// TRACE
// =============================================================================

/// Écrit une ligne de trace sur stderr si `--verbose` est actif
/// Writes a trace line to stderr when `--verbose` is set
fn trace(cli: &Cli, message: impl std::fmt::Display) {
    if cli.verbose {
        eprintln!("colorpicker: {message}");
    }
}

// =============================================================================
// POINT D'ENTRÉE
// ENTRY POINT
// =============================================================================

/// Exécute une invocation complète
/// Runs one complete invocation
///
/// Parse the argument, show the dialog, write the result to `out`.
/// A malformed argument fails before any dialog is shown.
///
/// # Returns
/// * `Ok(PickOutcome)` - color selected or dialog cancelled (exit code 0)
/// * `Err(AppError)` - parse error, dialog unavailable or write failure
pub fn run(cli: &Cli, dialog: &mut dyn ColorDialog, out: &mut dyn Write) -> Result<PickOutcome, AppError> {
    let request = PickRequest::from_cli(cli)?;
    trace(cli, format_args!("seed {} (alpha {})", request.seed, if request.alpha { "on" } else { "off" }));

    let outcome = match dialog.pick(&request)? {
        Some(color) if request.alpha => PickOutcome::Selected(color),
        Some(color) => PickOutcome::Selected(color.opaque()),
        None => PickOutcome::Cancelled,
    };
    trace(cli, format_args!("outcome {outcome}"));

    // Pas de saut de ligne final / No trailing newline
    write!(out, "{outcome}")?;
    out.flush()?;

    Ok(outcome)
}

// =============================================================================
// TESTS
// =============================================================================
