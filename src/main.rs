//! =============================================================================
//! colorpicker - Application principale
//! colorpicker - Main application
//! =============================================================================
//!
//! Usage: `colorpicker [OPTIONS] [COLOR]`
//!
//! # Codes de sortie / Exit codes
//! - 0: couleur choisie ou annulation / color chosen or cancelled
//! - 1: argument couleur invalide / invalid color argument
//! - 2: erreur d'utilisation (clap) / usage error (clap)
//! - 3: boîte de dialogue indisponible / dialog unavailable

use std::io;
use std::process::ExitCode;

use clap::Parser;

use colorpicker::cli::Cli;
use colorpicker::picker::NativeDialog;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match colorpicker::run(&cli, &mut NativeDialog, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("colorpicker: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
