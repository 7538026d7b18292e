//! Command line arguments

use clap::Parser;

use crate::config;

/// Open the native color dialog and print the chosen color as #RRGGBBAA
///
/// Prints CANCEL when the dialog is dismissed.
#[derive(Parser, Debug, Clone)]
#[command(name = "colorpicker", version, about)]
pub struct Cli {
    /// Seed color: #RRGGBB, RRGGBB, RRGGBBAA or #RRGGBBAA (default: opaque black)
    #[arg(value_name = "COLOR")]
    pub color: Option<String>,

    /// Dialog title
    #[arg(short, long, default_value = config::DEFAULT_TITLE)]
    pub title: String,

    /// Hide the alpha control and always print FF as alpha
    #[arg(long)]
    pub no_alpha: bool,

    /// Hide the console window while the dialog is open (Windows only)
    #[arg(long)]
    pub hide_console: bool,

    /// Trace the invocation on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
