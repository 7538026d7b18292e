//! Linux implementation of the color dialog
//!
//! Shows the GTK color chooser through the `zenity --color-selection` helper.
//! zenity exits with status 0 and prints the color on confirmation, and exits
//! with status 1 when the dialog is cancelled or closed.

use std::env;
use std::io;
use std::process::{Command, Stdio};

use super::{unit_to_byte, PickRequest};
use crate::common::{parse_hex_color, Color};
use crate::config::ZENITY_PROGRAM;
use crate::error::PickerError;

/// Exit status of zenity when the user presses Cancel or closes the window
const ZENITY_CANCELLED: i32 = 1;

/// Affiche le sélecteur de couleur et attend la réponse
/// Shows the color chooser and waits for the answer
pub fn pick(request: &PickRequest) -> Result<Option<Color>, PickerError> {
    if env::var_os("DISPLAY").is_none() && env::var_os("WAYLAND_DISPLAY").is_none() {
        return Err(PickerError::Unavailable(
            "no graphical session (DISPLAY and WAYLAND_DISPLAY are unset)".to_string(),
        ));
    }

    let output = Command::new(ZENITY_PROGRAM)
        .args(zenity_args(request))
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                PickerError::Unavailable(format!("{ZENITY_PROGRAM} is not installed"))
            }
            _ => PickerError::Unavailable(format!("failed to start {ZENITY_PROGRAM}: {e}")),
        })?;

    match output.status.code() {
        Some(0) => {
            let text = String::from_utf8_lossy(&output.stdout);
            parse_chooser_output(&text, request.seed.a).map(Some)
        }
        Some(ZENITY_CANCELLED) => Ok(None),
        _ => Err(PickerError::Unavailable(format!(
            "{ZENITY_PROGRAM} exited with {}",
            output.status
        ))),
    }
}

/// Arguments passés à zenity / Arguments passed to zenity
fn zenity_args(request: &PickRequest) -> Vec<String> {
    let seed = request.seed;
    vec![
        "--color-selection".to_string(),
        "--show-palette".to_string(),
        format!("--title={}", request.title),
        format!(
            "--color=rgba({},{},{},{:.3})",
            seed.r,
            seed.g,
            seed.b,
            f64::from(seed.a) / 255.0
        ),
    ]
}

/// Analyse la couleur imprimée par le sélecteur GTK
/// Parses the color printed by the GTK chooser
///
/// Accepts `rgb(r,g,b)`, `rgba(r,g,b,a)` with `a` in [0, 1], `#RRGGBB` and
/// the 16-bit `#RRRRGGGGBBBB` form of older releases. Forms without alpha
/// keep `seed_alpha`.
pub(crate) fn parse_chooser_output(text: &str, seed_alpha: u8) -> Result<Color, PickerError> {
    let text = text.trim();
    let unexpected = || PickerError::UnexpectedOutput(text.to_string());

    if let Some(inner) = text.strip_prefix("rgba(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [r, g, b, a] = parts.as_slice() else {
            return Err(unexpected());
        };
        let alpha: f64 = a.parse().map_err(|_| unexpected())?;
        return Ok(Color::rgba(
            r.parse().map_err(|_| unexpected())?,
            g.parse().map_err(|_| unexpected())?,
            b.parse().map_err(|_| unexpected())?,
            unit_to_byte(alpha),
        ));
    }

    if let Some(inner) = text.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(unexpected());
        };
        return Ok(Color::rgba(
            r.parse().map_err(|_| unexpected())?,
            g.parse().map_err(|_| unexpected())?,
            b.parse().map_err(|_| unexpected())?,
            seed_alpha,
        ));
    }

    if let Some(hex) = text.strip_prefix('#') {
        if hex.len() == 12 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            // Octet de poids fort de chaque canal 16 bits
            // High byte of each 16-bit channel
            let high = |i: usize| u8::from_str_radix(&hex[i * 4..i * 4 + 2], 16);
            return match (high(0), high(1), high(2)) {
                (Ok(r), Ok(g), Ok(b)) => Ok(Color::rgba(r, g, b, seed_alpha)),
                _ => Err(unexpected()),
            };
        }
        if hex.len() == 6 {
            return parse_hex_color(text)
                .map(|color| color.with_alpha(seed_alpha))
                .map_err(|_| unexpected());
        }
    }

    Err(unexpected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb_keeps_seed_alpha() {
        assert_eq!(
            parse_chooser_output("rgb(255,0,128)\n", 0x40).unwrap(),
            Color::rgba(255, 0, 128, 0x40)
        );
    }

    #[test]
    fn test_parse_rgba() {
        assert_eq!(
            parse_chooser_output("rgba(0, 0, 0, 0.5)", 0xFF).unwrap(),
            Color::rgba(0, 0, 0, 128)
        );
        assert_eq!(
            parse_chooser_output("rgba(1,2,3,1)", 0).unwrap(),
            Color::rgba(1, 2, 3, 255)
        );
    }

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(
            parse_chooser_output("#ff8000", 0xFF).unwrap(),
            Color::rgb(255, 128, 0)
        );
        assert_eq!(
            parse_chooser_output("#ffff80000000", 0x10).unwrap(),
            Color::rgba(255, 128, 0, 0x10)
        );
    }

    #[test]
    fn test_parse_garbage() {
        for text in ["", "red", "rgb(1,2)", "rgb(256,0,0)", "rgba(1,2,3,x)", "#12345"] {
            assert!(
                matches!(parse_chooser_output(text, 0xFF), Err(PickerError::UnexpectedOutput(_))),
                "{text:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_zenity_args_carry_seed_and_title() {
        let request = PickRequest {
            seed: Color::rgba(255, 0, 255, 0x80),
            alpha: true,
            title: "Pick".to_string(),
            hide_console: false,
        };
        let args = zenity_args(&request);
        assert!(args.contains(&"--color-selection".to_string()));
        assert!(args.contains(&"--title=Pick".to_string()));
        assert!(args.contains(&"--color=rgba(255,0,255,0.502)".to_string()));
    }
}
