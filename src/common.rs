//! =============================================================================
//! COMMON.RS - Code partagé entre les plateformes
//! COMMON.RS - Shared code between platforms
//! =============================================================================
//!
//! Ce module contient le type couleur et le codec de l'argument couleur.
//! This module contains the color type and the color argument codec.
//!
//! Accepted arguments: `#RRGGBB`, `RRGGBB`, `RRGGBBAA`, `#RRGGBBAA`
//! (hex digits in any case). Output is always `#RRGGBBAA` in uppercase.

use std::fmt;
use std::str::FromStr;

use crate::config;
use crate::error::{Channel, ColorParseError};

// =============================================================================
// STRUCTURES DE COULEUR
// COLOR STRUCTURES
// =============================================================================

/// Couleur RGBA 8 bits par canal
/// RGBA color, 8 bits per channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Canal alpha (255 = opaque)
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Couleur opaque à partir de composantes RGB
    /// Opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Même couleur avec l'alpha forcé à 255
    /// Same color with alpha forced to 255
    pub const fn opaque(self) -> Self {
        Self { a: 0xFF, ..self }
    }

    /// Même couleur avec un autre alpha
    /// Same color with another alpha
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        config::DEFAULT_SEED
    }
}

/// Formate en "#RRGGBBAA" (majuscules, 9 caractères)
/// Formats as "#RRGGBBAA" (uppercase, 9 characters)
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

// =============================================================================
// RÉSULTAT DU PICKER
// PICKER OUTCOME
// =============================================================================

/// Issue d'une invocation : couleur confirmée ou annulation
/// Outcome of one invocation: confirmed color or cancellation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickOutcome {
    Selected(Color),
    Cancelled,
}

impl fmt::Display for PickOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickOutcome::Selected(color) => write!(f, "{}", encode_color(*color)),
            PickOutcome::Cancelled => f.write_str(config::CANCEL_TOKEN),
        }
    }
}

// =============================================================================
// FONCTIONS DE DÉCODAGE
// DECODING FUNCTIONS
// =============================================================================

/// Décode l'argument optionnel de la ligne de commande
/// Decodes the optional command line argument
///
/// # Returns
/// Noir opaque sans argument / Opaque black when absent
pub fn decode_argument(argument: Option<&str>) -> Result<Color, ColorParseError> {
    match argument {
        None => Ok(Color::default()),
        Some(text) => parse_hex_color(text),
    }
}

/// Analyse "#RRGGBB", "RRGGBB", "RRGGBBAA" ou "#RRGGBBAA"
/// Parses "#RRGGBB", "RRGGBB", "RRGGBBAA" or "#RRGGBBAA"
///
/// Only one leading `#` is stripped. Lengths are counted in characters, so
/// a non-ASCII string never panics on slicing and is reported as a bad channel.
pub fn parse_hex_color(input: &str) -> Result<Color, ColorParseError> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    let digits: Vec<char> = hex.chars().collect();

    if digits.len() != 6 && digits.len() != 8 {
        return Err(ColorParseError::InvalidLength {
            input: input.to_string(),
            len: digits.len(),
        });
    }

    let channel = |channel: Channel| -> Result<u8, ColorParseError> {
        let start = channel.index() * 2;
        let pair = &digits[start..start + 2];
        let text: String = pair.iter().collect();
        let invalid = || ColorParseError::InvalidChannel {
            input: input.to_string(),
            channel,
            digits: text.clone(),
        };

        // from_str_radix accepte un signe '+', on n'accepte que des chiffres hex
        // from_str_radix accepts a leading '+', only hex digits are allowed here
        if !pair.iter().all(char::is_ascii_hexdigit) {
            return Err(invalid());
        }
        u8::from_str_radix(&text, 16).map_err(|_| invalid())
    };

    let r = channel(Channel::Red)?;
    let g = channel(Channel::Green)?;
    let b = channel(Channel::Blue)?;
    let a = if digits.len() == 8 {
        channel(Channel::Alpha)?
    } else {
        0xFF
    };

    Ok(Color::rgba(r, g, b, a))
}

// =============================================================================
// FONCTIONS DE FORMATAGE
// FORMATTING FUNCTIONS
// =============================================================================

/// Formate une couleur en chaîne hexadécimale avec alpha
/// Formats a color as a hex string with alpha
///
/// # Returns
/// Chaîne au format "#RRGGBBAA" / String in "#RRGGBBAA" format
#[inline]
pub fn encode_color(color: Color) -> String {
    color.to_string()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_absent_is_opaque_black() {
        assert_eq!(decode_argument(None).unwrap(), Color::rgba(0, 0, 0, 255));
    }

    #[test]
    fn test_decode_six_digits() {
        // Avec ou sans '#' / With or without '#'
        assert_eq!(parse_hex_color("#FF00FF").unwrap(), Color::rgba(255, 0, 255, 255));
        assert_eq!(parse_hex_color("ff00ff").unwrap(), Color::rgba(255, 0, 255, 255));
        assert_eq!(parse_hex_color("#0a0B0c").unwrap(), Color::rgba(10, 11, 12, 255));
    }

    #[test]
    fn test_decode_eight_digits() {
        assert_eq!(parse_hex_color("00FF0080").unwrap(), Color::rgba(0, 255, 0, 128));
        assert_eq!(parse_hex_color("#12345605").unwrap(), Color::rgba(0x12, 0x34, 0x56, 5));
    }

    #[test]
    fn test_round_trip_uppercases() {
        for input in ["00ff0080", "#DEADBEEF", "#a1B2c3D4", "00000000"] {
            let expected = format!("#{}", input.trim_start_matches('#').to_uppercase());
            assert_eq!(encode_color(input.parse().unwrap()), expected);
        }
    }

    #[test]
    fn test_invalid_lengths() {
        for input in ["", "#", "1234567", "#12345", "123456789", "##FF00FF", "#FFF"] {
            match parse_hex_color(input) {
                Err(ColorParseError::InvalidLength { .. }) => {}
                other => panic!("{input:?} should fail on length, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_channel() {
        let err = parse_hex_color("#GG0000").unwrap_err();
        assert_eq!(
            err,
            ColorParseError::InvalidChannel {
                input: "#GG0000".to_string(),
                channel: Channel::Red,
                digits: "GG".to_string(),
            }
        );

        // L'alpha est vérifié aussi / Alpha is checked too
        assert!(matches!(
            parse_hex_color("00FF00zz"),
            Err(ColorParseError::InvalidChannel { channel: Channel::Alpha, .. })
        ));
    }

    #[test]
    fn test_sign_and_non_ascii_rejected() {
        assert!(parse_hex_color("+F00000").is_err());
        assert!(parse_hex_color("00 000").is_err());
        // 6 caractères dont un non-ASCII / 6 characters, one non-ASCII
        assert!(matches!(
            parse_hex_color("00é000"),
            Err(ColorParseError::InvalidChannel { channel: Channel::Green, .. })
        ));
    }

    #[test]
    fn test_encode_zero_padding() {
        assert_eq!(encode_color(Color::rgba(0, 0, 0, 5)), "#00000005");
        assert_eq!(encode_color(Color::rgb(255, 0, 128)), "#FF0080FF");
        assert_eq!(encode_color(Color::default()).len(), 9);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(PickOutcome::Selected(Color::rgb(255, 0, 255)).to_string(), "#FF00FFFF");
        assert_eq!(PickOutcome::Cancelled.to_string(), "CANCEL");
    }

    #[test]
    fn test_alpha_helpers() {
        let color = Color::rgba(1, 2, 3, 4);
        assert_eq!(color.opaque(), Color::rgb(1, 2, 3));
        assert_eq!(color.with_alpha(9).a, 9);
    }
}
