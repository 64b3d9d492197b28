//! Validation of palettes that arrive as text: AI responses, command-line
//! arguments and shared color lists.

use crate::color::{is_valid_hex, normalize_hex};
use crate::generator::PALETTE_SIZE;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteInputError {
    #[error("palette must contain exactly 5 colors, got {0}")]
    WrongColorCount(usize),
    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
}

/// Require exactly five `#RRGGBB` strings and return them in canonical
/// uppercase form.
pub fn validate_palette_hexes<S: AsRef<str>>(
    colors: &[S],
) -> Result<[String; PALETTE_SIZE], PaletteInputError> {
    if colors.len() != PALETTE_SIZE {
        return Err(PaletteInputError::WrongColorCount(colors.len()));
    }

    let mut out: [String; PALETTE_SIZE] = Default::default();
    for (slot, color) in out.iter_mut().zip(colors) {
        let color = color.as_ref();
        if !is_valid_hex(color) {
            return Err(PaletteInputError::InvalidColor(color.to_string()));
        }
        *slot = normalize_hex(color)
            .map_err(|_| PaletteInputError::InvalidColor(color.to_string()))?;
    }
    Ok(out)
}

/// Split a comma-separated list of colors. A missing `#` is added, so
/// `ff0000,00ff00,...` and `#FF0000, #00FF00, ...` are both accepted.
pub fn split_color_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|c| {
            if c.starts_with('#') {
                c.to_string()
            } else {
                format!("#{}", c)
            }
        })
        .collect()
}

/// Parse a comma-separated list of exactly five colors.
pub fn parse_color_list(list: &str) -> Result<[String; PALETTE_SIZE], PaletteInputError> {
    validate_palette_hexes(&split_color_list(list))
}
