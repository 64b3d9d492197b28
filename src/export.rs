//! Text renderings of a palette for copying elsewhere

use crate::color::{hex_to_rgb, normalize_hex};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CSS_PREFIX: &str = "--color-aura";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// One `#RRGGBB` per line
    #[default]
    Hex,
    /// One `rgb(r, g, b)` per line
    Rgb,
    /// CSS custom properties, numbered from 1
    Css,
}

impl ExportFormat {
    pub fn display_name(self) -> &'static str {
        match self {
            ExportFormat::Hex => "HEX",
            ExportFormat::Rgb => "RGB",
            ExportFormat::Css => "CSS",
        }
    }
}

/// Render `colors` in the requested format, one line per color.
///
/// Entries that fail to parse are passed through unchanged in HEX and CSS
/// output and render as black in RGB output.
pub fn export_palette<S: AsRef<str>>(
    colors: &[S],
    format: ExportFormat,
    css_prefix: &str,
) -> String {
    let lines: Vec<String> = colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let color = color.as_ref();
            match format {
                ExportFormat::Hex => upper_hex(color),
                ExportFormat::Rgb => {
                    let rgb = hex_to_rgb(color);
                    format!("rgb({}, {}, {})", rgb.red, rgb.green, rgb.blue)
                }
                ExportFormat::Css => format!("{}-{}: {};", css_prefix, i + 1, upper_hex(color)),
            }
        })
        .collect();
    lines.join("\n")
}

fn upper_hex(color: &str) -> String {
    normalize_hex(color).unwrap_or_else(|_| color.to_uppercase())
}
