//! Boundary types for AI palette generation
//!
//! The model call itself lives elsewhere. This module validates what goes in
//! (the generation request) and what comes back (five hex colors).

use crate::color::is_valid_hex;
use crate::generator::PALETTE_SIZE;
use crate::input::{validate_palette_hexes, PaletteInputError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

const MIN_KEYWORDS_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Palette inspired by an uploaded image
    Image,
    /// Palette harmonizing with a seed color
    Color,
    /// Palette inspired by descriptive keywords
    Keywords,
    /// Any pleasant palette
    #[default]
    General,
}

impl GenerationMode {
    pub fn display_name(self) -> &'static str {
        match self {
            GenerationMode::Image => "Image",
            GenerationMode::Color => "Color",
            GenerationMode::Keywords => "Keywords",
            GenerationMode::General => "General",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("image mode requires an image")]
    MissingImage,
    #[error("image must be a base64 data URI (data:<mimetype>;base64,<data>)")]
    InvalidImageUri,
    #[error("color mode requires a base color")]
    MissingBaseColor,
    #[error("base color '{0}' must be a 6-digit hex color, e.g. #RRGGBB")]
    InvalidBaseColor(String),
    #[error("keywords must be at least 3 characters long")]
    KeywordsTooShort,
}

/// Input for one AI generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub generation_mode: GenerationMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color_hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl GenerationRequest {
    pub fn general() -> Self {
        Self::default()
    }

    pub fn image(data_uri: impl Into<String>) -> Self {
        Self {
            generation_mode: GenerationMode::Image,
            image_data_uri: Some(data_uri.into()),
            ..Self::default()
        }
    }

    pub fn color(base_color_hex: impl Into<String>) -> Self {
        Self {
            generation_mode: GenerationMode::Color,
            base_color_hex: Some(base_color_hex.into()),
            ..Self::default()
        }
    }

    pub fn keywords(keywords: impl Into<String>) -> Self {
        Self {
            generation_mode: GenerationMode::Keywords,
            keywords: Some(keywords.into()),
            ..Self::default()
        }
    }

    /// Check that the payload required by the mode is present and well formed.
    pub fn validate(&self) -> Result<(), RequestError> {
        match self.generation_mode {
            GenerationMode::Image => {
                let uri = self
                    .image_data_uri
                    .as_deref()
                    .ok_or(RequestError::MissingImage)?;
                if !is_data_uri(uri) {
                    return Err(RequestError::InvalidImageUri);
                }
            }
            GenerationMode::Color => {
                let hex = self
                    .base_color_hex
                    .as_deref()
                    .ok_or(RequestError::MissingBaseColor)?;
                if !is_valid_hex(hex) {
                    return Err(RequestError::InvalidBaseColor(hex.to_string()));
                }
            }
            GenerationMode::Keywords => {
                let keywords = self.keywords.as_deref().unwrap_or("").trim();
                if keywords.chars().count() < MIN_KEYWORDS_LEN {
                    return Err(RequestError::KeywordsTooShort);
                }
            }
            GenerationMode::General => {}
        }
        Ok(())
    }
}

/// `data:<mimetype>;base64,<data>` with a non-empty payload.
fn is_data_uri(uri: &str) -> bool {
    let Some(rest) = uri.strip_prefix("data:") else {
        return false;
    };
    match rest.split_once(";base64,") {
        Some((mime, data)) => mime.contains('/') && !data.is_empty(),
        None => false,
    }
}

/// Validate the colors returned by the model: exactly five `#RRGGBB`
/// strings, returned uppercase.
pub fn validate_ai_output<S: AsRef<str>>(
    colors: &[S],
) -> Result<[String; PALETTE_SIZE], PaletteInputError> {
    validate_palette_hexes(colors).map_err(|e| {
        warn!(%e, "AI returned an unusable palette");
        e
    })
}
