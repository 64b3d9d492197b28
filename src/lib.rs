//! Color palette exploration
//!
//! Hex/RGB/HSB conversion, lock-aware random palette generation and a
//! nearest-color similarity score for ranking palettes against each other.

pub mod ai;
pub mod catalog;
pub mod color;
pub mod config;
pub mod export;
pub mod generator;
pub mod history;
pub mod input;
pub mod session;
pub mod similarity;

pub use color::{
    calculate_color_distance, hex_to_hsb, hex_to_rgb, hsb_to_hex, parse_hex, ColorError, Hsb, Rgb,
};
pub use generator::{
    generate_new_palette, generate_random_hex_color, Palette, PaletteColor, PALETTE_SIZE,
};
pub use similarity::calculate_palette_similarity;
