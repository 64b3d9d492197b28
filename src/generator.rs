//! Random colors and lock-aware palette generation
//!
//! Every function takes its randomness source as an argument so callers can
//! pass `rand::thread_rng()` in production and a seeded `StdRng` in tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

const HEX_ALPHABET: &[u8; 16] = b"0123456789ABCDEF";
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 7;

/// One slot of a palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    /// Canonical `#RRGGBB`
    pub hex: String,
    /// Locked colors survive regeneration
    pub locked: bool,
    /// Stable list identity, unrelated to the color value
    pub id: String,
}

impl PaletteColor {
    /// Unlocked color with a freshly minted id.
    pub fn new<R: Rng + ?Sized>(hex: impl Into<String>, rng: &mut R) -> Self {
        Self {
            hex: hex.into(),
            locked: false,
            id: new_id(rng),
        }
    }

    /// Fresh random unlocked color.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hex = generate_random_hex_color(rng);
        Self::new(hex, rng)
    }
}

pub type Palette = Vec<PaletteColor>;

/// Build `#RRGGBB` from six independent uniform draws over `0-9A-F`.
pub fn generate_random_hex_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut hex = String::with_capacity(7);
    hex.push('#');
    for _ in 0..6 {
        hex.push(char::from(HEX_ALPHABET[rng.gen_range(0..HEX_ALPHABET.len())]));
    }
    hex
}

/// Opaque 7-character base-36 id.
pub fn new_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..ID_LEN)
        .map(|_| char::from(ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())]))
        .collect()
}

/// Produce a new 5-color palette.
///
/// Position `i` keeps `existing[i]` untouched (hex, lock state and id) when
/// that color is locked; every other position gets a fresh unlocked color.
/// Positions past the end of `existing` count as unlocked.
pub fn generate_new_palette<R: Rng + ?Sized>(
    existing: Option<&[PaletteColor]>,
    rng: &mut R,
) -> Palette {
    (0..PALETTE_SIZE)
        .map(|i| match existing.and_then(|p| p.get(i)) {
            Some(color) if color.locked => color.clone(),
            _ => PaletteColor::random(rng),
        })
        .collect()
}

/// Hex values of a palette in slot order.
pub fn palette_hexes(palette: &[PaletteColor]) -> Vec<String> {
    palette.iter().map(|c| c.hex.clone()).collect()
}
