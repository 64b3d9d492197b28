//! Palette exploration session
//!
//! Holds the palette being worked on plus its history, and implements the
//! editing actions: regenerate, lock, set or adjust a color, load a palette
//! from elsewhere, and jump back to an earlier palette.

use crate::catalog::{Catalog, CatalogError, PredefinedPalette};
use crate::color::{hex_to_hsb, hsb_to_hex, is_valid_hex, normalize_hex, Hsb};
use crate::generator::{generate_new_palette, Palette, PaletteColor};
use crate::history::PaletteHistory;
use crate::input::{validate_palette_hexes, PaletteInputError};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("no color at position {0}")]
    IndexOutOfRange(usize),
    #[error("color at position {0} is locked")]
    Locked(usize),
    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
    #[error("no history entry {0}")]
    NoHistoryEntry(usize),
    #[error(transparent)]
    Input(#[from] PaletteInputError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Partial HSB override; `None` keeps the current component.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HsbAdjust {
    pub h: Option<i32>,
    pub s: Option<i32>,
    pub b: Option<i32>,
}

impl HsbAdjust {
    pub fn apply(self, hsb: Hsb) -> Hsb {
        Hsb {
            h: self.h.unwrap_or(hsb.h),
            s: self.s.unwrap_or(hsb.s),
            b: self.b.unwrap_or(hsb.b),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.h.is_none() && self.s.is_none() && self.b.is_none()
    }
}

pub struct Session<R: Rng> {
    palette: Palette,
    history: PaletteHistory,
    rng: R,
}

impl<R: Rng> Session<R> {
    /// Start with a random palette. The initial palette is not recorded in
    /// history.
    pub fn new(mut rng: R, max_history: usize) -> Self {
        let palette = generate_new_palette(None, &mut rng);
        Self {
            palette,
            history: PaletteHistory::new(max_history),
            rng,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn history(&self) -> &PaletteHistory {
        &self.history
    }

    pub fn hexes(&self) -> Vec<String> {
        crate::generator::palette_hexes(&self.palette)
    }

    /// Record the current palette in history and replace every unlocked
    /// color.
    pub fn generate(&mut self) -> &Palette {
        self.history.push(self.palette.clone());
        self.palette = generate_new_palette(Some(self.palette.as_slice()), &mut self.rng);
        debug!(palette = ?self.hexes(), "generated palette");
        &self.palette
    }

    /// Flip the lock on `index`. Returns the new lock state.
    pub fn toggle_lock(&mut self, index: usize) -> Result<bool, SessionError> {
        let color = self
            .palette
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange(index))?;
        color.locked = !color.locked;
        Ok(color.locked)
    }

    fn unlocked_mut(&mut self, index: usize) -> Result<&mut PaletteColor, SessionError> {
        let color = self
            .palette
            .get_mut(index)
            .ok_or(SessionError::IndexOutOfRange(index))?;
        if color.locked {
            return Err(SessionError::Locked(index));
        }
        Ok(color)
    }

    /// Replace the color at `index` with `hex` (`#RRGGBB`, any case).
    pub fn set_color(&mut self, index: usize, hex: &str) -> Result<&PaletteColor, SessionError> {
        if !is_valid_hex(hex) {
            return Err(SessionError::InvalidColor(hex.to_string()));
        }
        let normalized =
            normalize_hex(hex).map_err(|_| SessionError::InvalidColor(hex.to_string()))?;

        let color = self.unlocked_mut(index)?;
        color.hex = normalized;
        Ok(color)
    }

    /// Change hue, saturation and/or brightness of the color at `index`.
    /// Returns the resulting HSB value.
    pub fn adjust(&mut self, index: usize, adjust: HsbAdjust) -> Result<Hsb, SessionError> {
        let color = self.unlocked_mut(index)?;
        let hsb = adjust.apply(hex_to_hsb(&color.hex));
        color.hex = hsb_to_hex(hsb);
        debug!(index, %hsb, hex = %color.hex, "adjusted color");
        Ok(hsb)
    }

    /// Replace the palette with five external colors (catalog, AI, shared
    /// list). All colors start unlocked with fresh ids. The new palette is
    /// recorded in history.
    pub fn load<S: AsRef<str>>(
        &mut self,
        colors: &[S],
        source: &str,
    ) -> Result<(), SessionError> {
        let hexes = validate_palette_hexes(colors)?;
        self.palette = hexes
            .into_iter()
            .map(|hex| PaletteColor::new(hex, &mut self.rng))
            .collect();
        self.history.push(self.palette.clone());
        info!(source, "loaded palette");
        Ok(())
    }

    /// Load a predefined palette by id.
    pub fn load_catalog<'c>(
        &mut self,
        catalog: &'c Catalog,
        id: &str,
    ) -> Result<&'c PredefinedPalette, SessionError> {
        let palette = catalog.get(id)?;
        self.load(&palette.colors, palette.name)?;
        Ok(palette)
    }

    /// Make history entry `index` the current palette without re-recording
    /// it.
    pub fn restore(&mut self, index: usize) -> Result<(), SessionError> {
        let entry = self
            .history
            .get(index)
            .ok_or(SessionError::NoHistoryEntry(index))?;
        self.palette = entry.clone();
        info!(index, "restored palette from history");
        Ok(())
    }

    pub fn remove_history(&mut self, index: usize) -> Result<(), SessionError> {
        self.history
            .remove(index)
            .map(|_| ())
            .ok_or(SessionError::NoHistoryEntry(index))
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::PALETTE_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const OCEAN: [&str; 5] = ["#E0F7FA", "#B2EBF2", "#80DEEA", "#4DD0E1", "#26C6DA"];

    fn session() -> Session<StdRng> {
        Session::new(StdRng::seed_from_u64(17), 10)
    }

    #[test]
    fn test_new_session_has_palette_and_empty_history() {
        let s = session();
        assert_eq!(s.palette().len(), PALETTE_SIZE);
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_generate_records_previous_palette() {
        let mut s = session();
        let before = s.palette().clone();
        s.generate();
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().latest(), Some(&before));
    }

    #[test]
    fn test_generate_keeps_locked_slot() {
        let mut s = session();
        assert!(s.toggle_lock(3).unwrap());
        let kept = s.palette()[3].clone();
        for _ in 0..5 {
            s.generate();
            assert_eq!(s.palette()[3], kept);
        }
    }

    #[test]
    fn test_toggle_lock_twice_unlocks() {
        let mut s = session();
        assert!(s.toggle_lock(0).unwrap());
        assert!(!s.toggle_lock(0).unwrap());
        assert_eq!(s.toggle_lock(5), Err(SessionError::IndexOutOfRange(5)));
    }

    #[test]
    fn test_set_color_normalizes() {
        let mut s = session();
        let color = s.set_color(1, "#abcdef").unwrap();
        assert_eq!(color.hex, "#ABCDEF");
        assert_eq!(
            s.set_color(1, "abcdef"),
            Err(SessionError::InvalidColor("abcdef".to_string()))
        );
    }

    #[test]
    fn test_locked_color_cannot_be_edited() {
        let mut s = session();
        s.toggle_lock(2).unwrap();
        assert_eq!(s.set_color(2, "#000000"), Err(SessionError::Locked(2)));
        assert_eq!(
            s.adjust(2, HsbAdjust { h: Some(10), ..HsbAdjust::default() }),
            Err(SessionError::Locked(2))
        );
    }

    #[test]
    fn test_adjust_brightness_only() {
        let mut s = session();
        s.set_color(0, "#FF0000").unwrap();
        let hsb = s
            .adjust(0, HsbAdjust { b: Some(50), ..HsbAdjust::default() })
            .unwrap();
        assert_eq!(hsb, Hsb::new(0, 100, 50));
        assert_eq!(s.palette()[0].hex, "#800000");
    }

    #[test]
    fn test_adjust_hue_wraps() {
        let mut s = session();
        s.set_color(0, "#FF0000").unwrap();
        s.adjust(0, HsbAdjust { h: Some(480), ..HsbAdjust::default() })
            .unwrap();
        assert_eq!(s.palette()[0].hex, "#00FF00");
    }

    #[test]
    fn test_load_records_history_and_unlocks() {
        let mut s = session();
        s.toggle_lock(0).unwrap();
        s.load(&OCEAN, "test").unwrap();
        assert_eq!(s.hexes(), OCEAN);
        assert!(s.palette().iter().all(|c| !c.locked));
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.history().latest(), Some(s.palette()));
    }

    #[test]
    fn test_load_rejects_bad_input() {
        let mut s = session();
        let before = s.palette().clone();
        assert!(matches!(
            s.load(&["#000000"], "test"),
            Err(SessionError::Input(PaletteInputError::WrongColorCount(1)))
        ));
        assert_eq!(s.palette(), &before);
    }

    #[test]
    fn test_load_catalog() {
        let catalog = Catalog::builtin();
        let mut s = session();
        let loaded = s.load_catalog(&catalog, "ocean-breeze").unwrap();
        assert_eq!(loaded.name, "Ocean Breeze");
        assert_eq!(s.hexes(), OCEAN);
        assert!(matches!(
            s.load_catalog(&catalog, "missing"),
            Err(SessionError::Catalog(_))
        ));
    }

    #[test]
    fn test_restore_does_not_rerecord() {
        let mut s = session();
        let first = s.palette().clone();
        s.generate();
        s.generate();
        assert_eq!(s.history().len(), 2);
        s.restore(1).unwrap();
        assert_eq!(s.palette(), &first);
        assert_eq!(s.history().len(), 2);
        assert_eq!(s.restore(9), Err(SessionError::NoHistoryEntry(9)));
    }

    #[test]
    fn test_remove_and_clear_history() {
        let mut s = session();
        s.generate();
        s.generate();
        s.remove_history(0).unwrap();
        assert_eq!(s.history().len(), 1);
        assert_eq!(s.remove_history(3), Err(SessionError::NoHistoryEntry(3)));
        s.clear_history();
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let mut a = session();
        let mut b = session();
        a.generate();
        b.generate();
        assert_eq!(a.hexes(), b.hexes());
    }
}
