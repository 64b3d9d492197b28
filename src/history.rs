//! Recently viewed palettes, newest first

use crate::generator::{Palette, PaletteColor};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteHistory {
    entries: Vec<Palette>,
    max_entries: usize,
}

impl Default for PaletteHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES)
    }
}

/// Same hex and lock state at every position. Ids are ignored.
fn same_colors(a: &[PaletteColor], b: &[PaletteColor]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| x.hex == y.hex && x.locked == y.locked)
}

impl PaletteHistory {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Vec::new(),
            max_entries,
        }
    }

    /// Record a palette as the newest entry.
    ///
    /// Empty palettes and palettes equal to the current newest entry are
    /// ignored. Returns whether the palette was added.
    pub fn push(&mut self, palette: Palette) -> bool {
        if palette.is_empty() {
            return false;
        }
        if let Some(latest) = self.entries.first() {
            if same_colors(latest, &palette) {
                return false;
            }
        }

        self.entries.insert(0, palette);
        self.entries.truncate(self.max_entries);
        true
    }

    pub fn latest(&self) -> Option<&Palette> {
        self.entries.first()
    }

    /// Entry `index` counting from the newest (0).
    pub fn get(&self, index: usize) -> Option<&Palette> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Palette> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Remove entry `index` counting from the newest.
    pub fn remove(&mut self, index: usize) -> Option<Palette> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
