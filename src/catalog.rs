//! Built-in catalog of named palettes
//!
//! Used as browsing material and as the candidate set for "similar palettes"
//! lookups.

use crate::similarity::rank_by_similarity;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

const RAW_PALETTES: &[(&str, [&str; 5])] = &[
    ("Ocean Breeze", ["#E0F7FA", "#B2EBF2", "#80DEEA", "#4DD0E1", "#26C6DA"]),
    ("Sunset Vibes", ["#FFCC80", "#FFA726", "#FB8C00", "#F57C00", "#EF6C00"]),
    ("Forest Canopy", ["#C8E6C9", "#A5D6A7", "#81C784", "#66BB6A", "#4CAF50"]),
    ("Royal Purple", ["#EDE7F6", "#D1C4E9", "#B39DDB", "#9575CD", "#7E57C2"]),
    ("Cherry Blossom", ["#FCE4EC", "#F8BBD0", "#F48FB1", "#F06292", "#EC407A"]),
    ("Desert Mirage", ["#FFF3E0", "#FFE0B2", "#FFCC80", "#FFB74D", "#FFA726"]),
    ("Minty Fresh", ["#E0F2F1", "#B2DFDB", "#80CBC4", "#4DB6AC", "#26A69A"]),
    ("Coral Reef", ["#FFEBEE", "#FFCDD2", "#EF9A9A", "#E57373", "#EF5350"]),
    ("Lavender Fields", ["#F3E5F5", "#E1BEE7", "#CE93D8", "#BA68C8", "#AB47BC"]),
    ("Citrus Burst", ["#FFFDE7", "#FFF9C4", "#FFF59D", "#FFF176", "#FFEE58"]),
    ("Vintage Rose", ["#FBE9E7", "#FFCCBC", "#FFAB91", "#FF8A65", "#FF7043"]),
    ("Arctic Blue", ["#E1F5FE", "#B3E5FC", "#81D4FA", "#4FC3F7", "#29B6F6"]),
    ("Earthy Tones", ["#EFEBE9", "#D7CCC8", "#BCAAA4", "#A1887F", "#8D6E63"]),
    ("Golden Hour", ["#FFF8E1", "#FFECB3", "#FFE082", "#FFD54F", "#FFCA28"]),
    ("Emerald Isle", ["#E8F5E9", "#C8E6C9", "#A5D6A7", "#81C784", "#66BB6A"]),
    ("Plum Delight", ["#F3E5F5", "#E1BEE7", "#CE93D8", "#BA68C8", "#AA00FF"]),
    ("Sandy Shore", ["#FAF0E6", "#F5DEB3", "#E0C8AC", "#CDAF95", "#B89B7E"]),
    ("Teal Appeal", ["#E0F2F1", "#B2DFDB", "#80CBC4", "#4DB6AC", "#00897B"]),
    ("Rose Gold", ["#FADBD8", "#F5B7B1", "#F1948A", "#EC7063", "#E74C3C"]),
    ("Deep Indigo", ["#E8EAF6", "#C5CAE9", "#9FA8DA", "#7986CB", "#5C6BC0"]),
    ("Pastel Dream", ["#FFCDD2", "#F8BBD0", "#E1BEE7", "#D1C4E9", "#C5CAE9"]),
    ("Monochrome Gray", ["#F5F5F5", "#EEEEEE", "#E0E0E0", "#BDBDBD", "#9E9E9E"]),
    ("Autumn Leaves", ["#FFEB3B", "#FFC107", "#FF9800", "#F57C00", "#E65100"]),
    ("Sky Blue", ["#BBDEFB", "#90CAF9", "#64B5F6", "#42A5F5", "#2196F3"]),
    ("Strawberry Shortcake", ["#FFEBEE", "#FFCDD2", "#EF9A9A", "#E57373", "#D32F2F"]),
    ("Tropical Paradise", ["#00ACC1", "#00BCD4", "#4DD0E1", "#80DEEA", "#B2EBF2"]),
    ("Muted Rainbow", ["#EF9A9A", "#FFCC80", "#FFF59D", "#A5D6A7", "#90CAF9"]),
    ("Electric Neon", ["#F44336", "#E91E63", "#9C27B0", "#673AB7", "#3F51B5"]),
    ("Coffee House", ["#D7CCC8", "#BCAAA4", "#A1887F", "#8D6E63", "#795548"]),
    ("Spring Meadow", ["#DCEDC8", "#C5E1A5", "#AED581", "#9CCC65", "#8BC34A"]),
    ("Ruby Red", ["#FFEBEE", "#FFCDD2", "#E57373", "#D32F2F", "#B71C1C"]),
    ("Sapphire Blue", ["#E3F2FD", "#BBDEFB", "#64B5F6", "#2196F3", "#1565C0"]),
    ("Amethyst Purple", ["#F3E5F5", "#E1BEE7", "#BA68C8", "#9C27B0", "#7B1FA2"]),
    ("Peridot Green", ["#F1F8E9", "#DCEDC8", "#AED581", "#8BC34A", "#689F38"]),
    ("Topaz Yellow", ["#FFFDE7", "#FFF9C4", "#FFF176", "#FFEE58", "#FDD835"]),
    ("Garnet Glow", ["#FFD180", "#FFAB40", "#FF9100", "#FF6D00", "#DD2C00"]),
    ("Aquamarine Splash", ["#E0F7FA", "#B2EBF2", "#80DEEA", "#4DD0E1", "#26C6DA"]),
    ("Opal Shimmer", ["#FCE4EC", "#F8BBD0", "#F48FB1", "#F06292", "#E91E63"]),
    ("Turquoise Treasure", ["#E0F2F1", "#B2DFDB", "#80CBC4", "#4DB6AC", "#26A69A"]),
    ("Citrine Sunshine", ["#FFF9C4", "#FFF59D", "#FFF176", "#FFEE58", "#FFD600"]),
    ("Berry Bliss", ["#FCE4EC", "#F48FB1", "#EC407A", "#D81B60", "#C2185B"]),
    ("Evergreen", ["#E8F5E9", "#A5D6A7", "#66BB6A", "#388E3C", "#1B5E20"]),
    ("Twilight Purple", ["#EDE7F6", "#B39DDB", "#7E57C2", "#5E35B1", "#4527A0"]),
    ("Sunny Orange", ["#FFF3E0", "#FFCC80", "#FFA726", "#FB8C00", "#F57C00"]),
    ("Ocean Deep", ["#E1F5FE", "#81D4FA", "#29B6F6", "#039BE5", "#0277BD"]),
    ("Candy Floss", ["#FCE4EC", "#F8BBD0", "#F06292", "#E91E63", "#D81B60"]),
    ("Lime Zest", ["#F9FBE7", "#F0F4C3", "#E6EE9C", "#DCE775", "#D4E157"]),
    ("Chocolate Brownie", ["#EFEBE9", "#BCAAA4", "#8D6E63", "#6D4C41", "#4E342E"]),
    ("Silver Lining", ["#FAFAFA", "#F5F5F5", "#EEEEEE", "#E0E0E0", "#D6D6D6"]),
    ("Midnight Blue", ["#E8EAF6", "#9FA8DA", "#5C6BC0", "#3949AB", "#283593"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("no predefined palette with id '{0}'")]
    NotFound(String),
}

/// A named palette from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredefinedPalette {
    /// URL-safe slug derived from the name
    pub id: String,
    pub name: &'static str,
    pub colors: [&'static str; 5],
}

/// A catalog palette paired with its similarity score (lower is closer).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarPalette<'a> {
    pub palette: &'a PredefinedPalette,
    pub score: f64,
}

/// Random picks for a landing view: a few featured palettes plus a
/// disjoint random selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Showcase<'a> {
    pub featured: Vec<&'a PredefinedPalette>,
    pub random: Vec<&'a PredefinedPalette>,
}

/// Lowercase, whitespace runs to `-`, drop everything that is not a word
/// character or `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }
    slug
}

#[derive(Debug, Clone)]
pub struct Catalog {
    palettes: Vec<PredefinedPalette>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The built-in palette collection.
    pub fn builtin() -> Self {
        Self::from_entries(RAW_PALETTES)
    }

    fn from_entries(entries: &[(&'static str, [&'static str; 5])]) -> Self {
        let palettes = entries
            .iter()
            .enumerate()
            .map(|(index, (name, colors))| {
                let slug = slugify(name);
                PredefinedPalette {
                    id: if slug.is_empty() {
                        format!("palette-{}", index)
                    } else {
                        slug
                    },
                    name: *name,
                    colors: *colors,
                }
            })
            .collect();
        Self { palettes }
    }

    pub fn all(&self) -> &[PredefinedPalette] {
        &self.palettes
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&PredefinedPalette> {
        self.palettes.iter().find(|p| p.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&PredefinedPalette, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Palettes closest to `id`, excluding the palette itself.
    pub fn similar_to(
        &self,
        id: &str,
        limit: usize,
    ) -> Result<Vec<SimilarPalette<'_>>, CatalogError> {
        let reference = self.get(id)?;
        Ok(self.closest_to(&reference.colors, Some(id), limit))
    }

    /// Palettes closest to an arbitrary list of colors.
    pub fn closest_to<S: AsRef<str>>(
        &self,
        colors: &[S],
        exclude: Option<&str>,
        limit: usize,
    ) -> Vec<SimilarPalette<'_>> {
        let candidates = self
            .palettes
            .iter()
            .filter(|p| Some(p.id.as_str()) != exclude)
            .map(|p| (p.id.as_str(), &p.colors[..]));

        rank_by_similarity(colors, candidates, limit)
            .into_iter()
            .filter_map(|ranked| {
                self.find(ranked.id).map(|palette| SimilarPalette {
                    palette,
                    score: ranked.score,
                })
            })
            .collect()
    }

    /// Shuffle the catalog and split off `featured` palettes followed by
    /// `random` more.
    pub fn showcase<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        featured: usize,
        random: usize,
    ) -> Showcase<'_> {
        let mut shuffled: Vec<&PredefinedPalette> = self.palettes.iter().collect();
        shuffled.shuffle(rng);

        let featured_len = featured.min(shuffled.len());
        let rest = shuffled.split_off(featured_len);
        Showcase {
            featured: shuffled,
            random: rest.into_iter().take(random).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::is_valid_hex;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Ocean Breeze"), "ocean-breeze");
        assert_eq!(slugify("Strawberry  Shortcake"), "strawberry-shortcake");
        assert_eq!(slugify("Rock & Roll!"), "rock--roll");
        assert_eq!(slugify("snake_case-ok"), "snake_case-ok");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_builtin_catalog_is_well_formed() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 50);

        let ids: HashSet<&str> = catalog.all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len(), "ids must be unique");

        for palette in catalog.all() {
            for hex in palette.colors {
                assert!(is_valid_hex(hex), "{} has invalid color {}", palette.id, hex);
                assert_eq!(hex, hex.to_uppercase());
            }
        }
    }

    #[test]
    fn test_empty_slug_falls_back_to_index() {
        let catalog = Catalog::from_entries(&[(
            "???",
            ["#000000", "#111111", "#222222", "#333333", "#444444"],
        )]);
        assert_eq!(catalog.all()[0].id, "palette-0");
    }

    #[test]
    fn test_find_and_get() {
        let catalog = Catalog::builtin();
        let palette = catalog.find("ocean-breeze").expect("ocean-breeze exists");
        assert_eq!(palette.name, "Ocean Breeze");
        assert_eq!(palette.colors[0], "#E0F7FA");
        assert_eq!(
            catalog.get("does-not-exist"),
            Err(CatalogError::NotFound("does-not-exist".to_string()))
        );
    }

    #[test]
    fn test_similar_to_excludes_self_and_ranks_duplicates_first() {
        let catalog = Catalog::builtin();
        // Aquamarine Splash has exactly the same colors as Ocean Breeze
        let similar = catalog.similar_to("ocean-breeze", 4).unwrap();
        assert_eq!(similar.len(), 4);
        assert!(similar.iter().all(|s| s.palette.id != "ocean-breeze"));
        assert_eq!(similar[0].palette.id, "aquamarine-splash");
        assert_eq!(similar[0].score, 0.0);
        assert!(similar.windows(2).all(|w| w[0].score <= w[1].score));
    }

    #[test]
    fn test_similar_to_unknown_id() {
        let catalog = Catalog::builtin();
        assert!(catalog.similar_to("nope", 4).is_err());
    }

    #[test]
    fn test_closest_to_arbitrary_colors() {
        let catalog = Catalog::builtin();
        let closest = catalog.closest_to(&["#F5F5F5", "#EEEEEE", "#E0E0E0"], None, 1);
        assert_eq!(closest.len(), 1);
        assert_eq!(closest[0].score, 0.0);
    }

    #[test]
    fn test_showcase_is_disjoint_and_sized() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(99);
        let showcase = catalog.showcase(&mut rng, 4, 8);
        assert_eq!(showcase.featured.len(), 4);
        assert_eq!(showcase.random.len(), 8);

        let featured: HashSet<&str> = showcase.featured.iter().map(|p| p.id.as_str()).collect();
        assert!(showcase
            .random
            .iter()
            .all(|p| !featured.contains(p.id.as_str())));
    }

    #[test]
    fn test_showcase_larger_than_catalog() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let showcase = catalog.showcase(&mut rng, 40, 40);
        assert_eq!(showcase.featured.len(), 40);
        assert_eq!(showcase.random.len(), 10);
    }
}
