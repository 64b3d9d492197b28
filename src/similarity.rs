//! Palette similarity scoring
//!
//! The score is a one-sided Chamfer distance in raw RGB space: for every color
//! of the first palette take the distance to its nearest color in the second,
//! then average. Lower is more similar. `score(a, b)` and `score(b, a)` can
//! differ.

use crate::color::{calculate_color_distance, hex_to_rgb, Rgb};
use std::cmp::Ordering;

/// Mean nearest-color distance from `a` to `b`.
///
/// Returns `f64::INFINITY` if either side is empty. Malformed hex entries
/// count as black.
pub fn calculate_palette_similarity<A, B>(a: &[A], b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }

    let rgb_b: Vec<Rgb> = b.iter().map(|hex| hex_to_rgb(hex.as_ref())).collect();

    let total: f64 = a
        .iter()
        .map(|hex| {
            let color = hex_to_rgb(hex.as_ref());
            rgb_b
                .iter()
                .map(|&other| calculate_color_distance(color, other))
                .fold(f64::INFINITY, f64::min)
        })
        .sum();

    total / a.len() as f64
}

/// A candidate together with its similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<'a> {
    pub id: &'a str,
    pub score: f64,
}

/// Most similar first; equal scores fall back to id order.
pub(crate) fn compare_ranked(a: &Ranked<'_>, b: &Ranked<'_>) -> Ordering {
    match a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.id.cmp(b.id),
        order => order,
    }
}

/// Score every `(id, colors)` candidate against `reference` and return the
/// `limit` most similar.
pub fn rank_by_similarity<'a, S, C>(
    reference: &[S],
    candidates: impl IntoIterator<Item = (&'a str, &'a [C])>,
    limit: usize,
) -> Vec<Ranked<'a>>
where
    S: AsRef<str>,
    C: AsRef<str> + 'a,
{
    let mut ranked: Vec<Ranked<'a>> = candidates
        .into_iter()
        .map(|(id, colors)| Ranked {
            id,
            score: calculate_palette_similarity(reference, colors),
        })
        .collect();

    ranked.sort_by(compare_ranked);
    ranked.truncate(limit);
    ranked
}
