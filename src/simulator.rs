//! Search simulation: fractional-coverage sampling of an area's grid.

use crate::area::SearchArea;
use crate::common::{SearchError, SearchEvidence, SearchOutcome};
use crate::ground_truth::GroundTruth;
use rand::seq::SliceRandom;
use rand::Rng;

/// Simulate one search of `area` at the given effort fraction.
///
/// Every local coordinate in the area's grid is enumerated, the set is
/// shuffled uniformly, and the first `floor(cells * effort_fraction)`
/// coordinates form the examined set. The target counts as found only when
/// `area_index` matches the actual target area and the target's local
/// coordinate is in the examined set.
///
/// The examined fraction is a literal proxy for search-effectiveness
/// probability: at effort 1.0 the whole grid is covered and detection is
/// certain, at 0.0 nothing is examined.
pub fn conduct_search<R: Rng + ?Sized>(
    rng: &mut R,
    area: &SearchArea,
    area_index: usize,
    effort_fraction: f64,
    actual: &GroundTruth,
) -> Result<SearchEvidence, SearchError> {
    if !(0.0..=1.0).contains(&effort_fraction) {
        return Err(SearchError::InvalidEffort);
    }

    let mut coords: Vec<(i32, i32)> = Vec::with_capacity(area.cell_count());
    for x in 0..area.width() {
        for y in 0..area.height() {
            coords.push((x, y));
        }
    }
    coords.shuffle(rng);
    let examined_len = (coords.len() as f64 * effort_fraction) as usize;
    coords.truncate(examined_len);

    let outcome = if area_index == actual.target_area
        && coords.contains(&actual.target_local)
    {
        SearchOutcome::Found
    } else {
        SearchOutcome::NotFound
    };
    Ok(SearchEvidence {
        outcome,
        examined: coords,
    })
}
