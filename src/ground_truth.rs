//! Stochastic placement of a position within the search-area set.

use crate::area::SearchArea;
use crate::common::SearchError;
use rand::Rng;
use rand_distr::{Distribution, Triangular};
use serde::Serialize;

/// A generated position: the area that holds it and the local coordinate
/// within that area's `[0, width) × [0, height)` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroundTruth {
    pub target_area: usize,
    pub target_local: (i32, i32),
}

impl GroundTruth {
    /// The position in the shared coordinate space, for display.
    pub fn target_global(&self, areas: &[SearchArea]) -> (i32, i32) {
        areas[self.target_area].to_global(self.target_local)
    }
}

/// Sample a position within the area set.
///
/// The area index comes from a continuous triangular draw over
/// `[0, num_areas)` with the mode at the midpoint, truncated to an integer
/// by discarding the fractional part. This biases selection toward the
/// middle of the list; callers wanting a uniform choice must not use this
/// generator. Within the chosen area, x and y are uniform and independent.
///
/// Stateless apart from the supplied RNG, so repeated calls yield
/// statistically independent positions.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    areas: &[SearchArea],
) -> Result<GroundTruth, SearchError> {
    if areas.is_empty() {
        return Err(SearchError::InvalidGeometry);
    }
    let n = areas.len() as f64;
    let triangular =
        Triangular::new(0.0, n, n / 2.0).map_err(|_| SearchError::InvalidGeometry)?;
    let target_area = (triangular.sample(rng) as usize).min(areas.len() - 1);

    let area = &areas[target_area];
    let x = rng.random_range(0..area.width());
    let y = rng.random_range(0..area.height());
    Ok(GroundTruth {
        target_area,
        target_local: (x, y),
    })
}
