//! Rectangular search areas with belief probability and per-round
//! search effectiveness.

use crate::common::SearchError;

/// A rectangular sub-region of the overall search space.
///
/// Geometry is immutable after construction; `probability` and
/// `effectiveness` are mutated once per round, `probability` only by the
/// Bayes revision step and `effectiveness` only by the per-round
/// assignment in the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchArea {
    upper_left: (i32, i32),
    lower_right: (i32, i32),
    /// Current belief that the target is in this area, in `[0, 1]`.
    pub probability: f64,
    /// Search effectiveness probability (SEP) assigned for the current
    /// round; zero for areas not searched this round.
    pub effectiveness: f64,
}

impl SearchArea {
    /// Create a search area from corner points and an initial probability.
    /// Corners must satisfy `ul.x < lr.x && ul.y < lr.y`.
    pub fn new(
        upper_left: (i32, i32),
        lower_right: (i32, i32),
        probability: f64,
    ) -> Result<Self, SearchError> {
        if upper_left.0 >= lower_right.0 || upper_left.1 >= lower_right.1 {
            return Err(SearchError::InvalidGeometry);
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(SearchError::DegenerateProbability);
        }
        Ok(SearchArea {
            upper_left,
            lower_right,
            probability,
            effectiveness: 0.0,
        })
    }

    /// Upper-left corner in the shared coordinate space.
    pub fn upper_left(&self) -> (i32, i32) {
        self.upper_left
    }

    /// Lower-right corner in the shared coordinate space.
    pub fn lower_right(&self) -> (i32, i32) {
        self.lower_right
    }

    /// Width of the local coordinate space `[0, width)`.
    pub fn width(&self) -> i32 {
        self.lower_right.0 - self.upper_left.0
    }

    /// Height of the local coordinate space `[0, height)`.
    pub fn height(&self) -> i32 {
        self.lower_right.1 - self.upper_left.1
    }

    /// Number of grid cells in the area.
    pub fn cell_count(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    /// Offset a local coordinate by the area's upper-left corner into the
    /// shared coordinate space.
    pub fn to_global(&self, local: (i32, i32)) -> (i32, i32) {
        (self.upper_left.0 + local.0, self.upper_left.1 + local.1)
    }
}
