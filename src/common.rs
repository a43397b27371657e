//! Common types for the search exercise: errors and round outcomes.

use serde::Serialize;

/// Outcome of one simulated search of one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SearchOutcome {
    /// The target was inside the examined coordinate set.
    Found,
    /// The examined set did not contain the target.
    NotFound,
}

/// Result of one simulated search: the outcome plus the set of local
/// coordinates actually examined this round. Not retained between rounds
/// unless the caller keeps it for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchEvidence {
    pub outcome: SearchOutcome,
    pub examined: Vec<(i32, i32)>,
}

impl SearchEvidence {
    /// `true` when the target was detected this round.
    pub fn is_found(&self) -> bool {
        self.outcome == SearchOutcome::Found
    }
}

/// Errors returned by search operations. All are caller contract
/// violations detected at the offending call; none are retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Area corners do not satisfy `ul.x < lr.x && ul.y < lr.y`, or the
    /// area list itself is unusable (empty).
    InvalidGeometry,
    /// Effort fraction or effectiveness value outside `[0, 1]`.
    InvalidEffort,
    /// Specified area index is out of range for the area list.
    AreaIndexOutOfRange,
    /// Probability mass collapsed: revision denominator is (near) zero,
    /// or initial probabilities do not form a distribution.
    DegenerateProbability,
    /// `run_round` called on an engine already in the `Found` state.
    SearchAlreadyConcluded,
}

impl core::fmt::Display for SearchError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SearchError::InvalidGeometry => {
                write!(f, "Search area corners are not in upper-left/lower-right order")
            }
            SearchError::InvalidEffort => {
                write!(f, "Effort fraction must lie in [0, 1]")
            }
            SearchError::AreaIndexOutOfRange => {
                write!(f, "Area index is out of range")
            }
            SearchError::DegenerateProbability => {
                write!(f, "Probability mass degenerated to zero during revision")
            }
            SearchError::SearchAlreadyConcluded => {
                write!(f, "Search already concluded; the target was found")
            }
        }
    }
}

impl std::error::Error for SearchError {}
