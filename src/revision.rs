//! Bayesian probability revision across the area set.

use crate::area::SearchArea;
use crate::common::SearchError;

/// Denominators at or below this are treated as collapsed probability
/// mass rather than divided through.
const MIN_DENOMINATOR: f64 = 1e-12;

/// Apply Bayes' rule in place to every area after a round of not-found
/// evidence:
///
/// ```text
/// denominator = Σ p_i * (1 - e_i)
/// p_i ← p_i * (1 - e_i) / denominator
/// ```
///
/// `(1 - e_i)` is the likelihood of "not found in area i" given the target
/// is there. Areas not searched this round must carry `effectiveness = 0`
/// so their relative weight is unchanged; the caller is responsible for
/// assigning the full effectiveness vector before revising.
///
/// Preserves Σ p_i = 1. A near-zero denominator (all probabilities zero, or
/// every area searched with effectiveness 1) is `DegenerateProbability`.
pub fn revise(areas: &mut [SearchArea]) -> Result<(), SearchError> {
    let denominator: f64 = areas
        .iter()
        .map(|a| a.probability * (1.0 - a.effectiveness))
        .sum();
    if denominator <= MIN_DENOMINATOR {
        return Err(SearchError::DegenerateProbability);
    }
    for area in areas.iter_mut() {
        area.probability = area.probability * (1.0 - area.effectiveness) / denominator;
    }
    Ok(())
}
