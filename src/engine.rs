//! Round-based search engine coupling ground truth, simulation and
//! probability revision.

use crate::area::SearchArea;
use crate::common::{SearchError, SearchEvidence};
use crate::ground_truth::{self, GroundTruth};
use crate::revision;
use crate::simulator;
use log::{debug, info};
use rand::rngs::SmallRng;

/// Externally visible engine state. `Initialized` holds until the first
/// round; `Found` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Initialized,
    AwaitingNextRound,
    Found,
}

/// Core search logic holding the area list, both generated positions and
/// the round state machine.
///
/// Single-threaded by design: the engine owns its RNG, so concurrent
/// Monte Carlo batches each construct their own independently seeded
/// engine (see [`SearchEngine::new`]).
#[derive(Debug)]
pub struct SearchEngine {
    areas: Vec<SearchArea>,
    last_known: GroundTruth,
    actual: GroundTruth,
    status: SearchStatus,
    rounds: usize,
    rng: SmallRng,
}

/// Initial probabilities must sum to 1 within this tolerance.
const PRIOR_SUM_TOLERANCE: f64 = 1e-9;

impl SearchEngine {
    /// Create an engine from `(upper_left, lower_right, probability)`
    /// triples, validating geometry and that the priors form a
    /// distribution.
    ///
    /// `last_known` and `actual` are drawn by the same generation
    /// procedure but are independent: the last-known anchor is display
    /// context only and carries no information about the actual position.
    pub fn new(
        area_specs: &[((i32, i32), (i32, i32), f64)],
        mut rng: SmallRng,
    ) -> Result<Self, SearchError> {
        let areas = area_specs
            .iter()
            .map(|&(ul, lr, p)| SearchArea::new(ul, lr, p))
            .collect::<Result<Vec<_>, _>>()?;
        let total: f64 = areas.iter().map(|a| a.probability).sum();
        if (total - 1.0).abs() > PRIOR_SUM_TOLERANCE {
            return Err(SearchError::DegenerateProbability);
        }

        let last_known = ground_truth::generate(&mut rng, &areas)?;
        let actual = ground_truth::generate(&mut rng, &areas)?;
        debug!(
            "engine initialized: {} areas, actual target in area {}",
            areas.len(),
            actual.target_area
        );
        Ok(SearchEngine {
            areas,
            last_known,
            actual,
            status: SearchStatus::Initialized,
            rounds: 0,
            rng,
        })
    }

    /// Search one area at the given effort fraction; all other areas are
    /// treated as unsearched (effectiveness 0) for this round's revision.
    pub fn run_round(
        &mut self,
        area_index: usize,
        effort_fraction: f64,
    ) -> Result<SearchEvidence, SearchError> {
        if area_index >= self.areas.len() {
            return Err(SearchError::AreaIndexOutOfRange);
        }
        let mut effectiveness = vec![0.0; self.areas.len()];
        effectiveness[area_index] = effort_fraction;
        self.run_round_with(area_index, effort_fraction, &effectiveness)
    }

    /// Search one area while the caller supplies the full per-area
    /// effectiveness vector used for revision. Entries for unsearched
    /// areas must be zero to leave them proportionally unaffected.
    pub fn run_round_with(
        &mut self,
        area_index: usize,
        effort_fraction: f64,
        effectiveness_by_area: &[f64],
    ) -> Result<SearchEvidence, SearchError> {
        if self.status == SearchStatus::Found {
            return Err(SearchError::SearchAlreadyConcluded);
        }
        if area_index >= self.areas.len() {
            return Err(SearchError::AreaIndexOutOfRange);
        }
        if effectiveness_by_area.len() != self.areas.len()
            || effectiveness_by_area.iter().any(|e| !(0.0..=1.0).contains(e))
        {
            return Err(SearchError::InvalidEffort);
        }

        let evidence = simulator::conduct_search(
            &mut self.rng,
            &self.areas[area_index],
            area_index,
            effort_fraction,
            &self.actual,
        )?;
        self.rounds += 1;

        for (area, &e) in self.areas.iter_mut().zip(effectiveness_by_area) {
            area.effectiveness = e;
        }
        if evidence.is_found() {
            // Found evidence ends the search; the not-found likelihoods
            // no longer apply, so probabilities are left as-is.
            self.status = SearchStatus::Found;
            info!(
                "round {}: target found in area {} ({} cells examined)",
                self.rounds,
                area_index,
                evidence.examined.len()
            );
        } else {
            revision::revise(&mut self.areas)?;
            self.status = SearchStatus::AwaitingNextRound;
            debug!(
                "round {}: area {} searched at effort {:.2}, not found",
                self.rounds, area_index, effort_fraction
            );
        }
        Ok(evidence)
    }

    /// Current state of the round state machine.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Number of rounds run so far.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Area list with current probabilities and effectiveness values.
    pub fn areas(&self) -> &[SearchArea] {
        &self.areas
    }

    /// The operator's starting anchor, for annotation only.
    pub fn last_known(&self) -> &GroundTruth {
        &self.last_known
    }

    /// The true target position used to judge search outcomes.
    pub fn actual(&self) -> &GroundTruth {
        &self.actual
    }

    /// Global coordinate of the last-known anchor.
    pub fn last_known_global(&self) -> (i32, i32) {
        self.last_known.target_global(&self.areas)
    }

    /// Global coordinate of the actual target position.
    pub fn actual_global(&self) -> (i32, i32) {
        self.actual.target_global(&self.areas)
    }
}
