//! Commonly used types and utilities for ease of import.

pub use crate::{
    GroundTruth, SearchArea, SearchEngine, SearchError, SearchEvidence, SearchOutcome,
    SearchStatus,
};
