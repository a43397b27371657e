mod area;
mod common;
pub mod config;
mod engine;
pub mod ground_truth;
mod logging;
pub mod revision;
pub mod simulator;
pub mod ui;

pub use area::SearchArea;
pub use common::{SearchError, SearchEvidence, SearchOutcome};
pub use engine::{SearchEngine, SearchStatus};
pub use ground_truth::GroundTruth;
pub use logging::init_logging;

pub mod prelude;
