pub mod engine;
pub mod missing;

pub use engine::{find_matches, MatchResult, MatchingEngine, ScoreBreakdown};
pub use missing::{compute_missing, MatchName, NormalizedSet};
