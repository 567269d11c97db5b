// Model exports
pub mod archetype;
pub mod domain;

pub use archetype::{Archetype, ArchetypeError, ArchetypeProfile};
pub use domain::{
    CompatibilityResult, Interpretation, MatchParty, MatchReport, PersonalityAnalysis,
    ScoreBreakdown, ScoredMatch, ScoringWeights,
};
