//! Chainmatch - crypto personality compatibility engine
//!
//! This library assigns users one of 10 fixed crypto personality archetypes
//! and computes a weighted compatibility score between two archetypes, with a
//! per-sub-score breakdown and an interpretation bucket. It is the core behind
//! a social-client match card; HTTP, templating and persistence live in the
//! consuming layers.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use core::{assign_archetype, compute_compatibility, compute_with_vibe, Matchmaker};
pub use models::{
    Archetype, ArchetypeError, ArchetypeProfile, CompatibilityResult, Interpretation,
    MatchReport, PersonalityAnalysis, ScoreBreakdown, ScoredMatch, ScoringWeights,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let result = compute_compatibility(
            Archetype::BitcoinMaxi,
            Archetype::CryptoBoomer,
            &ScoringWeights::default(),
        );
        assert!(result.total_score <= 100.0);
    }
}
