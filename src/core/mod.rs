// Core algorithm exports
pub mod analysis;
pub mod commentary;
pub mod matcher;
pub mod scoring;

pub use analysis::{analyze, analyze_as, assign_archetype};
pub use commentary::Commentary;
pub use matcher::{MatchResult, Matchmaker};
pub use scoring::{compute_compatibility, compute_with_vibe};
