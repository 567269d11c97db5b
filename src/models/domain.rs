use crate::models::archetype::Archetype;
use serde::{Deserialize, Serialize};

/// Weights for the five compatibility sub-scores
///
/// The defaults are the canonical formula weights; they sum to 1.0 so the
/// weighted total lands in [0, 100].
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub token_preference: f64,
    pub risk_tolerance: f64,
    pub personality_traits: f64,
    pub ideal_match: f64,
    pub community_vibe: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            token_preference: 0.30,
            risk_tolerance: 0.25,
            personality_traits: 0.20,
            ideal_match: 0.15,
            community_vibe: 0.10,
        }
    }
}

/// Per-sub-score breakdown, each re-scaled to 0-100 independent of its weight
///
/// These are display values: reconstructing the total requires re-applying the
/// weights, not summing the breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    #[serde(rename = "tokenPreferences")]
    pub token_preferences: f64,
    #[serde(rename = "riskTolerance")]
    pub risk_tolerance: f64,
    #[serde(rename = "personalityTraits")]
    pub personality_traits: f64,
    #[serde(rename = "idealMatchFactor")]
    pub ideal_match_factor: f64,
    #[serde(rename = "communityVibe")]
    pub community_vibe: f64,
}

/// Interpretation bucket for a total score
///
/// Buckets are inclusive lower bounds, evaluated top-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpretation {
    ExcellentMatch,
    HighlyCompatible,
    GoodPotential,
    Moderate,
    DifferentWorlds,
}

impl Interpretation {
    pub fn from_total(total_score: f64) -> Self {
        if total_score >= 90.0 {
            Interpretation::ExcellentMatch
        } else if total_score >= 80.0 {
            Interpretation::HighlyCompatible
        } else if total_score >= 70.0 {
            Interpretation::GoodPotential
        } else if total_score >= 60.0 {
            Interpretation::Moderate
        } else {
            Interpretation::DifferentWorlds
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::ExcellentMatch => "🔥 PERFECT MATCH - You two were written for each other!",
            Interpretation::HighlyCompatible => "💕 HIGHLY COMPATIBLE - You could make a great couple!",
            Interpretation::GoodPotential => "✨ GOOD POTENTIAL - Worth getting to know each other!",
            Interpretation::Moderate => "🤝 MODERATE - Maybe start out as friends?",
            Interpretation::DifferentWorlds => "🤷 DIFFERENT WORLDS - But opposites may attract!",
        }
    }
}

impl std::fmt::Display for Interpretation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Interpretation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Result of a single compatibility computation
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityResult {
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    pub breakdown: ScoreBreakdown,
    pub interpretation: Interpretation,
}

/// A scored candidate produced by the matchmaking engine
#[derive(Debug, Clone, Serialize)]
pub struct ScoredMatch {
    pub fid: u64,
    pub username: String,
    pub archetype: Archetype,
    #[serde(rename = "displayName")]
    pub display_name: &'static str,
    pub compatibility: CompatibilityResult,
}

/// One party in a two-way match report
#[derive(Debug, Clone, Serialize)]
pub struct MatchParty {
    pub fid: u64,
    pub archetype: Archetype,
    #[serde(rename = "displayName")]
    pub display_name: &'static str,
    pub description: &'static str,
}

/// Detailed two-party match report
#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
    pub user1: MatchParty,
    pub user2: MatchParty,
    pub compatibility: CompatibilityResult,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub advice: Vec<&'static str>,
    #[serde(rename = "generatedAt")]
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Per-user personality analysis
#[derive(Debug, Clone, Serialize)]
pub struct PersonalityAnalysis {
    pub fid: u64,
    pub archetype: Archetype,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    #[serde(rename = "datingTips")]
    pub dating_tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = ScoringWeights::default();
        let sum = w.token_preference
            + w.risk_tolerance
            + w.personality_traits
            + w.ideal_match
            + w.community_vibe;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_interpretation_thresholds() {
        assert_eq!(Interpretation::from_total(90.0), Interpretation::ExcellentMatch);
        assert_eq!(Interpretation::from_total(89.9), Interpretation::HighlyCompatible);
        assert_eq!(Interpretation::from_total(80.0), Interpretation::HighlyCompatible);
        assert_eq!(Interpretation::from_total(70.0), Interpretation::GoodPotential);
        assert_eq!(Interpretation::from_total(60.0), Interpretation::Moderate);
        assert_eq!(Interpretation::from_total(59.9), Interpretation::DifferentWorlds);
        assert_eq!(Interpretation::from_total(0.0), Interpretation::DifferentWorlds);
    }

    #[test]
    fn test_interpretation_serializes_as_label() {
        let json = serde_json::to_string(&Interpretation::GoodPotential).unwrap();
        assert!(json.contains("GOOD POTENTIAL"));
    }
}
