use crate::core::analysis::assign_archetype;
use crate::core::commentary::{self, Commentary};
use crate::core::scoring::compute_compatibility;
use crate::models::{Archetype, MatchParty, MatchReport, ScoredMatch, ScoringWeights};
use rand::Rng;

/// Result of a matchmaking run
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    pub total_candidates: usize,
}

/// Matchmaking orchestrator
///
/// # Pipeline
/// 1. Resolve the user's archetype (sticky, id-derived)
/// 2. Draw a candidate pool and evaluate a bounded window of it
/// 3. Score each candidate pair and rank by total score
#[derive(Debug, Clone)]
pub struct Matchmaker {
    weights: ScoringWeights,
    candidate_pool: usize,
    evaluation_window: usize,
}

/// Candidate ids are drawn from this range, standing in for a real
/// social-graph lookup.
const CANDIDATE_FID_RANGE: std::ops::RangeInclusive<u64> = 1000..=9999;

impl Matchmaker {
    pub fn new(weights: ScoringWeights, candidate_pool: usize, evaluation_window: usize) -> Self {
        Self {
            weights,
            candidate_pool,
            evaluation_window,
        }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            candidate_pool: 20,
            evaluation_window: 10,
        }
    }

    /// Find the most compatible candidates for a user
    ///
    /// Candidates come from a random id pool; scoring and ranking are the
    /// same as for explicitly supplied candidates.
    pub fn find_matches(&self, fid: u64, limit: usize) -> MatchResult {
        let mut rng = rand::thread_rng();
        let candidates: Vec<u64> = (0..self.candidate_pool)
            .map(|_| rng.gen_range(CANDIDATE_FID_RANGE))
            .filter(|&candidate| candidate != fid)
            .collect();

        tracing::debug!(
            "Drew {} candidates for fid {} (window {})",
            candidates.len(),
            fid,
            self.evaluation_window
        );

        self.find_matches_among(fid, &candidates, limit)
    }

    /// Score and rank an explicit candidate list
    pub fn find_matches_among(&self, fid: u64, candidates: &[u64], limit: usize) -> MatchResult {
        let user_archetype = assign_archetype(fid);
        let total_candidates = candidates.len();

        let mut scored: Vec<ScoredMatch> = candidates
            .iter()
            .take(self.evaluation_window)
            .map(|&candidate_fid| {
                let candidate_archetype = assign_archetype(candidate_fid);
                let compatibility =
                    compute_compatibility(user_archetype, candidate_archetype, &self.weights);

                ScoredMatch {
                    fid: candidate_fid,
                    username: format!("@user{}", candidate_fid),
                    archetype: candidate_archetype,
                    display_name: candidate_archetype.profile().display_name,
                    compatibility,
                }
            })
            .collect();

        // Sort by score (descending), ties broken by id for stable output
        scored.sort_by(|a, b| {
            b.compatibility
                .total_score
                .partial_cmp(&a.compatibility.total_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.fid.cmp(&b.fid))
        });

        scored.truncate(limit);

        tracing::info!(
            "Ranked {} matches for fid {} (from {} candidates)",
            scored.len(),
            fid,
            total_candidates
        );

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }

    /// Build the detailed two-party match report
    pub fn match_report(&self, fid_a: u64, fid_b: u64) -> MatchReport {
        let archetype_a = assign_archetype(fid_a);
        let archetype_b = assign_archetype(fid_b);
        let compatibility = compute_compatibility(archetype_a, archetype_b, &self.weights);

        tracing::debug!(
            "Match report for {} ({}) x {} ({}): {}",
            fid_a,
            archetype_a,
            fid_b,
            archetype_b,
            compatibility.total_score
        );

        MatchReport {
            user1: MatchParty {
                fid: fid_a,
                archetype: archetype_a,
                display_name: archetype_a.profile().display_name,
                description: archetype_a.profile().description,
            },
            user2: MatchParty {
                fid: fid_b,
                archetype: archetype_b,
                display_name: archetype_b.profile().display_name,
                description: archetype_b.profile().description,
            },
            strengths: relationship_strengths(archetype_a, archetype_b),
            challenges: relationship_challenges(archetype_a, archetype_b),
            advice: relationship_advice(compatibility.total_score),
            compatibility,
            generated_at: chrono::Utc::now(),
        }
    }

    /// Commentary block for a scored pair, for the presentation layer
    pub fn commentary(&self, fid_a: u64, fid_b: u64, total_score: f64) -> Commentary {
        commentary::generate(assign_archetype(fid_a), assign_archetype(fid_b), total_score)
    }
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// What the pair has going for it
fn relationship_strengths(a: Archetype, b: Archetype) -> Vec<String> {
    let profile_a = a.profile();
    let profile_b = b.profile();
    let mut strengths = Vec::new();

    let common_tokens: Vec<&str> = profile_a
        .token_preference
        .iter()
        .filter(|t| profile_b.token_preference.contains(t))
        .copied()
        .collect();
    if !common_tokens.is_empty() {
        strengths.push(format!("Shared token love: {}", common_tokens.join(", ")));
    }

    let risk_diff = (profile_a.risk_tolerance as i16 - profile_b.risk_tolerance as i16).abs();
    if risk_diff < 20 {
        strengths.push("Compatible risk tolerance - financial decisions come easy!".to_string());
    }

    let common_traits = profile_a
        .traits
        .iter()
        .filter(|t| profile_b.traits.contains(t))
        .count();
    if common_traits > 0 {
        strengths.push(format!("Traits in common: {}!", common_traits));
    }

    strengths
}

/// Where the pair will clash
fn relationship_challenges(a: Archetype, b: Archetype) -> Vec<String> {
    let profile_a = a.profile();
    let profile_b = b.profile();
    let mut challenges = Vec::new();

    let risk_diff = (profile_a.risk_tolerance as i16 - profile_b.risk_tolerance as i16).abs();
    if risk_diff > 50 {
        challenges.push(
            "Very different risk levels - expect ape vs hodl debates!".to_string(),
        );
    }

    if profile_a.avoid.contains(&b) || profile_b.avoid.contains(&a) {
        challenges.push(
            "Different crypto philosophies - but that's exactly what makes this interesting!"
                .to_string(),
        );
    }

    let any_common_token = profile_a
        .token_preference
        .iter()
        .any(|t| profile_b.token_preference.contains(t));
    if !any_common_token {
        challenges.push("No tokens in common - great diversification though!".to_string());
    }

    challenges
}

/// Score-banded advice
fn relationship_advice(total_score: f64) -> Vec<&'static str> {
    if total_score >= 80.0 {
        vec![
            "Amazing fit! Start a crypto project together! 🚀",
            "Get a custom ENS domain for the two of you: couple.eth 💕",
        ]
    } else if total_score >= 60.0 {
        vec![
            "Good potential! Review your portfolios together 📊",
            "Your differences complement each other - learn from one another! 📚",
        ]
    } else {
        vec![
            "Start as friends, learn DeFi together! 🤝",
            "Opposites attract - maybe this is exactly what you need! 💫",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_sorted_and_limited() {
        let matchmaker = Matchmaker::with_default_weights();
        let candidates: Vec<u64> = (2000..2015).collect();

        let result = matchmaker.find_matches_among(1234, &candidates, 3);

        assert_eq!(result.total_candidates, 15);
        // Evaluation window is 10, limit is 3
        assert_eq!(result.matches.len(), 3);
        for pair in result.matches.windows(2) {
            assert!(pair[0].compatibility.total_score >= pair[1].compatibility.total_score);
        }
    }

    #[test]
    fn test_evaluation_window_respected() {
        let matchmaker = Matchmaker::new(ScoringWeights::default(), 20, 5);
        let candidates: Vec<u64> = (3000..3020).collect();

        let result = matchmaker.find_matches_among(1, &candidates, 50);

        assert_eq!(result.matches.len(), 5);
    }

    #[test]
    fn test_find_matches_excludes_self() {
        let matchmaker = Matchmaker::with_default_weights();
        let result = matchmaker.find_matches(5555, 10);
        assert!(result.matches.iter().all(|m| m.fid != 5555));
    }

    #[test]
    fn test_match_report_populated() {
        let matchmaker = Matchmaker::with_default_weights();
        let report = matchmaker.match_report(111, 222);

        assert_eq!(report.user1.fid, 111);
        assert_eq!(report.user2.fid, 222);
        assert!((0.0..=100.0).contains(&report.compatibility.total_score));
        assert_eq!(report.advice.len(), 2);
    }

    #[test]
    fn test_challenges_flag_avoid_pairs() {
        // bitcoin_maxi and shitcoin_surfer avoid each other
        let challenges =
            relationship_challenges(Archetype::BitcoinMaxi, Archetype::ShitcoinSurfer);
        assert!(challenges.iter().any(|c| c.contains("philosophies")));
        // Risk gap 99 - 30 = 69 > 50
        assert!(challenges.iter().any(|c| c.contains("risk levels")));
        // No shared tokens either
        assert!(challenges.iter().any(|c| c.contains("diversification")));
    }

    #[test]
    fn test_strengths_flag_shared_tokens() {
        let strengths = relationship_strengths(Archetype::BitcoinMaxi, Archetype::CryptoBoomer);
        assert!(strengths.iter().any(|s| s.contains("BTC")));
        assert!(strengths.iter().any(|s| s.contains("risk tolerance")));
    }

    #[test]
    fn test_advice_bands() {
        assert!(relationship_advice(85.0)[0].contains("Amazing fit"));
        assert!(relationship_advice(65.0)[0].contains("Good potential"));
        assert!(relationship_advice(40.0)[0].contains("friends"));
    }
}
