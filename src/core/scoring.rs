use crate::models::{
    Archetype, CompatibilityResult, Interpretation, ScoreBreakdown, ScoringWeights,
};
use rand::Rng;

/// Compute the compatibility between two archetypes (0-100)
///
/// Scoring formula:
/// score = (
///     token_score * 0.30 +         # shared token preferences
///     risk_score * 0.25 +          # close risk tolerance = higher
///     trait_score * 0.20 +         # shared personality traits
///     match_bonus * 0.15 +         # ideal-match / avoid lists
///     community_vibe * 0.10        # random draw in [0.7, 1.0]
/// ) * 100
///
/// The community-vibe term is the only non-deterministic input; it is drawn
/// once and shared between the total and the breakdown so the two stay
/// consistent.
pub fn compute_compatibility(
    a: Archetype,
    b: Archetype,
    weights: &ScoringWeights,
) -> CompatibilityResult {
    let vibe = rand::thread_rng().gen_range(0.7..=1.0);
    compute_with_vibe(a, b, weights, vibe)
}

/// Deterministic variant taking the community-vibe draw as input
///
/// Exposed so callers (and tests) can pin the one random term.
pub fn compute_with_vibe(
    a: Archetype,
    b: Archetype,
    weights: &ScoringWeights,
    vibe: f64,
) -> CompatibilityResult {
    let profile_a = a.profile();
    let profile_b = b.profile();

    let token = token_score(profile_a.token_preference, profile_b.token_preference);
    let risk = risk_score(profile_a.risk_tolerance, profile_b.risk_tolerance);
    let traits = trait_score(profile_a.traits, profile_b.traits);
    let bonus = match_bonus(a, b);

    let total = (token * weights.token_preference
        + risk * weights.risk_tolerance
        + traits * weights.personality_traits
        + bonus * weights.ideal_match
        + vibe * weights.community_vibe)
        * 100.0;

    let total_score = round1(total.clamp(0.0, 100.0));

    CompatibilityResult {
        total_score,
        breakdown: ScoreBreakdown {
            token_preferences: round1(token * 100.0),
            risk_tolerance: round1(risk * 100.0),
            personality_traits: round1(traits * 100.0),
            ideal_match_factor: round1(bonus * 100.0),
            community_vibe: round1(vibe * 100.0),
        },
        interpretation: Interpretation::from_total(total_score),
    }
}

/// Token preference sub-score (0-1)
///
/// Any shared ticker scores 0.9. The both-hold-BTC fallback at 0.8 is part of
/// the documented formula even though a shared "BTC" already satisfies the
/// intersection rule for plain ticker sets.
pub fn token_score(tokens_a: &[&str], tokens_b: &[&str]) -> f64 {
    if tokens_a.iter().any(|t| tokens_b.contains(t)) {
        return 0.9;
    }
    if tokens_a.contains(&"BTC") && tokens_b.contains(&"BTC") {
        return 0.8;
    }
    0.5
}

/// Risk tolerance sub-score (0-1), bucketed by absolute difference
///
/// A difference of exactly 10 falls into the 0.7 bucket.
pub fn risk_score(risk_a: u8, risk_b: u8) -> f64 {
    let diff = (risk_a as i16 - risk_b as i16).unsigned_abs();
    if diff < 10 {
        1.0
    } else if diff < 30 {
        0.7
    } else {
        0.4
    }
}

/// Personality trait sub-score (0-1): intersection size over the larger set
///
/// Two empty trait sets carry no information to compare, so the score is 0
/// rather than a division by zero.
pub fn trait_score(traits_a: &[&str], traits_b: &[&str]) -> f64 {
    let larger = traits_a.len().max(traits_b.len());
    if larger == 0 {
        return 0.0;
    }
    let common = traits_a.iter().filter(|t| traits_b.contains(t)).count();
    common as f64 / larger as f64
}

/// Ideal-match bonus sub-score (0-1)
///
/// The ideal-match check takes precedence over the avoid check, so
/// contradictory records resolve in the pair's favor.
pub fn match_bonus(a: Archetype, b: Archetype) -> f64 {
    let profile_a = a.profile();
    let profile_b = b.profile();

    if profile_a.ideal_match.contains(&b) || profile_b.ideal_match.contains(&a) {
        return 1.0;
    }
    if profile_a.avoid.contains(&b) || profile_b.avoid.contains(&a) {
        return 0.3;
    }
    0.6
}

/// The four deterministic sub-scores for a pair, in formula order
pub fn deterministic_subscores(a: Archetype, b: Archetype) -> [f64; 4] {
    let profile_a = a.profile();
    let profile_b = b.profile();
    [
        token_score(profile_a.token_preference, profile_b.token_preference),
        risk_score(profile_a.risk_tolerance, profile_b.risk_tolerance),
        trait_score(profile_a.traits, profile_b.traits),
        match_bonus(a, b),
    ]
}

/// Round to one decimal place
#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
