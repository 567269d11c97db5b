// Integration tests for Chainmatch

use chainmatch::config::{MatchingSettings, Settings, WeightsConfig};
use chainmatch::core::commentary;
use chainmatch::core::{assign_archetype, Matchmaker};
use chainmatch::models::{Archetype, ScoringWeights};

#[test]
fn test_end_to_end_matchmaking() {
    let matchmaker = Matchmaker::with_default_weights();

    let candidates: Vec<u64> = (4000..4010).collect();
    let result = matchmaker.find_matches_among(1234, &candidates, 3);

    assert_eq!(result.total_candidates, 10);
    assert!(result.matches.len() <= 3);
    assert!(!result.matches.is_empty());

    // Scores bounded and sorted descending
    for m in &result.matches {
        assert!((0.0..=100.0).contains(&m.compatibility.total_score));
        assert_eq!(m.archetype, assign_archetype(m.fid));
        assert_eq!(m.username, format!("@user{}", m.fid));
    }
    for pair in result.matches.windows(2) {
        assert!(pair[0].compatibility.total_score >= pair[1].compatibility.total_score);
    }
}

#[test]
fn test_end_to_end_match_report() {
    let matchmaker = Matchmaker::with_default_weights();
    let report = matchmaker.match_report(111, 222);

    assert_eq!(report.user1.archetype, assign_archetype(111));
    assert_eq!(report.user2.archetype, assign_archetype(222));
    assert!(!report.advice.is_empty());

    // The report serializes cleanly for the presentation layer
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["compatibility"]["totalScore"].is_number());
    assert!(json["compatibility"]["breakdown"]["tokenPreferences"].is_number());
    assert!(json["compatibility"]["interpretation"].is_string());
    assert!(json["generatedAt"].is_string());
}

#[test]
fn test_commentary_for_scored_pair() {
    let matchmaker = Matchmaker::with_default_weights();
    let report = matchmaker.match_report(314, 159);

    let commentary = matchmaker.commentary(314, 159, report.compatibility.total_score);
    assert!(!commentary.headline.is_empty());
    assert!(commentary
        .viral_snippet
        .contains(&format!("{}%", report.compatibility.total_score)));
}

#[test]
fn test_commentary_standalone_generation() {
    let commentary = commentary::generate(Archetype::DefiDegen, Archetype::MemeLord, 91.2);
    assert!(commentary.headline.contains("FIRE MATCH"));
    assert!(!commentary.bullet_jokes.is_empty());
    assert!(commentary.date_ideas.len() <= 3);
}

#[test]
fn test_settings_drive_matchmaker() {
    // Defaults, as a Settings::load() without files or env would produce
    let matching = MatchingSettings::default();
    let weights: ScoringWeights = WeightsConfig::default().into();

    let matchmaker = Matchmaker::new(weights, matching.candidate_pool, matching.evaluation_window);
    let result = matchmaker.find_matches(42, matching.default_limit);

    assert!(result.matches.len() <= matching.default_limit);
    assert!(result.total_candidates <= matching.candidate_pool);
}

#[test]
fn test_settings_load_from_file() {
    let dir = std::env::temp_dir().join("chainmatch_settings_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.toml");
    std::fs::write(
        &path,
        "[matching]\ncandidate_pool = 8\n\n[scoring.weights]\ntoken_preference = 0.5\n",
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.matching.candidate_pool, 8);
    assert_eq!(settings.scoring.weights.token_preference, 0.5);
    // Unspecified fields keep their defaults
    assert_eq!(settings.matching.evaluation_window, 10);
    assert_eq!(settings.scoring.weights.risk_tolerance, 0.25);
}

#[test]
fn test_assignment_distribution_not_degenerate() {
    // Over a reasonable id range every archetype should come up
    let mut counts = std::collections::HashMap::new();
    for fid in 0..2000u64 {
        *counts.entry(assign_archetype(fid)).or_insert(0usize) += 1;
    }
    assert_eq!(counts.len(), 10);
    for (archetype, count) in counts {
        assert!(count > 50, "{} drawn only {} times", archetype, count);
    }
}
