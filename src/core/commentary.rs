use crate::models::Archetype;
use rand::seq::SliceRandom;
use serde::Serialize;

/// Template-generated commentary for a match result
///
/// These are the static-template strings a presentation layer falls back to
/// when no generated text is available; they are produced locally and never
/// require an external call.
#[derive(Debug, Clone, Serialize)]
pub struct Commentary {
    pub headline: &'static str,
    #[serde(rename = "mainCommentary")]
    pub main_commentary: String,
    #[serde(rename = "bulletJokes")]
    pub bullet_jokes: Vec<String>,
    #[serde(rename = "dateIdeas")]
    pub date_ideas: Vec<String>,
    #[serde(rename = "viralSnippet")]
    pub viral_snippet: String,
}

/// Generate the full commentary block for a scored pair
pub fn generate(a: Archetype, b: Archetype, total_score: f64) -> Commentary {
    let name_a = a.profile().display_name;
    let name_b = b.profile().display_name;
    let main_commentary = fallback_commentary(name_a, name_b, total_score);

    Commentary {
        headline: headline(total_score),
        viral_snippet: viral_snippet(name_a, name_b, total_score, &main_commentary),
        main_commentary,
        bullet_jokes: bullet_jokes(a, b),
        date_ideas: date_ideas(a, b),
    }
}

/// Score-banded headline
pub fn headline(score: f64) -> &'static str {
    if score >= 90.0 {
        "🔥 FIRE MATCH! Crypto Soulmates!"
    } else if score >= 80.0 {
        "💕 Great Match! Bull Market Love!"
    } else if score >= 70.0 {
        "✨ Good Potential! DYOR, but promising!"
    } else if score >= 60.0 {
        "🤝 Middle of the Road! No paper hands, keep holding!"
    } else {
        "🤷 Different Vibes! But diversification matters!"
    }
}

/// Canned one-line commentary, randomly picked from the template pool
pub fn fallback_commentary(name_a: &str, name_b: &str, score: f64) -> String {
    let templates = [
        format!(
            "{} and {} - {}% compatible! You could be crypto's most wholesome couple! 💕",
            name_a, name_b, score
        ),
        format!(
            "You both love crypto, and you're {}% in love with each other! WAGMI together! 🚀",
            score
        ),
        format!(
            "{}% compatibility... These numbers don't lie! I'm bullish on you two! 📈",
            score
        ),
    ];
    templates
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_else(|| templates[0].clone())
}

/// One-liner jokes keyed off the pair's tokens, risk levels and traits
pub fn bullet_jokes(a: Archetype, b: Archetype) -> Vec<String> {
    let profile_a = a.profile();
    let profile_b = b.profile();
    let mut jokes = Vec::with_capacity(3);

    // Token joke: compare the headline tokens of each side
    let tokens_a: Vec<&str> = profile_a.token_preference.iter().take(2).copied().collect();
    let tokens_b: Vec<&str> = profile_b.token_preference.iter().take(2).copied().collect();
    if let Some(common) = tokens_a.iter().find(|t| tokens_b.contains(t)) {
        jokes.push(format!(
            "You both hold {} - mint an NFT as the wedding ring! 💍",
            common
        ));
    } else {
        jokes.push(format!(
            "{} vs {} - portfolio diversification! 📊",
            tokens_a[0], tokens_b[0]
        ));
    }

    // Risk joke, banded by the pair's average tolerance
    let avg_risk = (profile_a.risk_tolerance as f64 + profile_b.risk_tolerance as f64) / 2.0;
    if avg_risk > 80.0 {
        jokes.push(format!(
            "Risk tolerance: {}% - you're both full degen! Get rekt together! 🎰",
            avg_risk as u32
        ));
    } else if avg_risk < 40.0 {
        jokes.push(format!(
            "Risk tolerance: {}% - safe harbor! HODL love! 🏦",
            avg_risk as u32
        ));
    } else {
        jokes.push(format!(
            "Risk tolerance: {}% - a relationship like a balanced portfolio! ⚖️",
            avg_risk as u32
        ));
    }

    // Trait joke, only when something is actually shared
    if let Some(common) = profile_a.traits.iter().find(|t| profile_b.traits.contains(t)) {
        jokes.push(format!(
            "You're both {} - this chemistry is on-chain! ⛓️",
            common.replace('_', " ")
        ));
    }

    jokes
}

/// Archetype-keyed date ideas, padded with general ones, capped at three
pub fn date_ideas(a: Archetype, b: Archetype) -> Vec<String> {
    let mut ideas = Vec::new();
    let pair = [a, b];

    if pair.contains(&Archetype::DefiDegen) {
        ideas.push("First date: yield farming together! APY hunting is romantic! 🌾".to_string());
    }
    if pair.contains(&Archetype::NftConnoisseur) {
        ideas.push("An NFT gallery walk - as fancy as Art Basel! 🎨".to_string());
    }
    if pair.contains(&Archetype::BitcoinMaxi) {
        ideas.push("A romantic Bitcoin whitepaper reading night! 📄".to_string());
    }
    if pair.contains(&Archetype::MemeLord) {
        ideas.push("Meet at a Dogecoin meetup - maybe Elon posts about it! 🐕".to_string());
    }

    let general = [
        "Swap tokens on Uniswap while ETH gas is low - the most romantic date! ⛽",
        "Meet at a DAO call - governance proposal: 'Date me' 🗳️",
        "Coffee after a crypto conference panel - networking, but romantic! ☕",
        "Mint an NFT together - a shared-custody relationship! 🖼️",
    ];
    let mut rng = rand::thread_rng();
    ideas.extend(
        general
            .choose_multiple(&mut rng, 2)
            .map(|s| s.to_string()),
    );

    ideas.truncate(3);
    ideas
}

/// Shareable snippet for the social card
fn viral_snippet(name_a: &str, name_b: &str, score: f64, commentary: &str) -> String {
    format!(
        "🚀 CRYPTO COMPATIBILITY RESULTS! 🚀\n\n{} 💫 {}\n\nCompatibility: {}%\n\n{}\n\nTry it yourself! 👇",
        name_a, name_b, score, commentary
    )
}
