use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when resolving archetype identifiers
#[derive(Debug, Error)]
pub enum ArchetypeError {
    #[error("unknown archetype: {0}")]
    UnknownArchetype(String),
}

/// The 10 fixed crypto personality archetypes
///
/// Each variant is backed by an immutable static profile record. Keeping the
/// identifier set closed as an enum means ideal-match and avoid references
/// can never dangle, and match arms over archetypes are exhaustiveness-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    BitcoinMaxi,
    DefiDegen,
    NftConnoisseur,
    ShitcoinSurfer,
    CryptoBoomer,
    EthEnthusiast,
    MemeLord,
    DaoArchitect,
    WhaleWatcher,
    PrivacyMaximalist,
}

impl Archetype {
    /// All archetypes, in stable order
    pub const ALL: [Archetype; 10] = [
        Archetype::BitcoinMaxi,
        Archetype::DefiDegen,
        Archetype::NftConnoisseur,
        Archetype::ShitcoinSurfer,
        Archetype::CryptoBoomer,
        Archetype::EthEnthusiast,
        Archetype::MemeLord,
        Archetype::DaoArchitect,
        Archetype::WhaleWatcher,
        Archetype::PrivacyMaximalist,
    ];

    /// Stable string identifier, as used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Archetype::BitcoinMaxi => "bitcoin_maxi",
            Archetype::DefiDegen => "defi_degen",
            Archetype::NftConnoisseur => "nft_connoisseur",
            Archetype::ShitcoinSurfer => "shitcoin_surfer",
            Archetype::CryptoBoomer => "crypto_boomer",
            Archetype::EthEnthusiast => "eth_enthusiast",
            Archetype::MemeLord => "meme_lord",
            Archetype::DaoArchitect => "dao_architect",
            Archetype::WhaleWatcher => "whale_watcher",
            Archetype::PrivacyMaximalist => "privacy_maximalist",
        }
    }

    /// The static profile record backing this archetype
    pub fn profile(&self) -> &'static ArchetypeProfile {
        match self {
            Archetype::BitcoinMaxi => &BITCOIN_MAXI,
            Archetype::DefiDegen => &DEFI_DEGEN,
            Archetype::NftConnoisseur => &NFT_CONNOISSEUR,
            Archetype::ShitcoinSurfer => &SHITCOIN_SURFER,
            Archetype::CryptoBoomer => &CRYPTO_BOOMER,
            Archetype::EthEnthusiast => &ETH_ENTHUSIAST,
            Archetype::MemeLord => &MEME_LORD,
            Archetype::DaoArchitect => &DAO_ARCHITECT,
            Archetype::WhaleWatcher => &WHALE_WATCHER,
            Archetype::PrivacyMaximalist => &PRIVACY_MAXIMALIST,
        }
    }
}

impl fmt::Display for Archetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Archetype {
    type Err = ArchetypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bitcoin_maxi" => Ok(Archetype::BitcoinMaxi),
            "defi_degen" => Ok(Archetype::DefiDegen),
            "nft_connoisseur" => Ok(Archetype::NftConnoisseur),
            "shitcoin_surfer" => Ok(Archetype::ShitcoinSurfer),
            "crypto_boomer" => Ok(Archetype::CryptoBoomer),
            "eth_enthusiast" => Ok(Archetype::EthEnthusiast),
            "meme_lord" => Ok(Archetype::MemeLord),
            "dao_architect" => Ok(Archetype::DaoArchitect),
            "whale_watcher" => Ok(Archetype::WhaleWatcher),
            "privacy_maximalist" => Ok(Archetype::PrivacyMaximalist),
            other => Err(ArchetypeError::UnknownArchetype(other.to_string())),
        }
    }
}

/// Immutable archetype profile record
///
/// `traits` and `token_preference` feed the scorer; `ideal_match` and `avoid`
/// feed the bonus term. The flavor fields (`fun_fact`, `dating_style`) are
/// display-only and never affect scoring.
#[derive(Debug, Clone, Serialize)]
pub struct ArchetypeProfile {
    #[serde(rename = "displayName")]
    pub display_name: &'static str,
    pub description: &'static str,
    pub traits: &'static [&'static str],
    #[serde(rename = "tokenPreference")]
    pub token_preference: &'static [&'static str],
    #[serde(rename = "riskTolerance")]
    pub risk_tolerance: u8,
    #[serde(rename = "funFact")]
    pub fun_fact: &'static str,
    #[serde(rename = "datingStyle")]
    pub dating_style: &'static str,
    #[serde(rename = "idealMatch")]
    pub ideal_match: &'static [Archetype],
    pub avoid: &'static [Archetype],
}

static BITCOIN_MAXI: ArchetypeProfile = ArchetypeProfile {
    display_name: "Bitcoin Purist 🟠",
    description: "BTC only, everything else is a shitcoin! Trust issues, but builds the most solid relationships.",
    traits: &["loyal", "conservative", "skeptical", "long_term"],
    token_preference: &["BTC"],
    risk_tolerance: 30,
    fun_fact: "Explains the Lightning Network on the first date",
    dating_style: "Slow but certain - 'Not your keys, not your heart'",
    ideal_match: &[Archetype::EthEnthusiast, Archetype::CryptoBoomer],
    avoid: &[Archetype::ShitcoinSurfer, Archetype::DefiDegen],
};

static DEFI_DEGEN: ArchetypeProfile = ArchetypeProfile {
    display_name: "DeFi Degenerate 🦄",
    description: "Yield farming addict! Heart rate spikes at the sight of a 10,000% APY.",
    traits: &["risky", "adventurous", "FOMO", "24_7_trader"],
    token_preference: &["UNI", "AAVE", "CRV", "random_tokens"],
    risk_tolerance: 95,
    fun_fact: "Keeps the gas budget higher than the date budget",
    dating_style: "Fast and risky - the 'farm and dump' strategy",
    ideal_match: &[Archetype::ShitcoinSurfer, Archetype::MemeLord],
    avoid: &[Archetype::BitcoinMaxi, Archetype::CryptoBoomer],
};

static NFT_CONNOISSEUR: ArchetypeProfile = ArchetypeProfile {
    display_name: "NFT Art Lover 🎨",
    description: "Every NFT tells a story. Never checks the floor price, only the vibes.",
    traits: &["artistic", "cultured", "trend_setter", "community_focused"],
    token_preference: &["ETH", "APE", "LOOKS"],
    risk_tolerance: 60,
    fun_fact: "Their profile picture is worth more than their actual photo",
    dating_style: "Aesthetic and meaningful - the 'mint your love' philosophy",
    ideal_match: &[Archetype::EthEnthusiast, Archetype::DaoArchitect],
    avoid: &[Archetype::BitcoinMaxi, Archetype::ShitcoinSurfer],
};

static SHITCOIN_SURFER: ArchetypeProfile = ArchetypeProfile {
    display_name: "Shitcoin Hunter 🏄",
    description: "Every new token is a potential 100x! Portfolio looks like a roulette table.",
    traits: &["gambler", "optimistic", "impulsive", "moonboy"],
    token_preference: &["new_listings", "meme_coins", "random_gems"],
    risk_tolerance: 99,
    fun_fact: "Asks 'wen moon' in Telegram groups",
    dating_style: "Quick in, quick out - 'pump and dump love'",
    ideal_match: &[Archetype::DefiDegen, Archetype::MemeLord],
    avoid: &[Archetype::CryptoBoomer, Archetype::BitcoinMaxi],
};

static CRYPTO_BOOMER: ArchetypeProfile = ArchetypeProfile {
    display_name: "Crypto Boomer 👔",
    description: "Top 10 coins only! Hates risk, loves diversification.",
    traits: &["conservative", "careful", "rational", "long_term"],
    token_preference: &["BTC", "ETH", "top_10_only"],
    risk_tolerance: 20,
    fun_fact: "Refuses to use any exchange other than Coinbase",
    dating_style: "Traditional and safe - 'HODL my heart'",
    ideal_match: &[Archetype::BitcoinMaxi, Archetype::EthEnthusiast],
    avoid: &[Archetype::DefiDegen, Archetype::ShitcoinSurfer],
};

static ETH_ENTHUSIAST: ArchetypeProfile = ArchetypeProfile {
    display_name: "Ethereum Enthusiast ⟠",
    description: "Smart contract love! Everything can be solved on Ethereum.",
    traits: &["tech_savvy", "innovative", "ecosystem_believer", "builder"],
    token_preference: &["ETH", "layer2s", "ETH_ecosystem"],
    risk_tolerance: 50,
    fun_fact: "Keeps a separate budget line for gas fees",
    dating_style: "Smart and sustainable - 'merge our hearts'",
    ideal_match: &[Archetype::NftConnoisseur, Archetype::DaoArchitect],
    avoid: &[Archetype::BitcoinMaxi],
};

static MEME_LORD: ArchetypeProfile = ArchetypeProfile {
    display_name: "Meme Coin King 🐕",
    description: "Was going to be a Dogecoin millionaire but never sold in time. Everything is a meme!",
    traits: &["funny", "community_driven", "viral_hunter", "ironic"],
    token_preference: &["DOGE", "SHIB", "PEPE", "latest_meme"],
    risk_tolerance: 85,
    fun_fact: "Has notifications turned on for Elon's tweets",
    dating_style: "Fun and viral - 'to the moon together'",
    ideal_match: &[Archetype::ShitcoinSurfer, Archetype::DefiDegen],
    avoid: &[Archetype::CryptoBoomer, Archetype::PrivacyMaximalist],
};

static DAO_ARCHITECT: ArchetypeProfile = ArchetypeProfile {
    display_name: "DAO Architect 🏛️",
    description: "Decentralization is everything! Runs the relationship as a DAO too.",
    traits: &["democratic", "organized", "visionary", "community_first"],
    token_preference: &["governance_tokens", "UNI", "COMP"],
    risk_tolerance: 55,
    fun_fact: "Submits the first date as a governance proposal",
    dating_style: "Democratic and transparent - 'vote for love'",
    ideal_match: &[Archetype::EthEnthusiast, Archetype::NftConnoisseur],
    avoid: &[Archetype::BitcoinMaxi, Archetype::MemeLord],
};

static WHALE_WATCHER: ArchetypeProfile = ArchetypeProfile {
    display_name: "Whale Watcher 🐋",
    description: "Tracks whale movements and positions around the big players.",
    traits: &["analytical", "strategic", "patient", "data_driven"],
    token_preference: &["top_caps", "whale_holdings"],
    risk_tolerance: 40,
    fun_fact: "Opens Etherscan more often than Instagram",
    dating_style: "Strategic and calculated - 'follow the big money'",
    ideal_match: &[Archetype::CryptoBoomer, Archetype::EthEnthusiast],
    avoid: &[Archetype::ShitcoinSurfer, Archetype::MemeLord],
};

static PRIVACY_MAXIMALIST: ArchetypeProfile = ArchetypeProfile {
    display_name: "Privacy Maximalist 🥷",
    description: "Stay anonymous, stay safe! Monero solves everything.",
    traits: &["private", "paranoid", "security_focused", "anonymous"],
    token_preference: &["XMR", "ZEC", "privacy_coins"],
    risk_tolerance: 35,
    fun_fact: "Shows up to the first date through a VPN",
    dating_style: "Hidden and secure - 'anonymous love'",
    ideal_match: &[Archetype::BitcoinMaxi, Archetype::CryptoBoomer],
    avoid: &[Archetype::MemeLord, Archetype::NftConnoisseur],
};
