use crate::models::{Archetype, PersonalityAnalysis};

/// Assign an archetype for a user id, deterministically
///
/// The assignment is a stable pseudo-random projection of the id into the
/// 10-way archetype space: the same id always yields the same archetype, with
/// no storage. A splitmix64 finalizer is used rather than the std hasher so
/// the mapping stays identical across toolchain versions.
pub fn assign_archetype(fid: u64) -> Archetype {
    let mixed = splitmix64(fid);
    Archetype::ALL[(mixed % Archetype::ALL.len() as u64) as usize]
}

/// splitmix64 finalizer (public domain constant set)
#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e3779b97f4a7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
    x ^ (x >> 31)
}

/// Build the personality analysis for a user id
///
/// Strengths come from the leading traits, weaknesses from the trailing ones,
/// and the dating tips fold in the record's flavor fields.
pub fn analyze(fid: u64) -> PersonalityAnalysis {
    let archetype = assign_archetype(fid);
    analyze_as(fid, archetype)
}

/// Analysis for an already-resolved archetype
pub fn analyze_as(fid: u64, archetype: Archetype) -> PersonalityAnalysis {
    let profile = archetype.profile();

    let strengths = profile
        .traits
        .iter()
        .take(3)
        .map(|t| strength_label(t))
        .collect();

    let weaknesses = profile
        .traits
        .iter()
        .rev()
        .take(2)
        .rev()
        .map(|t| weakness_label(t))
        .collect();

    let ideal_names = profile
        .ideal_match
        .iter()
        .map(|a| a.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let dating_tips = vec![
        format!("Ideal first date for {}: {}", profile.display_name, profile.fun_fact),
        format!("Dating style: {}", profile.dating_style),
        format!("Most compatible types: {}", ideal_names),
    ];

    PersonalityAnalysis {
        fid,
        archetype,
        strengths,
        weaknesses,
        dating_tips,
    }
}

fn strength_label(trait_tag: &str) -> String {
    match trait_tag {
        "loyal" => "Loyal and dependable".to_string(),
        "adventurous" => "Bold and unafraid of risk".to_string(),
        "artistic" => "Creative with a strong aesthetic sense".to_string(),
        "funny" => "Witty and entertaining".to_string(),
        "democratic" => "Fair and transparent".to_string(),
        "analytical" => "A strategic thinker".to_string(),
        "private" => "Takes security seriously".to_string(),
        other => humanize(other),
    }
}

fn weakness_label(trait_tag: &str) -> String {
    match trait_tag {
        "skeptical" => "Can be overly suspicious".to_string(),
        "FOMO" => "Makes rushed decisions out of FOMO".to_string(),
        "impulsive" => "Acts before thinking".to_string(),
        "conservative" => "Resistant to new ideas".to_string(),
        "paranoid" => "Overly cautious and distrustful".to_string(),
        other => format!("Sometimes {}", other.replace('_', " ")),
    }
}

/// Turn a snake_case trait tag into a display phrase
fn humanize(tag: &str) -> String {
    tag.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
