//! Color-harmony suggestions for a wall color.

use std::collections::BTreeSet;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::listing::Color;

/// Palette pairs drawn per suggestion.
pub const PALETTES_PER_SUGGESTION: usize = 2;

/// Tags used when no palette word maps to a known color.
pub const FALLBACK_COLORS: [Color; 2] = [Color::Gray, Color::Wood];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallTone {
    White,
    Blue,
    Green,
    Gray,
    Beige,
    Black,
    Wood,
}

/// Checked in order; the first group with a keyword contained in the wall
/// color wins.
const TONE_KEYWORDS: &[(WallTone, &[&str])] = &[
    (WallTone::White, &["white", "off-white", "cream", "ivory", "snow"]),
    (WallTone::Blue, &["blue", "navy", "teal", "aqua"]),
    (WallTone::Green, &["green", "sage", "mint", "olive"]),
    (WallTone::Gray, &["gray", "grey", "charcoal"]),
    (WallTone::Beige, &["beige", "tan", "sand", "taupe"]),
    (WallTone::Black, &["black", "ebony"]),
    (WallTone::Wood, &["wood", "oak", "walnut", "teak"]),
];

const PALETTE_WORDS: &[(&str, Color)] = &[
    ("gray", Color::Gray),
    ("white", Color::White),
    ("black", Color::Black),
    ("wood", Color::Wood),
    ("beige", Color::Beige),
    ("blue", Color::Blue),
    ("green", Color::Green),
    ("navy", Color::Blue),
    ("teal", Color::Blue),
    ("olive", Color::Green),
    ("sage", Color::Green),
    ("walnut", Color::Wood),
    ("brass", Color::Gold),
    ("gold", Color::Gold),
];

impl WallTone {
    pub fn classify(wall_color: &str) -> Self {
        let wall = wall_color.trim().to_lowercase();
        TONE_KEYWORDS
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|keyword| wall.contains(keyword)))
            .map(|(tone, _)| *tone)
            .unwrap_or(WallTone::White)
    }

    pub fn palettes(&self) -> &'static [&'static str; 4] {
        match self {
            WallTone::White => {
                &["Warm Wood + Soft Gray", "Navy Blue + Brass", "Black + Gold", "Beige + Sage Green"]
            }
            WallTone::Beige => {
                &["Olive Green + Black", "White + Rattan", "Navy + Wood", "Terracotta + Cream"]
            }
            WallTone::Blue => {
                &["White + Walnut", "Mustard Yellow + Gray", "Wood + Cream", "Pink + Brass"]
            }
            WallTone::Green => {
                &["Cream + Rattan", "Terracotta + Wood", "White + Black", "Blush + Gold"]
            }
            WallTone::Gray => &["Blush Pink + Gold", "Teal + Oak", "White + Chrome", "Wood + Emerald"],
            WallTone::Black => &["White + Chrome", "Wood + Emerald", "Gold + Velvet", "Gray + Marble"],
            WallTone::Wood => {
                &["White + Black", "Sage Green + Brass", "Navy + Linen", "Terracotta + Jute"]
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub wall_tone: WallTone,
    pub palettes: Vec<String>,
    /// Sorted, deduplicated and never empty.
    pub colors: Vec<Color>,
}

pub fn suggest_palettes<R: Rng + ?Sized>(wall_color: &str, rng: &mut R) -> Suggestion {
    let wall_tone = WallTone::classify(wall_color);
    let options = wall_tone.palettes();

    let palettes: Vec<&str> = rand::seq::index::sample(rng, options.len(), PALETTES_PER_SUGGESTION)
        .into_iter()
        .map(|index| options[index])
        .collect();
    let colors = extract_colors(&palettes);

    Suggestion {
        wall_tone,
        palettes: palettes.into_iter().map(str::to_string).collect(),
        colors,
    }
}

pub fn extract_colors(palettes: &[&str]) -> Vec<Color> {
    let found: BTreeSet<Color> = palettes
        .iter()
        .flat_map(|palette| palette.split_whitespace())
        .filter_map(|word| {
            let word = word.to_lowercase();
            PALETTE_WORDS.iter().find(|(known, _)| *known == word).map(|(_, color)| *color)
        })
        .collect();

    if found.is_empty() {
        FALLBACK_COLORS.to_vec()
    } else {
        found.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn light_blue_draws_two_distinct_blue_palettes() {
        let blue = WallTone::Blue.palettes();

        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let suggestion = suggest_palettes("light blue", &mut rng);

            assert_eq!(suggestion.wall_tone, WallTone::Blue);
            assert_eq!(suggestion.palettes.len(), 2);
            assert_ne!(suggestion.palettes[0], suggestion.palettes[1]);
            for palette in &suggestion.palettes {
                assert!(blue.contains(&palette.as_str()), "{palette} is not a blue palette");
            }
            assert!(!suggestion.colors.is_empty());
        }
    }

    #[test]
    fn classification_follows_priority_order() {
        assert_eq!(WallTone::classify("Cream"), WallTone::White);
        assert_eq!(WallTone::classify("blue-green"), WallTone::Blue);
        assert_eq!(WallTone::classify("Charcoal"), WallTone::Gray);
        assert_eq!(WallTone::classify("Dark Walnut"), WallTone::Wood);
        assert_eq!(WallTone::classify("tangerine"), WallTone::Beige);
        assert_eq!(WallTone::classify("magenta"), WallTone::White);
    }

    #[test]
    fn extraction_unions_tags_across_palettes() {
        let colors = extract_colors(&["Navy Blue + Brass", "White + Walnut"]);
        assert_eq!(colors, vec![Color::White, Color::Wood, Color::Blue, Color::Gold]);
    }

    #[test]
    fn extraction_falls_back_when_nothing_matches() {
        let colors = extract_colors(&["Terracotta + Jute", "Cream + Rattan"]);
        assert_eq!(colors, FALLBACK_COLORS.to_vec());
    }

    #[test]
    fn every_tone_has_four_distinct_palettes() {
        for (tone, _) in TONE_KEYWORDS {
            let palettes = tone.palettes();
            let unique: BTreeSet<_> = palettes.iter().collect();
            assert_eq!(unique.len(), 4);
        }
    }
}
