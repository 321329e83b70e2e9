//! Free-text room description parsing.
//!
//! The description is split on commas and each segment is checked for a
//! room name, a `wall color ...` phrase and a `WxH` dimension token. Any
//! field that is never matched keeps its default.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::listing::Room;
use crate::domain::profile::RoomProfile;

const WALL_COLOR_PHRASE: &str = "wall color";
const CONNECTIVES: &[&str] = &["is", "of", "was"];

static DIMENSIONS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+[xX]\d*").expect("dimension pattern is valid"));

pub fn interpret_prompt(prompt: &str) -> RoomProfile {
    let mut profile = RoomProfile::default();

    for segment in prompt.split(',').map(|part| part.trim().to_lowercase()) {
        // No early exit across segments: a later room mention overrides.
        if let Some(room) = match_room(&segment) {
            profile.room = room;
        }

        if let Some(wall_color) = match_wall_color(&segment) {
            profile.wall_color = wall_color;
        }

        if let Some(found) = DIMENSIONS.find(&segment) {
            profile.dimensions = Some(found.as_str().to_string());
        }
    }

    profile
}

fn match_room(segment: &str) -> Option<Room> {
    let squashed: String = segment.chars().filter(|ch| *ch != ' ').collect();
    Room::ALL.into_iter().find(|room| squashed.contains(&room.compact_key()))
}

fn match_wall_color(segment: &str) -> Option<String> {
    let (_, tail) = segment.rsplit_once(WALL_COLOR_PHRASE)?;
    let mut rest = tail.trim().trim_start_matches([':', '=', '-']).trim_start();

    for connective in CONNECTIVES {
        if let Some(stripped) = rest.strip_prefix(connective) {
            if stripped.is_empty() || stripped.starts_with(' ') {
                rest = stripped.trim_start();
                break;
            }
        }
    }

    let rest = rest.trim();
    (!rest.is_empty()).then(|| title_case(rest))
}

/// Uppercases the first letter of every alphabetic run and lowercases the
/// rest, so `light blue` becomes `Light Blue` and `off-white` `Off-White`.
pub fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut previous_is_letter = false;

    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }

    output
}
