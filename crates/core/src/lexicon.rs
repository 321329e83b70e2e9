//! Static keyword tables.
//!
//! Every table here is immutable process-wide data; lookups never allocate.

use crate::domain::listing::{Color, Room, Style};

/// Title terms that mark hardware, spare parts and accessories. Rows whose
/// title contains any of these are never recommended.
pub const AVOID_KEYWORDS: &[&str] = &["screw", "bolt", "nut", "washer", "kit", "part", "hardware"];

pub fn style_keywords(style: Style) -> &'static [&'static str] {
    match style {
        Style::Minimalist => &["minimal", "simple", "clean", "scandi", "zen"],
        Style::Modern => &["modern", "contemporary", "chrome", "glass", "metal"],
        Style::Boho => &["boho", "rattan", "wicker", "macrame", "jute"],
    }
}

pub fn color_keywords(color: Color) -> &'static [&'static str] {
    match color {
        Color::White => &["white", "ivory", "snow", "cream"],
        Color::Black => &["black", "ebony", "charcoal"],
        Color::Gray => &["gray", "grey", "silver", "ash"],
        Color::Wood => &["wood", "oak", "walnut", "teak", "birch"],
        Color::Beige => &["beige", "tan", "sand", "khaki"],
        Color::Blue => &["blue", "navy", "teal", "aqua"],
        Color::Green => &["green", "sage", "olive", "emerald", "mint"],
        Color::Gold => &[],
    }
}

pub fn room_categories(room: Room) -> &'static [&'static str] {
    match room {
        Room::Bedroom => &["Bed", "Table", "Wardrobe", "Shelf", "Dresser"],
        Room::LivingRoom => &["Sofa", "Table", "Chair", "Shelf", "TV Stand"],
        Room::Office => &["Desk", "Chair", "Shelf", "Cabinet"],
        Room::Kitchen => &["Table", "Cabinet", "Shelf", "Stool"],
        Room::Bathroom => &["Cabinet", "Shelf", "Mirror", "Vanity"],
        Room::DiningRoom => &["Table", "Chair", "Sideboard"],
        Room::Balcony => &["Chair", "Table", "Bench", "Plant Stand"],
        Room::Hallway => &["Cabinet", "Shelf", "Bench", "Table"],
    }
}

/// Case-insensitive substring test of `title` against any keyword.
/// `title` must already be lowercased.
pub fn contains_any(lowered_title: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lowered_title.contains(keyword))
}

/// Title keyword → room, in priority order. The first keyword contained in
/// a lowercased title decides the room.
pub const TITLE_ROOM_KEYWORDS: &[(&str, Room)] = &[
    ("bed", Room::Bedroom),
    ("mattress", Room::Bedroom),
    ("nightstand", Room::Bedroom),
    ("night stand", Room::Bedroom),
    ("dresser", Room::Bedroom),
    ("wardrobe", Room::Bedroom),
    ("lamp", Room::Office),
    ("headboard", Room::Bedroom),
    ("pillow", Room::Bedroom),
    ("duvet", Room::Bedroom),
    ("curtain", Room::LivingRoom),
    ("stove", Room::Kitchen),
    ("oven", Room::Kitchen),
    ("refrigerator", Room::Kitchen),
    ("fridge", Room::Kitchen),
    ("cabinet", Room::Bathroom),
    ("table", Room::Kitchen),
    ("chair", Room::Kitchen),
    ("island", Room::Kitchen),
    ("microwave", Room::Kitchen),
    ("shelf", Room::Bathroom),
    ("spice rack", Room::Kitchen),
    ("sofa", Room::LivingRoom),
    ("couch", Room::LivingRoom),
    ("coffee table", Room::LivingRoom),
    ("tv stand", Room::LivingRoom),
    ("rug", Room::LivingRoom),
    ("armchair", Room::LivingRoom),
    ("ottoman", Room::LivingRoom),
    ("bookshelf", Room::Office),
    ("vanity", Room::Bathroom),
    ("mirror", Room::Hallway),
    ("towel rack", Room::Bathroom),
    ("dining table", Room::DiningRoom),
    ("dining chair", Room::DiningRoom),
    ("sideboard", Room::DiningRoom),
    ("buffet", Room::DiningRoom),
    ("outdoor", Room::Balcony),
    ("balcony", Room::Balcony),
    ("plant", Room::Balcony),
    ("umbrella", Room::Balcony),
    ("bench", Room::Hallway),
    ("patio", Room::Balcony),
    ("desk", Room::Office),
    ("office chair", Room::Office),
    ("console", Room::Hallway),
    ("coat", Room::Hallway),
    ("shoe rack", Room::Hallway),
    ("entryway", Room::Hallway),
];

/// Store category labels (exact match) → room. Consulted only when no
/// title keyword matched.
pub const CATEGORY_ROOMS: &[(&str, Room)] = &[
    ("Beds", Room::Bedroom),
    ("Mattresses", Room::Bedroom),
    ("Nightstands", Room::Bedroom),
    ("Dressers & chest of drawers", Room::Bedroom),
    ("Wardrobes", Room::Bedroom),
    ("Bedroom storage", Room::Bedroom),
    ("Bedroom textiles", Room::Bedroom),
    ("Kitchen cabinets", Room::Kitchen),
    ("Kitchen worktops", Room::Kitchen),
    ("Kitchen sinks & taps", Room::Kitchen),
    ("Kitchen appliances", Room::Kitchen),
    ("Kitchen islands & trolleys", Room::Kitchen),
    ("Kitchen tables & chairs", Room::Kitchen),
    ("Sofas & sectionals", Room::LivingRoom),
    ("Armchairs & chaise longues", Room::LivingRoom),
    ("TV & media furniture", Room::LivingRoom),
    ("Coffee & side tables", Room::LivingRoom),
    ("Bookcases & shelving units", Room::LivingRoom),
    ("Rugs", Room::LivingRoom),
    ("Bathroom furniture", Room::Bathroom),
    ("Bathroom storage", Room::Bathroom),
    ("Bathroom textiles", Room::Bathroom),
    ("Dining tables", Room::DiningRoom),
    ("Dining chairs", Room::DiningRoom),
    ("Dining sets", Room::DiningRoom),
    ("Sideboards & buffet tables", Room::DiningRoom),
    ("Outdoor furniture", Room::Balcony),
    ("Balcony furniture", Room::Balcony),
    ("Garden tables", Room::Balcony),
    ("Garden chairs", Room::Balcony),
    ("Desks & computer desks", Room::Office),
    ("Office chairs", Room::Office),
    ("Office storage", Room::Office),
    ("Hallway furniture", Room::Hallway),
    ("Shoe cabinets", Room::Hallway),
    ("Coat racks & stands", Room::Hallway),
    ("Console tables", Room::Hallway),
];
