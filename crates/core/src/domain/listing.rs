use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::DomainError;
use crate::lexicon;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Room {
    Bedroom,
    Kitchen,
    #[serde(rename = "Living Room")]
    LivingRoom,
    Bathroom,
    #[serde(rename = "Dining Room")]
    DiningRoom,
    Balcony,
    Office,
    Hallway,
}

impl Room {
    /// Rooms in option order. Prompt matching scans them in this order.
    pub const ALL: [Room; 8] = [
        Room::Bedroom,
        Room::Kitchen,
        Room::LivingRoom,
        Room::Bathroom,
        Room::DiningRoom,
        Room::Balcony,
        Room::Office,
        Room::Hallway,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Room::Bedroom => "Bedroom",
            Room::Kitchen => "Kitchen",
            Room::LivingRoom => "Living Room",
            Room::Bathroom => "Bathroom",
            Room::DiningRoom => "Dining Room",
            Room::Balcony => "Balcony",
            Room::Office => "Office",
            Room::Hallway => "Hallway",
        }
    }

    /// Lowercase name with spaces removed, e.g. `livingroom`.
    pub fn compact_key(&self) -> String {
        compact(self.name())
    }

    /// Categories the synthesizer may assign to listings for this room.
    pub fn categories(&self) -> &'static [&'static str] {
        lexicon::room_categories(*self)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Room {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = compact(value);
        Room::ALL
            .into_iter()
            .find(|room| room.compact_key() == wanted)
            .ok_or_else(|| DomainError::UnknownRoom(value.trim().to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Style {
    Minimalist,
    Modern,
    Boho,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Minimalist, Style::Modern, Style::Boho];

    pub fn name(&self) -> &'static str {
        match self {
            Style::Minimalist => "Minimalist",
            Style::Modern => "Modern",
            Style::Boho => "Boho",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        lexicon::style_keywords(*self)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        Style::ALL
            .into_iter()
            .find(|style| style.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| DomainError::UnknownStyle(value.trim().to_string()))
    }
}

/// Color tags. `Gold` only comes out of palette extraction; it is not a
/// filter option and has no title keywords.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    Gray,
    Wood,
    Beige,
    Blue,
    Green,
    Gold,
}

impl Color {
    /// The filterable palette, in option order.
    pub const PALETTE: [Color; 7] = [
        Color::White,
        Color::Black,
        Color::Gray,
        Color::Wood,
        Color::Beige,
        Color::Blue,
        Color::Green,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
            Color::Gray => "Gray",
            Color::Wood => "Wood",
            Color::Beige => "Beige",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Gold => "Gold",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        lexicon::color_keywords(*self)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        let wanted = if wanted == "grey" { "gray".to_string() } else { wanted };
        Color::PALETTE
            .into_iter()
            .chain([Color::Gold])
            .find(|color| color.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| DomainError::UnknownColor(value.trim().to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "IKEA")]
    Ikea,
    Amazon,
    Flipkart,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Ikea, Source::Amazon, Source::Flipkart];

    pub fn name(&self) -> &'static str {
        match self {
            Source::Ikea => "IKEA",
            Source::Amazon => "Amazon",
            Source::Flipkart => "Flipkart",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        Source::ALL
            .into_iter()
            .find(|source| source.name().to_ascii_lowercase() == wanted)
            .ok_or_else(|| DomainError::UnknownSource(value.trim().to_string()))
    }
}

/// Style dropdown value: "All Styles" or one concrete style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StyleFilter {
    #[default]
    All,
    Only(Style),
}

impl fmt::Display for StyleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleFilter::All => f.write_str("All Styles"),
            StyleFilter::Only(style) => style.fmt(f),
        }
    }
}

impl FromStr for StyleFilter {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "all" | "all styles" => Ok(StyleFilter::All),
            _ => value.parse().map(StyleFilter::Only),
        }
    }
}

impl Serialize for StyleFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Color dropdown value: "All Colors" or one palette color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorFilter {
    #[default]
    All,
    Only(Color),
}

impl fmt::Display for ColorFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorFilter::All => f.write_str("All Colors"),
            ColorFilter::Only(color) => color.fmt(f),
        }
    }
}

impl FromStr for ColorFilter {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "all" | "all colors" => Ok(ColorFilter::All),
            _ => match value.parse::<Color>()? {
                Color::Gold => Err(DomainError::UnknownColor(value.trim().to_string())),
                color => Ok(ColorFilter::Only(color)),
            },
        }
    }
}

impl Serialize for ColorFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductListing {
    pub title: String,
    pub price: Decimal,
    pub url: String,
    pub image_url: String,
    pub source: Source,
    pub category: String,
    pub room: Room,
    pub color: Color,
    pub style: Style,
}

/// A listing plus the synthetic popularity fields drawn for one catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogRow {
    #[serde(flatten)]
    pub listing: ProductListing,
    pub review_count: u32,
    pub purchase_count: u32,
    pub rating: f64,
    pub base_score: f64,
}

impl CatalogRow {
    pub fn title(&self) -> &str {
        &self.listing.title
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    #[serde(flatten)]
    pub row: CatalogRow,
    pub weight: f64,
}

impl RankedRow {
    pub fn listing(&self) -> &ProductListing {
        &self.row.listing
    }
}

fn compact(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
