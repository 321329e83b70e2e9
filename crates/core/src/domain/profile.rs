use serde::{Deserialize, Serialize};

use super::listing::Room;

pub const DEFAULT_ROOM: Room = Room::LivingRoom;
pub const DEFAULT_WALL_COLOR: &str = "White";
pub const UNKNOWN_DIMENSIONS: &str = "Unknown";

/// What the prompt interpreter could read out of a room description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomProfile {
    pub room: Room,
    pub wall_color: String,
    pub dimensions: Option<String>,
}

impl RoomProfile {
    pub fn dimensions_label(&self) -> &str {
        self.dimensions.as_deref().unwrap_or(UNKNOWN_DIMENSIONS)
    }
}

impl Default for RoomProfile {
    fn default() -> Self {
        Self { room: DEFAULT_ROOM, wall_color: DEFAULT_WALL_COLOR.to_string(), dimensions: None }
    }
}
