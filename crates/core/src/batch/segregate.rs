//! Splits a product export into one CSV per room.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use csv::{StringRecord, Writer};
use serde::Serialize;
use tracing::info;

use super::ProductTable;
use crate::errors::ApplicationError;
use crate::lexicon::{CATEGORY_ROOMS, TITLE_ROOM_KEYWORDS};

pub const GENERAL_BUCKET: &str = "General";
pub const ROOM_COLUMN: &str = "room_type";

/// Title keywords first, then the exact store category, then `General`.
pub fn assign_room(title: &str, category: Option<&str>) -> &'static str {
    let lowered = title.to_lowercase();
    if let Some((_, room)) = TITLE_ROOM_KEYWORDS.iter().find(|(keyword, _)| lowered.contains(keyword)) {
        return room.name();
    }

    category
        .and_then(|category| CATEGORY_ROOMS.iter().find(|(label, _)| *label == category))
        .map(|(_, room)| room.name())
        .unwrap_or(GENERAL_BUCKET)
}

/// `Living Room` becomes `Living_Room.csv`.
pub fn room_file_name(room: &str) -> String {
    format!("{}.csv", room.replace(' ', "_"))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomFile {
    pub room: String,
    pub path: PathBuf,
    pub rows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegregationSummary {
    pub input_rows: usize,
    /// Largest bucket first.
    pub files: Vec<RoomFile>,
}

pub fn segregate_csv(input: &Path, output_dir: &Path) -> Result<SegregationSummary, ApplicationError> {
    let table = ProductTable::read(input)?;
    fs::create_dir_all(output_dir)?;

    let mut buckets: BTreeMap<&'static str, Vec<StringRecord>> = BTreeMap::new();
    for record in &table.records {
        let room = assign_room(table.title(record), table.category(record));
        buckets.entry(room).or_default().push(table.output_record(record, &[room.to_string()]));
    }

    let headers = table.output_headers(&[ROOM_COLUMN]);
    let mut files = Vec::with_capacity(buckets.len());
    for (room, records) in buckets {
        let path = output_dir.join(room_file_name(room));
        let mut writer = Writer::from_path(&path)?;
        writer.write_record(&headers)?;
        for record in &records {
            writer.write_record(record)?;
        }
        writer.flush()?;

        files.push(RoomFile { room: room.to_string(), path, rows: records.len() });
    }
    files.sort_by(|a, b| b.rows.cmp(&a.rows));

    info!(
        event_name = "batch.segregate.completed",
        input = %input.display(),
        rows = table.records.len(),
        files = files.len(),
        "segregated products by room"
    );

    Ok(SegregationSummary { input_rows: table.records.len(), files })
}
