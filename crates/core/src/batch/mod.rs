//! CSV batch utilities for externally supplied product exports.

pub mod enrich;
pub mod segregate;
pub mod sentiment;

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;

use crate::errors::ApplicationError;

/// Header names accepted for the product title, in lookup order.
pub const TITLE_COLUMNS: [&str; 2] = ["title", "name"];
pub const PRICE_COLUMN: &str = "price";
pub const CATEGORY_COLUMN: &str = "category";

/// A fully loaded CSV file with its product columns located.
#[derive(Debug, Clone)]
pub struct ProductTable {
    pub headers: StringRecord,
    pub records: Vec<StringRecord>,
    title: usize,
    price: Option<usize>,
    category: Option<usize>,
}

impl ProductTable {
    pub fn read(path: &Path) -> Result<Self, ApplicationError> {
        let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
        let headers = reader.headers()?.clone();
        let records = reader.records().collect::<Result<Vec<_>, _>>()?;
        Self::from_parts(headers, records)
            .map_err(|message| ApplicationError::Import(format!("{}: {message}", path.display())))
    }

    fn from_parts(headers: StringRecord, records: Vec<StringRecord>) -> Result<Self, String> {
        let find = |name: &str| headers.iter().position(|header| header.trim().eq_ignore_ascii_case(name));
        let title = TITLE_COLUMNS
            .iter()
            .find_map(|name| find(name))
            .ok_or_else(|| "input has no `title` or `name` column".to_string())?;
        let price = find(PRICE_COLUMN);
        let category = find(CATEGORY_COLUMN);

        Ok(Self { headers, records, title, price, category })
    }

    pub fn title<'a>(&self, record: &'a StringRecord) -> &'a str {
        record.get(self.title).unwrap_or("").trim()
    }

    pub fn category<'a>(&self, record: &'a StringRecord) -> Option<&'a str> {
        self.category.and_then(|index| record.get(index)).map(str::trim)
    }

    /// Copy of `record` with the price cell cleaned and `extra` appended.
    /// Short rows are padded so every output row matches the header width.
    pub fn output_record(&self, record: &StringRecord, extra: &[String]) -> StringRecord {
        let mut output = StringRecord::new();
        for index in 0..self.headers.len() {
            let cell = record.get(index).unwrap_or("");
            if Some(index) == self.price {
                output.push_field(&clean_price(cell).map(|price| price.to_string()).unwrap_or_default());
            } else {
                output.push_field(cell);
            }
        }
        for value in extra {
            output.push_field(value);
        }
        output
    }

    pub fn output_headers(&self, extra: &[&str]) -> StringRecord {
        let mut headers = self.headers.clone();
        for name in extra {
            headers.push_field(name);
        }
        headers
    }
}

/// Strips everything but digits and `.` and parses the rest, so `$1,299.00`
/// reads as `1299.00`. Returns `None` when nothing numeric remains.
pub fn clean_price(raw: &str) -> Option<Decimal> {
    let digits: String = raw.chars().filter(|ch| ch.is_ascii_digit() || *ch == '.').collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
