//! Reading uploaded CSV files and writing the export
//!
//! Empty fields and the usual NA markers (`NA`, `N/A`, `null`, `None`, ...)
//! load as missing cells, the same way a data-frame reader turns them into NaN.

use super::table::{Cell, Table};
use crate::error::{Error, Result};
use csv::{ReaderBuilder, Writer};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Field values read as missing, matched exactly
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_na(field: &str) -> bool {
    NA_VALUES.contains(&field)
}

/// Data loader for CSV files
pub struct DataLoader;

impl DataLoader {
    /// Parse CSV with a header row
    pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(Error::Parse("no columns to parse from file".to_string()));
        }

        let mut table = Table::new(headers.iter());
        for record in reader.records() {
            let record = record?;
            let row: Vec<Cell> = record
                .iter()
                .map(|field| {
                    if is_na(field) {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect();
            table.push_row(row)?;
        }

        debug!(rows = table.len(), columns = table.columns().len(), "Parsed CSV");
        Ok(table)
    }

    /// Parse CSV held in memory (an uploaded file)
    pub fn read_bytes(bytes: &[u8]) -> Result<Table> {
        Self::read_csv(bytes)
    }

    /// Load a CSV file from disk
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Table> {
        let file = File::open(path)?;
        Self::read_csv(file)
    }

    /// Write the table with its header; missing cells are left empty
    pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
        let mut writer = Writer::from_writer(writer);

        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Encode the table as the UTF-8 download artifact
    pub fn export_bytes(table: &Table) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::write_csv(table, &mut buffer)?;
        Ok(buffer)
    }

    /// Save the table to a CSV file
    pub fn save_csv<P: AsRef<Path>>(table: &Table, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::write_csv(table, file)
    }
}
