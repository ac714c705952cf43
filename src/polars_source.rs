#![cfg(feature = "polars")]

//! Loads the episode log with polars.
//!
//! Every column is read as text so that row typing stays in
//! [`Episode::from_lookup`] and malformed numbers are reported instead of
//! failing the whole file.

use crate::data_types::{columns, Episode};
use eyre::{eyre, WrapErr};
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{info, warn};

fn read_options() -> CsvReadOptions {
    // Zero rows of schema inference reads every column as a string.
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
}

/// Reads a CSV file from disk into a text-only frame.
pub fn read_csv(path: impl AsRef<Path>) -> eyre::Result<DataFrame> {
    let path = path.as_ref();
    read_options()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .and_then(|reader| reader.finish())
        .wrap_err_with(|| format!("failed to read episode log {}", path.display()))
}

/// Reads CSV text held in memory.
pub fn read_csv_str(text: &str) -> eyre::Result<DataFrame> {
    read_options()
        .into_reader_with_file_handle(Cursor::new(text.as_bytes().to_vec()))
        .finish()
        .wrap_err("failed to parse episode log")
}

/// Types every row of `df`.
///
/// Fails when a column the aggregations need is absent; other absent columns
/// read as empty text.
pub fn episodes_from_frame(df: &DataFrame) -> eyre::Result<Vec<Episode>> {
    for name in columns::REQUIRED {
        if df.column(name).is_err() {
            return Err(eyre!("episode log has no `{}` column", name));
        }
    }

    let mut text_columns: Vec<(&str, &StringChunked)> = Vec::with_capacity(columns::ALL.len());
    for name in columns::ALL {
        match df.column(name) {
            Ok(column) => {
                let ca = column
                    .as_materialized_series()
                    .str()
                    .wrap_err_with(|| format!("column `{}` is not text", name))?;
                text_columns.push((name, ca));
            }
            Err(_) => warn!(column = name, "episode log column missing, reading as empty"),
        }
    }

    let episodes: Vec<Episode> = (0..df.height())
        .map(|row| {
            Episode::from_lookup(|name| {
                text_columns
                    .iter()
                    .find(|(column, _)| *column == name)
                    .and_then(|(_, ca)| ca.get(row))
            })
        })
        .collect();

    for (row, episode) in episodes.iter().enumerate() {
        let malformed = episode.malformed_fields();
        if !malformed.is_empty() {
            warn!(
                row,
                title = %episode.title,
                air_date = ?episode.air_date(),
                fields = ?malformed,
                "malformed numeric fields"
            );
        }
    }

    Ok(episodes)
}

/// Loads and types the episode log at `path`.
pub fn load_episodes(path: impl AsRef<Path>) -> eyre::Result<Vec<Episode>> {
    let path = path.as_ref();
    let df = read_csv(path)?;
    let episodes = episodes_from_frame(&df)?;
    info!(rows = episodes.len(), path = %path.display(), "loaded episode log");
    Ok(episodes)
}
