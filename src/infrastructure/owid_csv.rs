// Remote OWID CSV dataset provider
use crate::application::dataset_provider::DatasetProvider;
use crate::domain::record::LiteracyRecord;
use crate::infrastructure::config::DatasetSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is missing a header row")]
    MissingHeader,
    #[error("dataset has no '{0}' column")]
    MissingColumn(String),
}

/// Fetches the literacy CSV published by Our World in Data and maps its rows
/// to domain records.
#[derive(Debug, Clone)]
pub struct OwidCsvProvider {
    source: DatasetSource,
}

impl OwidCsvProvider {
    pub fn new(source: DatasetSource) -> Self {
        Self { source }
    }
}

#[async_trait]
impl DatasetProvider for OwidCsvProvider {
    async fn fetch_records(&self) -> Result<Vec<LiteracyRecord>> {
        let client = reqwest::Client::new();
        let response = client
            .get(&self.source.url)
            .header("Accept", "text/csv")
            .send()
            .await
            .context("Failed to request the literacy dataset")?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Dataset request failed with status {}",
                response.status()
            );
        }

        let body = response
            .text()
            .await
            .context("Failed to read the dataset body")?;

        let records = parse_records(&body, &self.source)?;
        tracing::debug!(records = records.len(), "parsed literacy dataset");
        Ok(records)
    }
}

/// Header-keyed CSV parse. Rows shorter than a referenced column and cells
/// that fail numeric parsing yield `None` fields rather than errors; only a
/// missing header or a missing named column is fatal.
pub fn parse_records(
    csv: &str,
    source: &DatasetSource,
) -> std::result::Result<Vec<LiteracyRecord>, DatasetError> {
    let mut lines = csv.lines().map(trim_line);
    let header = loop {
        match lines.next() {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => break split_csv_line(line),
            None => return Err(DatasetError::MissingHeader),
        }
    };

    let entity_idx = column_index(&header, &source.entity_column)?;
    let year_idx = column_index(&header, &source.year_column)?;
    let women_idx = column_index(&header, &source.women_column)?;
    let men_idx = column_index(&header, &source.men_column)?;
    let region_idx = column_index(&header, &source.region_column)?;

    let mut records = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let cells = split_csv_line(line);
        records.push(LiteracyRecord::new(
            cell(&cells, entity_idx).unwrap_or_default().to_string(),
            cell(&cells, region_idx).unwrap_or_default().to_string(),
            parse_cell(&cells, year_idx),
            parse_cell(&cells, women_idx),
            parse_cell(&cells, men_idx),
        ));
    }
    Ok(records)
}

fn column_index(header: &[String], name: &str) -> std::result::Result<usize, DatasetError> {
    header
        .iter()
        .position(|c| c == name)
        .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
}

fn cell<'a>(cells: &'a [String], idx: usize) -> Option<&'a str> {
    cells.get(idx).map(String::as_str).filter(|c| !c.is_empty())
}

fn parse_cell<T: std::str::FromStr>(cells: &[String], idx: usize) -> Option<T> {
    cell(cells, idx).and_then(|c| c.trim().parse().ok())
}

// CRLF bodies leave a trailing '\r' on every cell of the last column, and a
// UTF-8 BOM prefixes the first header cell.
fn trim_line(line: &str) -> &str {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.strip_prefix('\u{feff}').unwrap_or(line)
}

/// Splits one CSV line, honoring double-quoted cells and doubled quotes.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => cells.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    cells.push(current);
    cells
}
