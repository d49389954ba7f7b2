//! Batch enrichment of a CSV brand table.
//!
//! The table carries `Marca` (brand), `URL`, and `Plataforma` (platform)
//! columns; header matching is case- and whitespace-insensitive, and
//! missing columns are created empty. Rows are enriched in place, one at a
//! time: a failing row is logged and skipped, never fatal, and rows that
//! already have a platform are left untouched so re-runs are idempotent.

use std::io;
use std::path::Path;

use anyhow::Context;
use storescout_detect::detect_platforms;
use storescout_fetch::PageFetcher;
use storescout_resolve::StoreResolver;

use crate::pipeline::host_of;

const BRAND_COLUMN: &str = "Marca";
const URL_COLUMN: &str = "URL";
const PLATFORM_COLUMN: &str = "Plataforma";

/// One row of the brand table. `plataforma` empty means unresolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchRow {
    pub marca: String,
    pub url: String,
    pub plataforma: String,
}

/// Reads the brand table from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid CSV.
pub fn read_rows(path: &Path) -> anyhow::Result<Vec<BatchRow>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open input table {}", path.display()))?;
    read_rows_from_reader(file).with_context(|| format!("failed to parse {}", path.display()))
}

/// Reads the brand table from any CSV source.
///
/// Column positions are located by normalized header name; a column that
/// is absent simply yields empty values for every row.
///
/// # Errors
///
/// Returns an error if the source is not valid CSV.
fn read_rows_from_reader<R: io::Read>(reader: R) -> anyhow::Result<Vec<BatchRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let column_index = |name: &str| -> Option<usize> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    let brand_idx = column_index(BRAND_COLUMN);
    let url_idx = column_index(URL_COLUMN);
    let platform_idx = column_index(PLATFORM_COLUMN);

    let field = |record: &csv::StringRecord, idx: Option<usize>| -> String {
        idx.and_then(|i| record.get(i))
            .unwrap_or("")
            .trim()
            .to_owned()
    };

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(BatchRow {
            marca: field(&record, brand_idx),
            url: field(&record, url_idx),
            plataforma: field(&record, platform_idx),
        });
    }
    Ok(rows)
}

/// Writes the enriched brand table to a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_rows(path: &Path, rows: &[BatchRow]) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create output table {}", path.display()))?;
    write_rows_to_writer(file, rows)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn write_rows_to_writer<W: io::Write>(writer: W, rows: &[BatchRow]) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([BRAND_COLUMN, URL_COLUMN, PLATFORM_COLUMN])?;
    for row in rows {
        csv_writer.write_record([&row.marca, &row.url, &row.plataforma])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Derives a brand label from a storefront URL: the host, minus a leading
/// `www.`.
fn brand_from_url(url: &str) -> String {
    host_of(url).trim_start_matches("www.").to_owned()
}

/// Enriches unresolved rows in place, sequentially.
///
/// For each row without a platform: resolve a missing URL from the brand
/// name (persisted even when classification later fails), fetch and
/// classify when a URL is available, and backfill an empty brand from the
/// URL host. Per-row failures are logged and the batch continues.
pub async fn process_rows(
    rows: &mut [BatchRow],
    resolver: Option<&StoreResolver>,
    fetcher: &PageFetcher,
) {
    let total = rows.len();
    for (i, row) in rows.iter_mut().enumerate() {
        if !row.plataforma.is_empty() {
            continue;
        }

        let target = if row.marca.is_empty() {
            row.url.clone()
        } else {
            row.marca.clone()
        };
        tracing::info!(row = i + 1, total, target = %target, "processing row");

        if row.url.is_empty() && !row.marca.is_empty() {
            if let Some(resolver) = resolver {
                if let Some(url) = resolver.resolve(&row.marca).await {
                    // Keep the resolved URL even if classification below
                    // fails; partial progress survives re-runs.
                    row.url = url;
                }
            } else {
                tracing::warn!(
                    row = i + 1,
                    brand = %row.marca,
                    "search credentials not configured; cannot resolve brand"
                );
            }
        }

        if !row.url.is_empty() {
            let fetched = fetcher.fetch(&row.url).await;
            if let Some(html) = fetched.html {
                if let Some(primary) = detect_platforms(&html).first() {
                    row.plataforma = (*primary).to_owned();
                }
            } else {
                tracing::warn!(row = i + 1, url = %row.url, "could not retrieve page");
            }
        }

        if row.marca.is_empty() && !row.url.is_empty() {
            let brand = brand_from_url(&row.url);
            if !brand.is_empty() {
                row.marca = brand;
            }
        }
    }
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
