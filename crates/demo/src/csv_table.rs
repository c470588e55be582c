// File: crates/demo/src/csv_table.rs
// Summary: Turns a header-first CSV table into a ChartSpec.
// Column 0 holds category labels; every other column is one series named by its header.

use std::io::Read;

use anyhow::{Context, Result};
use dashchart_core::category::relabel_dates;
use dashchart_core::{ChartKind, ChartOptions, ChartSpec, SeriesSpec};
use tracing::{debug, warn};

/// Build a spec of `kind` from CSV text. ISO-date category columns are
/// relabeled with `date_format`. Blank cells become gaps (NaN); any other
/// non-numeric cell is an error.
pub fn spec_from_csv<R: Read>(reader: R, kind: ChartKind, date_format: &str) -> Result<ChartSpec> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers().context("reading CSV header")?.clone();
    if headers.len() < 2 {
        anyhow::bail!("need a category column and at least one value column, got {} column(s)", headers.len());
    }
    let names: Vec<String> = headers.iter().skip(1).map(str::to_string).collect();
    debug!(?names, "CSV series columns");

    let mut categories = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading CSV record {}", line + 1))?;
        categories.push(rec.get(0).unwrap_or_default().to_string());
        for (col, values) in columns.iter_mut().enumerate() {
            let cell = rec.get(col + 1).unwrap_or_default();
            values.push(parse_cell(cell).with_context(|| {
                format!("record {}, column '{}': not a number: {cell:?}", line + 1, names[col])
            })?);
        }
    }

    let gaps = columns.iter().flatten().filter(|v| v.is_nan()).count();
    if gaps > 0 {
        warn!(gaps, "blank CSV cells left as gaps");
    }

    let categories = relabel_dates(categories, date_format);
    let mut spec = ChartSpec::new(kind, categories);
    for (name, values) in names.into_iter().zip(columns) {
        let series = SeriesSpec::new(values);
        spec = spec.with_series(if name.is_empty() { series } else { series.named(name) });
    }
    Ok(spec)
}

/// Options picked from CLI flags.
pub fn csv_options(horizontal: bool, fill: bool, legend_left: bool) -> ChartOptions {
    let mut options = ChartOptions::default();
    if horizontal {
        options = options.horizontal();
    }
    if fill {
        options = options.fill_height();
    }
    if legend_left {
        options = options.legend_left();
    }
    options
}

fn parse_cell(cell: &str) -> Result<f64> {
    if cell.is_empty() {
        return Ok(f64::NAN);
    }
    Ok(cell.replace(',', "").parse::<f64>()?)
}
