// src/loader.rs
//! Fetch + parse + shape, one call per table refresh.
//!
//! Nothing is cached: every call fetches and builds a fresh document,
//! which the caller owns until it replaces it.

use crate::{
    config::consts::FIXED_COLUMNS,
    config::options::{SourceOptions, ViewKind},
    csv::{self, CsvDocument},
    error::{LoadError, Result},
    source,
    specs::{self, ViewSpec},
    table::{self, ColumnWindow, TableModel},
    view::{Fetch, Outcome},
};

/// The historique table, filtered and sorted once, paged many times.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoriqueData {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub years: Vec<String>,
}

impl HistoriqueData {
    pub fn from_document(doc: &CsvDocument) -> Self {
        let spec = &specs::HISTORIQUE;
        let rows = shape_rows(spec, doc);
        Self { header: doc.header_owned(), rows, years: years_from_header(doc) }
    }

    /// Table for the year columns in `window`.
    pub fn page(&self, window: ColumnWindow) -> TableModel {
        table::render(&self.rows, &self.header, Some(window), specs::HISTORIQUE.cells)
    }
}

/// Year columns of the historique header (everything after the fixed block).
/// Blank cells are kept: year `i` must stay column `FIXED_COLUMNS + i`.
pub fn years_from_header(doc: &CsvDocument) -> Vec<String> {
    doc.header()
        .map(|h| h.iter().skip(FIXED_COLUMNS).cloned().collect())
        .unwrap_or_default()
}

fn shape_rows(spec: &ViewSpec, doc: &CsvDocument) -> Vec<Vec<String>> {
    let rows = csv::filter_valid_rows(doc, spec.min_cells);
    if spec.sort_by_rank { table::sort_by_rank(rows) } else { rows }
}

/// Filter, sort and render a parsed document the way `spec` wants it.
/// Paged views come out unwindowed here; use `HistoriqueData::page`.
pub fn render_document(spec: &ViewSpec, doc: &CsvDocument) -> TableModel {
    let rows = shape_rows(spec, doc);
    table::render(&rows, &doc.header_owned(), None, spec.cells)
}

pub fn load_document(src: &SourceOptions, rel_path: &str) -> Result<CsvDocument> {
    let text = source::fetch_text(src, rel_path)?;
    let doc = csv::parse(&text);
    logd!("Load: {} → {} row(s)", rel_path, doc.row_count());
    Ok(doc)
}

pub fn load_historique(src: &SourceOptions) -> Result<HistoriqueData> {
    let path = specs::build_path(&specs::HISTORIQUE, None);
    let doc = load_document(src, &path)?;
    let data = HistoriqueData::from_document(&doc);
    logf!("Load: historique rows={} years={}", data.rows.len(), data.years.len());
    Ok(data)
}

/// Selectable years, read from the historique header.
pub fn load_years(src: &SourceOptions) -> Result<Vec<String>> {
    let path = specs::build_path(&specs::HISTORIQUE, None);
    let doc = load_document(src, &path)?;
    Ok(years_from_header(&doc))
}

/// One season's table for a yearly view. For the historique `year` is
/// ignored and the whole table comes back unpaged.
pub fn load_yearly(src: &SourceOptions, kind: ViewKind, year: &str) -> Result<TableModel> {
    let spec = specs::spec_for(kind);
    let path = specs::build_path(spec, kind.is_yearly().then_some(year));
    let doc = load_document(src, &path)?;
    let model = render_document(spec, &doc);
    logf!("Load: {} {} rows={}", kind, year, model.nrows());
    Ok(model)
}

/// Perform a fetch requested by a view reducer. Errors become the message
/// the view displays.
pub fn run_fetch(src: &SourceOptions, fetch: &Fetch) -> Outcome {
    match fetch {
        Fetch::Historique => {
            let res = load_historique(src).map_err(|e| {
                loge!("Load: historique failed: {}", e);
                e.to_string()
            });
            Outcome::Historique(res)
        }
        Fetch::Yearly { kind, year } => {
            let res = load_yearly(src, *kind, year).map_err(|e| {
                loge!("Load: {} {} failed: {}", kind, year, e);
                e.to_string()
            });
            Outcome::Yearly { kind: *kind, year: year.clone(), result: res }
        }
    }
}

/// `year` must be one of the historique years.
pub fn check_year(years: &[String], year: &str) -> Result<()> {
    if years.iter().any(|y| y == year) {
        Ok(())
    } else {
        Err(LoadError::UnknownYear { year: s!(year) })
    }
}
