// src/specs/mod.rs
//! # Per-view table specs
//!
//! The three standings views share one pipeline (`csv::parse` →
//! `csv::filter_valid_rows` → optional `table::sort_by_rank` →
//! `table::render`). What differs between them is data, not code, and
//! that data lives here:
//!
//! - **where** the CSV lives (`path_tmpl`, `{year}` substituted),
//! - **which rows** count (`min_cells`),
//! - **whether** rows are re-sorted by rank,
//! - **how** cells are written out and whether year columns are paged.
//!
//! Add a view by adding a `ViewSpec` and a `ViewKind` variant.

use crate::config::consts::MIN_CELLS;
use crate::config::options::ViewKind;
use crate::table::CellFormat;

pub struct ViewSpec {
    pub kind: ViewKind,
    pub title: &'static str,
    /// Relative to the source root; `{year}` is replaced for yearly views.
    pub path_tmpl: &'static str,
    pub min_cells: usize,
    pub sort_by_rank: bool,
    /// Year columns are shown one page at a time.
    pub paged: bool,
    pub cells: CellFormat,
}

pub static HISTORIQUE: ViewSpec = ViewSpec {
    kind: ViewKind::Historique,
    title: "Classement historique",
    path_tmpl: "data/historique.csv",
    min_cells: MIN_CELLS,
    sort_by_rank: true,
    paged: true,
    cells: CellFormat::Numeric,
};

pub static QUALIFICATIONS: ViewSpec = ViewSpec {
    kind: ViewKind::Qualifications,
    title: "Qualifications",
    path_tmpl: "data/{year}/qualifications.csv",
    min_cells: MIN_CELLS,
    sort_by_rank: false,
    paged: false,
    cells: CellFormat::Raw,
};

pub static DEUXIEME_PILOTE: ViewSpec = ViewSpec {
    kind: ViewKind::DeuxiemePilote,
    title: "Deuxième pilote",
    path_tmpl: "data/{year}/deuxieme_pilote.csv",
    min_cells: MIN_CELLS,
    sort_by_rank: false,
    paged: false,
    cells: CellFormat::Raw,
};

pub static SPECS: &[&ViewSpec] = &[&HISTORIQUE, &QUALIFICATIONS, &DEUXIEME_PILOTE];

pub fn spec_for(kind: ViewKind) -> &'static ViewSpec {
    match kind {
        ViewKind::Historique => &HISTORIQUE,
        ViewKind::Qualifications => &QUALIFICATIONS,
        ViewKind::DeuxiemePilote => &DEUXIEME_PILOTE,
    }
}

/// Relative path of the CSV for `spec`, with `{year}` filled in.
pub fn build_path(spec: &ViewSpec, year: Option<&str>) -> String {
    match year {
        Some(y) => spec.path_tmpl.replace("{year}", y),
        None => s!(spec.path_tmpl),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_follow_data_layout() {
        assert_eq!(build_path(&HISTORIQUE, None), "data/historique.csv");
        assert_eq!(build_path(&HISTORIQUE, Some("2023")), "data/historique.csv");
        assert_eq!(build_path(&QUALIFICATIONS, Some("2023")), "data/2023/qualifications.csv");
        assert_eq!(build_path(&DEUXIEME_PILOTE, Some("2022")), "data/2022/deuxieme_pilote.csv");
    }

    #[test]
    fn every_kind_has_its_spec() {
        for k in ViewKind::ALL {
            assert_eq!(spec_for(k).kind, k);
            assert_eq!(k.is_yearly(), spec_for(k).path_tmpl.contains("{year}"));
        }
        assert_eq!(SPECS.len(), ViewKind::ALL.len());
    }
}
