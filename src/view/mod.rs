// src/view/mod.rs
//! Explicit view state and the reducers that move it.
//!
//! `ViewState` is a plain value. Every user event (tab click, year pick,
//! prev/next) and every settled fetch goes through a reducer that takes
//! `&self` and returns the next state, plus the fetch the caller has to
//! start, if any. Front-ends own the I/O; this module owns the rules.

mod pager;
mod yearly;

pub use pager::Pager;
pub use yearly::YearState;

use crate::config::options::ViewKind;
use crate::loader::HistoriqueData;
use crate::table::TableModel;

/// Shown on a yearly tab when the historique header lists no years.
pub const NO_YEARS: &str = "Aucune année disponible.";

/// Work a reducer asks the caller to perform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fetch {
    Historique,
    Yearly { kind: ViewKind, year: String },
}

/// A settled fetch, fed back through `ViewState::apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Historique(Result<HistoriqueData, String>),
    Yearly { kind: ViewKind, year: String, result: Result<TableModel, String> },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum HistoriqueState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Pager),
    Error(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub current: ViewKind,
    /// Selectable years, from the historique header.
    pub years: Vec<String>,
    /// Shared by both yearly tabs.
    pub selected_year: Option<String>,
    pub historique: HistoriqueState,
    pub qualifications: YearState,
    pub deuxieme_pilote: YearState,
    page_size: usize,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current: ViewKind::Historique,
            years: Vec::new(),
            selected_year: None,
            historique: HistoriqueState::NotLoaded,
            qualifications: YearState::NoYearSelected,
            deuxieme_pilote: YearState::NoYearSelected,
            page_size,
        }
    }

    pub fn yearly(&self, kind: ViewKind) -> Option<&YearState> {
        match kind {
            ViewKind::Historique => None,
            ViewKind::Qualifications => Some(&self.qualifications),
            ViewKind::DeuxiemePilote => Some(&self.deuxieme_pilote),
        }
    }

    fn with_yearly(&self, kind: ViewKind, st: YearState) -> Self {
        let mut next = self.clone();
        match kind {
            ViewKind::Historique => {}
            ViewKind::Qualifications => next.qualifications = st,
            ViewKind::DeuxiemePilote => next.deuxieme_pilote = st,
        }
        next
    }

    /// `"(2023)"` for the yearly tab title.
    pub fn year_title(&self) -> Option<String> {
        self.selected_year.as_ref().map(|y| format!("({})", y))
    }

    /// Table for the current tab, if one is ready.
    pub fn current_table(&self) -> Option<TableModel> {
        match self.current {
            ViewKind::Historique => match &self.historique {
                HistoriqueState::Loaded(p) => Some(p.table()),
                _ => None,
            },
            kind => self.yearly(kind).and_then(|s| s.table()).cloned(),
        }
    }

    /// Error message for the current tab, if its last fetch failed.
    /// A yearly tab with no years to pick from reports why the list is empty.
    pub fn current_error(&self) -> Option<&str> {
        match self.current {
            ViewKind::Historique => match &self.historique {
                HistoriqueState::Error(m) => Some(m.as_str()),
                _ => None,
            },
            kind => match (self.yearly(kind), &self.historique) {
                (Some(YearState::Error { message, .. }), _) => Some(message.as_str()),
                (_, HistoriqueState::Error(m)) if self.years.is_empty() => Some(m.as_str()),
                (_, HistoriqueState::Loaded(_)) if self.years.is_empty() => Some(NO_YEARS),
                _ => None,
            },
        }
    }

    pub fn is_loading(&self) -> bool {
        match self.current {
            ViewKind::Historique => matches!(self.historique, HistoriqueState::Loading),
            kind => self.yearly(kind).map(|s| s.is_loading()).unwrap_or(false),
        }
    }

    /* ---------------- reducers ---------------- */

    /// First load: the historique table, which also carries the year list.
    pub fn start(&self) -> (Self, Option<Fetch>) {
        let mut next = self.clone();
        next.historique = HistoriqueState::Loading;
        (next, Some(Fetch::Historique))
    }

    /// Tab click. Entering a tab always refetches its table.
    pub fn switch_tab(&self, kind: ViewKind) -> (Self, Option<Fetch>) {
        let mut next = self.clone();
        next.current = kind;

        if !kind.is_yearly() {
            next.historique = HistoriqueState::Loading;
            return (next, Some(Fetch::Historique));
        }

        match self.selected_year.clone() {
            Some(year) => {
                let st = next.yearly(kind).map(|s| s.select(&year)).unwrap_or_default();
                (next.with_yearly(kind, st), Some(Fetch::Yearly { kind, year }))
            }
            // Years not known yet; the historique result will pick one.
            None => (next, None),
        }
    }

    /// Year dropdown change. Only the visible yearly tab is refetched;
    /// the other picks the year up when entered.
    pub fn select_year(&self, year: &str) -> (Self, Option<Fetch>) {
        let mut next = self.clone();
        next.selected_year = Some(s!(year));

        let kind = self.current;
        if !kind.is_yearly() {
            return (next, None);
        }
        let st = next.yearly(kind).map(|s| s.select(year)).unwrap_or_default();
        (next.with_yearly(kind, st), Some(Fetch::Yearly { kind, year: s!(year) }))
    }

    pub fn prev_page(&self) -> Self {
        self.map_pager(Pager::prev)
    }

    pub fn next_page(&self) -> Self {
        self.map_pager(Pager::next)
    }

    fn map_pager(&self, f: impl Fn(&Pager) -> Pager) -> Self {
        let mut next = self.clone();
        if let HistoriqueState::Loaded(p) = &self.historique {
            next.historique = HistoriqueState::Loaded(f(p));
        }
        next
    }

    /// Fold a settled fetch into the state.
    pub fn apply(&self, outcome: Outcome) -> (Self, Option<Fetch>) {
        match outcome {
            Outcome::Historique(Ok(data)) => {
                let mut next = self.clone();
                next.years = data.years.clone();
                next.historique = HistoriqueState::Loaded(Pager::new(data, self.page_size));

                // Keep the selection if it still exists, else default to the first year
                let keep = next
                    .selected_year
                    .as_ref()
                    .map(|y| next.years.contains(y))
                    .unwrap_or(false);
                if !keep {
                    next.selected_year = next.years.first().cloned();
                }

                // A yearly tab opened before the years were known
                let kind = next.current;
                let waiting = next.yearly(kind).map(|s| s.year().is_none()).unwrap_or(false);
                if let (true, Some(year)) = (waiting, next.selected_year.clone()) {
                    let st = YearState::NoYearSelected.select(&year);
                    return (next.with_yearly(kind, st), Some(Fetch::Yearly { kind, year }));
                }
                (next, None)
            }
            Outcome::Historique(Err(message)) => {
                let mut next = self.clone();
                next.historique = HistoriqueState::Error(message);
                (next, None)
            }
            Outcome::Yearly { kind, year, result } => {
                let st = match self.yearly(kind) {
                    Some(s) => s.resolve(&year, result),
                    None => return (self.clone(), None),
                };
                (self.with_yearly(kind, st), None)
            }
        }
    }
}
