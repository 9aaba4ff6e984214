// src/view/yearly.rs
use std::sync::Arc;

use crate::table::TableModel;

/// Lifecycle of a season-scoped table (qualifications, deuxième pilote).
///
/// `NoYearSelected → Loading(y) → Loaded(y) | Error(y)`, and from any
/// state back to `Loading(y')` on a new selection. `Error` is display-only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum YearState {
    #[default]
    NoYearSelected,
    Loading { year: String },
    Loaded { year: String, table: Arc<TableModel> },
    Error { year: String, message: String },
}

impl YearState {
    pub fn year(&self) -> Option<&str> {
        match self {
            YearState::NoYearSelected => None,
            YearState::Loading { year }
            | YearState::Loaded { year, .. }
            | YearState::Error { year, .. } => Some(year.as_str()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, YearState::Loading { .. })
    }

    pub fn table(&self) -> Option<&TableModel> {
        match self {
            YearState::Loaded { table, .. } => Some(table.as_ref()),
            _ => None,
        }
    }

    /// Start loading `year`, whatever we were showing.
    pub fn select(&self, year: &str) -> Self {
        YearState::Loading { year: s!(year) }
    }

    /// Settle a fetch. A result for a year we are no longer loading is
    /// stale and leaves the state untouched.
    pub fn resolve(&self, year: &str, result: Result<TableModel, String>) -> Self {
        match self {
            YearState::Loading { year: want } if want == year => match result {
                Ok(table) => YearState::Loaded { year: s!(year), table: Arc::new(table) },
                Err(message) => YearState::Error { year: s!(year), message },
            },
            _ => {
                logd!("View: stale result for {} ignored", year);
                self.clone()
            }
        }
    }
}
