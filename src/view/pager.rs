// src/view/pager.rs
use std::sync::Arc;

use crate::loader::HistoriqueData;
use crate::table::{ColumnWindow, TableModel};

/// Paged historique: the loaded data plus which page of years is visible.
/// Moves return a new value; the data itself is shared, never copied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pager {
    data: Arc<HistoriqueData>,
    window_start: usize,
    page_size: usize,
}

impl Pager {
    pub fn new(data: HistoriqueData, page_size: usize) -> Self {
        Self { data: Arc::new(data), window_start: 0, page_size: page_size.max(1) }
    }

    pub fn window_start(&self) -> usize { self.window_start }

    /// Last valid start: the final page is full unless there are fewer
    /// years than one page.
    fn max_start(&self) -> usize {
        self.data.years.len().saturating_sub(self.page_size)
    }

    pub fn can_prev(&self) -> bool { self.window_start > 0 }
    pub fn can_next(&self) -> bool { self.window_start < self.max_start() }

    pub fn prev(&self) -> Self {
        Self { window_start: self.window_start.saturating_sub(self.page_size), ..self.clone() }
    }

    pub fn next(&self) -> Self {
        let start = (self.window_start + self.page_size).min(self.max_start());
        Self { window_start: start, ..self.clone() }
    }

    /// Where `steps` presses of Next from the first page land.
    pub fn skip(&self, steps: usize) -> Self {
        let start = steps.saturating_mul(self.page_size).min(self.max_start());
        Self { window_start: start, ..self.clone() }
    }

    pub fn window(&self) -> ColumnWindow {
        ColumnWindow::page(self.window_start, self.page_size, self.data.years.len())
    }

    /// `"<first>-<last>"` of the visible years, empty with no years.
    pub fn range_label(&self) -> String {
        let win = self.window();
        let years = &self.data.years;
        match (years.get(win.start), win.end.checked_sub(1).and_then(|i| years.get(i))) {
            (Some(first), Some(last)) if !win.is_empty() => join!(first, "-", last),
            _ => s!(),
        }
    }

    pub fn table(&self) -> TableModel {
        self.data.page(self.window())
    }
}
