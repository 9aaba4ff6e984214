// src/table.rs
//! Display-ready tables built from parsed CSV rows.
//!
//! Everything here is a pure transformation: rows in, `TableModel` out.
//! Drawing the model (egui table, text grid) belongs to the front-ends.
//!
//! Column layout assumed by the rank sort and the numeric cell format:
//! `0 = name, 1 = rank, 2 = points, 3.. = one column per period (year)`.

use std::cmp::Ordering;

use crate::config::consts::{FIXED_COLUMNS, POINTS_COLUMN, RANK_COLUMN};

/// Header + body, ready to draw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableModel {
    pub header: Vec<String>,
    pub body: Vec<Vec<String>>,
}

impl TableModel {
    pub fn with(header: Vec<String>, body: Vec<Vec<String>>) -> Self {
        Self { header, body }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn ncols(&self) -> usize {
        if !self.header.is_empty() {
            return self.header.len();
        }
        self.body.iter().map(|r| r.len()).max().unwrap_or(0)
    }

    pub fn nrows(&self) -> usize {
        self.body.len()
    }

    /// Space-padded grid, one line per row, header underlined with dashes.
    pub fn to_text(&self) -> String {
        let ncols = self.ncols();
        let mut widths = vec![0usize; ncols];
        for row in std::iter::once(&self.header).chain(self.body.iter()) {
            for (ci, cell) in row.iter().enumerate().take(ncols) {
                widths[ci] = widths[ci].max(cell.chars().count());
            }
        }

        let fmt_row = |row: &[String]| -> String {
            let mut line = s!();
            for (ci, w) in widths.iter().enumerate() {
                let cell = row.get(ci).map(|c| c.as_str()).unwrap_or("");
                if ci > 0 { line.push_str("  "); }
                line.push_str(cell);
                let pad = w.saturating_sub(cell.chars().count());
                line.extend(std::iter::repeat_n(' ', pad));
            }
            s!(line.trim_end())
        };

        let mut out = s!();
        if !self.header.is_empty() {
            out.push_str(&fmt_row(&self.header));
            out.push('\n');
            let rule_len = widths.iter().sum::<usize>() + 2 * ncols.saturating_sub(1);
            out.extend(std::iter::repeat_n('-', rule_len));
            out.push('\n');
        }
        for row in &self.body {
            out.push_str(&fmt_row(row));
            out.push('\n');
        }
        out
    }
}

/// Half-open range `[start, end)` over the period columns, i.e. the
/// columns after the fixed name/rank/points block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnWindow {
    pub start: usize,
    pub end: usize,
}

impl ColumnWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end: end.max(start) }
    }

    /// The page of `size` periods starting at `start`, cut at `total`.
    pub fn page(start: usize, size: usize, total: usize) -> Self {
        let start = start.min(total);
        Self::new(start, start.saturating_add(size).min(total))
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Absolute column indices kept by this window, fixed block included.
    fn columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..FIXED_COLUMNS).chain((FIXED_COLUMNS + self.start)..(FIXED_COLUMNS + self.end))
    }
}

/// How body cells are written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellFormat {
    /// Cells verbatim.
    #[default]
    Raw,
    /// Points as integers, period values as integers with failures and
    /// zeros left blank. Name and rank verbatim.
    Numeric,
}

/// Lenient base-10 integer parse: leading whitespace, optional sign, then
/// as many digits as there are. `"25.0"` is 25, `"7 pts"` is 7, `"x1"`
/// and `""` are `None`. Values outside `i64` are `None` too.
pub fn parse_int(cell: &str) -> Option<i64> {
    let s = cell.trim_start();
    let (neg, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let n: i64 = digits[..end].parse().ok()?;
    Some(if neg { -n } else { n })
}

/// Integer value or blank.
pub fn int_or_blank(cell: &str) -> String {
    parse_int(cell).map(|n| n.to_string()).unwrap_or_default()
}

/// Integer value, blank when it fails to parse or is zero.
pub fn nonzero_int_or_blank(cell: &str) -> String {
    match parse_int(cell) {
        Some(0) | None => s!(),
        Some(n) => n.to_string(),
    }
}

fn rank_key(row: &[String]) -> Option<i64> {
    row.get(RANK_COLUMN).and_then(|c| parse_int(c))
}

/// Numeric ascending order on the rank column. Unparseable ranks compare
/// as +infinity: after every numeric rank, equal to each other.
fn cmp_rank(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable ascending sort by rank (column 1).
pub fn sort_by_rank(mut rows: Vec<Vec<String>>) -> Vec<Vec<String>> {
    rows.sort_by(|a, b| cmp_rank(rank_key(a), rank_key(b)));
    rows
}

fn format_cell(ci: usize, cell: &str, fmt: CellFormat) -> String {
    match fmt {
        CellFormat::Raw => s!(cell),
        CellFormat::Numeric if ci < POINTS_COLUMN => s!(cell),
        CellFormat::Numeric if ci == POINTS_COLUMN => int_or_blank(cell),
        CellFormat::Numeric => nonzero_int_or_blank(cell),
    }
}

/// Build the table model for `rows` under `header`.
///
/// With a window only the fixed block plus the windowed period columns
/// survive, in both header and body; cells a short row lacks come out
/// blank. Without one every cell is kept.
pub fn render(
    rows: &[Vec<String>],
    header: &[String],
    window: Option<ColumnWindow>,
    fmt: CellFormat,
) -> TableModel {
    match window {
        None => {
            let body = rows
                .iter()
                .map(|row| {
                    row.iter()
                        .enumerate()
                        .map(|(ci, cell)| format_cell(ci, cell, fmt))
                        .collect()
                })
                .collect();
            TableModel::with(header.to_vec(), body)
        }
        Some(win) => {
            let header_out = win
                .columns()
                .filter_map(|ci| header.get(ci).cloned())
                .collect::<Vec<_>>();

            // Body follows the header's width so short headers don't grow columns
            let keep = win.columns().take(header_out.len().max(FIXED_COLUMNS)).collect::<Vec<_>>();

            let body = rows
                .iter()
                .map(|row| {
                    keep.iter()
                        .map(|&ci| format_cell(ci, row.get(ci).map(|c| c.as_str()).unwrap_or(""), fmt))
                        .collect()
                })
                .collect();
            TableModel::with(header_out, body)
        }
    }
}
