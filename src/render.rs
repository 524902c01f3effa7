use crate::types::{Repository, Tracked};
use chrono::{DateTime, Duration, Utc};
use console::{measure_text_width, Style};
use std::io::{self, Write};

// Column layout, matching a tab writer with minwidth 4 and padding 2.
const MIN_WIDTH: usize = 4;
const PADDING: usize = 2;

pub const PULLS_HEADER: [&str; 5] = [
    "PULL REQUEST",
    "LAST UPDATED",
    "CONTRIBUTOR",
    "MILESTONE",
    "TITLE",
];
pub const ISSUES_HEADER: [&str; 5] = ["ISSUE", "LAST UPDATED", "CONTRIBUTOR", "MILESTONE", "TITLE"];

/// Presentation attribute attached to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Plain,
    Dim,
    Danger,
}

impl Highlight {
    fn style(self) -> Style {
        match self {
            Highlight::Plain => Style::new(),
            Highlight::Dim => Style::new().color256(250),
            Highlight::Danger => Style::new().red(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub highlight: Highlight,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlight: Highlight::Plain,
        }
    }

    pub fn new(text: impl Into<String>, highlight: Highlight) -> Self {
        Self {
            text: text.into(),
            highlight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn plain<S: AsRef<str>>(texts: &[S]) -> Self {
        Self {
            cells: texts.iter().map(|t| Cell::plain(t.as_ref())).collect(),
        }
    }
}

/// Formats an elapsed duration the way `docker ps` does, e.g. "About an hour".
pub fn human_duration(d: Duration) -> String {
    let seconds = d.num_seconds();
    if seconds < 1 {
        return "Less than a second".to_string();
    }
    if seconds < 60 {
        return format!("{} seconds", seconds);
    }
    let minutes = d.num_minutes();
    if minutes == 1 {
        return "About a minute".to_string();
    }
    if minutes < 60 {
        return format!("{} minutes", minutes);
    }
    let hours = d.num_hours();
    if hours == 1 {
        return "About an hour".to_string();
    }
    if hours < 48 {
        return format!("{} hours", hours);
    }
    format!("{} days", hours / 24)
}

fn milestone_cell<T: Tracked>(item: &T, now: DateTime<Utc>) -> Cell {
    match item.milestone() {
        Some(m) if m.is_overdue(now) => Cell::new(m.title.as_str(), Highlight::Danger),
        Some(m) => Cell::new(m.title.as_str(), Highlight::Dim),
        None => Cell::new("", Highlight::Dim),
    }
}

/// Builds the `org/name#number | updated | author | milestone | title` row.
pub fn render_row<T: Tracked>(repo: &Repository, item: &T, now: DateTime<Utc>) -> Row {
    Row {
        cells: vec![
            Cell::plain(format!("{}#{}", repo, item.number())),
            Cell::plain(human_duration(now - item.updated_at())),
            Cell::plain(item.author_login().unwrap_or_default()),
            milestone_cell(item, now),
            Cell::plain(item.title()),
        ],
    }
}

pub fn repo_row(repo: &Repository) -> Row {
    Row::plain(&[repo.to_string(), repo.description.clone().unwrap_or_default()])
}

/// Buffers rows and writes them with left-aligned, space-padded columns.
#[derive(Debug, Clone)]
pub struct Table {
    rows: Vec<Row>,
    colored: bool,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Colours are enabled when stdout is a colour-capable terminal.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            colored: console::colors_enabled(),
        }
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn extend(&mut self, rows: impl IntoIterator<Item = Row>) {
        self.rows.extend(rows);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // The last cell of a row is never padded, so it does not widen its column.
    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows {
            let padded = row.cells.len().saturating_sub(1);
            for (i, cell) in row.cells.iter().take(padded).enumerate() {
                let w = measure_text_width(&cell.text).max(MIN_WIDTH) + PADDING;
                if i >= widths.len() {
                    widths.push(w);
                } else {
                    widths[i] = widths[i].max(w);
                }
            }
        }
        widths
    }

    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let widths = self.column_widths();
        for row in &self.rows {
            let last = row.cells.len().saturating_sub(1);
            for (i, cell) in row.cells.iter().enumerate() {
                if self.colored {
                    let styled = cell.highlight.style().force_styling(true);
                    write!(out, "{}", styled.apply_to(&cell.text))?;
                } else {
                    write!(out, "{}", cell.text)?;
                }
                if i < last {
                    let fill = widths[i] - measure_text_width(&cell.text);
                    write!(out, "{:fill$}", "", fill = fill)?;
                }
            }
            writeln!(out)?;
        }
        out.flush()
    }
}
