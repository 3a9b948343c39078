//! Plain-text rendering of a [`TableView`].
//!
//! Produces one [`Line`] per terminal row. Each line carries a role so a
//! terminal front end can color it for the active theme without parsing the
//! text back.

use crate::text::{display_width, fit_to_width};

use super::sort::SortDirection;
use super::state::CheckState;
use super::view::{HeaderCell, TableBody, TableView};

/// What a rendered line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    Placeholder,
    Header,
    Separator,
    Row { selected: bool },
    Footer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub role: LineRole,
}

impl Line {
    fn new(text: impl Into<String>, role: LineRole) -> Self {
        Self {
            text: text.into(),
            role,
        }
    }
}

const COLUMN_SEPARATOR: &str = "│";
const LOADING_GLYPH: &str = "◌";
const EMPTY_GLYPH: &str = "∅";

pub fn checkbox_glyph(state: CheckState) -> &'static str {
    match state {
        CheckState::Checked => "[x]",
        CheckState::Unchecked => "[ ]",
        CheckState::Indeterminate => "[-]",
    }
}

fn sort_glyph(cell: &HeaderCell) -> &'static str {
    match (cell.sortable, cell.sort) {
        (false, _) => "",
        (true, None) => " ↕",
        (true, Some(SortDirection::Ascending)) => " ▲",
        (true, Some(SortDirection::Descending)) => " ▼",
    }
}

/// Render a table view to text lines.
pub fn render_lines(view: &TableView) -> Vec<Line> {
    match view {
        TableView::Loading { text } => {
            vec![Line::new(format!("{} {}", LOADING_GLYPH, text), LineRole::Placeholder)]
        }
        TableView::Empty { text } => {
            vec![Line::new(format!("{} {}", EMPTY_GLYPH, text), LineRole::Placeholder)]
        }
        TableView::Table(body) => render_body(body),
    }
}

/// Render a table view to a single string.
pub fn render_to_string(view: &TableView) -> String {
    render_lines(view)
        .into_iter()
        .map(|line| line.text)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_body(body: &TableBody) -> Vec<Line> {
    let widths = column_widths(body);
    let padding = " ".repeat(body.size.cell_padding());
    let has_checkbox = body.header.checkbox.is_some();

    let join = |checkbox: Option<&str>, cells: Vec<String>| -> String {
        let mut parts = Vec::with_capacity(cells.len() + 1);
        if has_checkbox {
            parts.push(format!("{}{}{}", padding, checkbox.unwrap_or("   "), padding));
        }
        parts.extend(cells.into_iter().map(|c| format!("{}{}{}", padding, c, padding)));
        parts.join(COLUMN_SEPARATOR)
    };

    let mut lines = Vec::with_capacity(body.rows.len() + 4);

    let header_cells = body
        .header
        .cells
        .iter()
        .zip(&widths)
        .map(|(cell, &width)| {
            let title = format!("{}{}", cell.title, sort_glyph(cell));
            fit_to_width(&title, width, cell.align)
        })
        .collect();
    let header_text = join(body.header.checkbox.map(checkbox_glyph), header_cells);
    let rule = "─".repeat(display_width(&header_text));
    lines.push(Line::new(header_text, LineRole::Header));
    lines.push(Line::new(rule.clone(), LineRole::Separator));

    for row in &body.rows {
        let cells = row
            .cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| fit_to_width(&cell.text, width, cell.align))
            .collect();
        let checkbox = row.checkbox.map(|selected| {
            checkbox_glyph(if selected {
                CheckState::Checked
            } else {
                CheckState::Unchecked
            })
        });
        lines.push(Line::new(
            join(checkbox, cells),
            LineRole::Row {
                selected: row.is_selected(),
            },
        ));
    }

    if let Some(footer) = &body.footer {
        lines.push(Line::new(rule, LineRole::Separator));
        let previous = if footer.previous_enabled { "‹ Previous" } else { "  Previous" };
        let next = if footer.next_enabled { "Next ›" } else { "Next  " };
        lines.push(Line::new(footer.window.to_string(), LineRole::Footer));
        lines.push(Line::new(
            format!("{}  {}  {}", previous, footer.page_label(), next),
            LineRole::Footer,
        ));
    }

    lines
}

/// Width of each column: the fixed width when given, otherwise the widest of
/// the header (with its sort glyph) and the cells.
fn column_widths(body: &TableBody) -> Vec<usize> {
    body.header
        .cells
        .iter()
        .enumerate()
        .map(|(i, cell)| match cell.width {
            Some(width) => width as usize,
            None => {
                let header = display_width(&cell.title) + display_width(sort_glyph(cell));
                body.rows
                    .iter()
                    .filter_map(|row| row.cells.get(i))
                    .map(|c| display_width(&c.text))
                    .fold(header, usize::max)
            }
        })
        .collect()
}
