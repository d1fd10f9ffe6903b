use dcc_core::responses::NOT_AVAILABLE;

const MIN_COLUMN_WIDTH: usize = 6;

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// One titled block of table output.
#[derive(Clone, Debug, Default)]
pub struct TableSection {
    pub title: Option<String>,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Printed instead of the table when `rows` is empty.
    pub empty: Option<String>,
}

impl TableSection {
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: Some(title.into()),
            headers: headers.iter().map(|h| (*h).to_string()).collect(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    #[must_use]
    pub fn or_empty(mut self, message: Option<String>) -> Self {
        self.empty = message;
        self
    }
}

/// Render sections one after another, separated by a blank line.
#[must_use]
pub fn render_sections(sections: &[TableSection], options: TableOptions) -> String {
    sections
        .iter()
        .map(|section| render_section(section, options))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_section(section: &TableSection, options: TableOptions) -> String {
    let mut out = String::new();
    if let Some(title) = &section.title {
        out.push_str(title);
        out.push('\n');
    }
    if section.rows.is_empty() {
        out.push_str(section.empty.as_deref().unwrap_or("(no rows)"));
    } else {
        let headers: Vec<&str> = section.headers.iter().map(String::as_str).collect();
        out.push_str(&render_entity_table(&headers, &section.rows, options));
    }
    out
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let padded = pad_cell(&truncated, *width, looks_numeric(&truncated));
                if options.color {
                    colorize_value(&truncated, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns until the table fits `max_width`.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ',' | '%'))
}

fn pad_cell(value: &str, width: usize, right_align: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if right_align {
        format!("{}{value}", " ".repeat(pad))
    } else {
        format!("{value}{}", " ".repeat(pad))
    }
}

/// Color an already padded cell by its unpadded value.
fn colorize_value(value: &str, padded: String) -> String {
    let code = match value {
        "Yes" => Some("32"),
        "No" => Some("33"),
        NOT_AVAILABLE | "Unspecified" | "Not specified" => Some("2"),
        v if v.starts_with("error:") => Some("31"),
        _ => None,
    };

    match code {
        Some(code) => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
        None => padded,
    }
}
