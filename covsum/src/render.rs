//! Text rendering of report tables

use console::Style;
use covsumlib::{ReportTable, TableRow};

/// Longest file name shown before truncation
const MAX_NAME_WIDTH: usize = 60;

const COLUMN_GAP: &str = "  ";

/// Truncate a name to fit within max_len, adding ".." prefix if needed
fn truncate_name(name: &str, max_len: usize) -> String {
    let len = name.chars().count();
    if len > max_len && max_len > 2 {
        let tail: String = name.chars().skip(len - (max_len - 2)).collect();
        format!("..{}", tail)
    } else {
        name.to_string()
    }
}

/// Width of each value column: the widest of its header and every cell.
fn column_widths(table: &ReportTable) -> Vec<usize> {
    table
        .headers
        .iter()
        .skip(1)
        .enumerate()
        .map(|(i, header)| {
            table
                .rows
                .iter()
                .chain(std::iter::once(&table.footer))
                .filter_map(|row| row.values.get(i))
                .map(|v| v.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Green from 80%, yellow from 50%, red below.
fn coverage_style(cell: &str) -> Style {
    let value = cell
        .trim_end_matches('%')
        .parse::<f64>()
        .unwrap_or_default();
    if value >= 80.0 {
        Style::new().green()
    } else if value >= 50.0 {
        Style::new().yellow()
    } else {
        Style::new().red()
    }
}

fn render_line(
    label: &str,
    values: &[String],
    name_width: usize,
    widths: &[usize],
    styles: &[Option<Style>],
) -> String {
    let mut line = format!("{:<width$}", truncate_name(label, name_width), width = name_width);
    for (i, value) in values.iter().enumerate() {
        let width = widths.get(i).copied().unwrap_or(0);
        let cell = format!("{:>width$}", value, width = width);
        line.push_str(COLUMN_GAP);
        match styles.get(i).and_then(|s| s.as_ref()) {
            Some(style) => line.push_str(&style.apply_to(cell).to_string()),
            None => line.push_str(&cell),
        }
    }
    line
}

fn row_styles(table: &ReportTable, row: &TableRow, color: bool) -> Vec<Option<Style>> {
    table
        .headers
        .iter()
        .skip(1)
        .zip(&row.values)
        .map(|(header, value)| {
            (color && header.ends_with("Cover"))
                .then(|| coverage_style(value).force_styling(true))
        })
        .collect()
}

/// Render a report table as aligned text.
///
/// With `color` set, headers and the total row are bold and coverage cells are
/// colored by threshold; otherwise the output is plain text.
pub fn render_table(table: &ReportTable, color: bool) -> String {
    let name_width = table.label_width().min(MAX_NAME_WIDTH);
    let widths = column_widths(table);
    let bold = Style::new().bold().force_styling(color);
    let no_styles: Vec<Option<Style>> = Vec::new();

    let (label_header, value_headers) = match table.headers.split_first() {
        Some((first, rest)) => (first.as_str(), rest.to_vec()),
        None => ("", Vec::new()),
    };
    let header = render_line(label_header, &value_headers, name_width, &widths, &no_styles);
    let separator = "-".repeat(header.chars().count());

    let mut lines = vec![bold.apply_to(header).to_string(), separator.clone()];
    for row in &table.rows {
        let styles = row_styles(table, row, color);
        lines.push(render_line(&row.label, &row.values, name_width, &widths, &styles));
    }
    lines.push(separator);
    let footer = render_line(
        &table.footer.label,
        &table.footer.values,
        name_width,
        &widths,
        &no_styles,
    );
    lines.push(bold.apply_to(footer).to_string());

    lines.join("\n")
}
