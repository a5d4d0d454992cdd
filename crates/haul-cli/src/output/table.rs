const MIN_COLUMN: usize = 4;
const SEPARATOR: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

impl TableOptions {
    /// Fit tables to `COLUMNS` when it is set to something usable.
    #[must_use]
    pub fn from_env() -> Self {
        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);
        Self { max_width }
    }
}

/// Render an aligned plain-text table. Numeric cells are right-aligned.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|text| text.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    if let Some(max_width) = options.max_width {
        shrink_to(&mut widths, max_width);
    }

    let header_line = join_cells(headers.iter().copied(), &widths, |_| false);
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push("-".repeat(header_line.chars().count()));
    lines.insert(0, header_line);
    for row in rows {
        lines.push(join_cells(row.iter().map(String::as_str), &widths, looks_numeric));
    }
    lines.join("\n")
}

fn join_cells<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    right_align: impl Fn(&str) -> bool,
) -> String {
    cells
        .zip(widths)
        .map(|(text, width)| {
            let text = truncate(text, *width);
            if right_align(text.as_str()) {
                format!("{text:>width$}")
            } else {
                format!("{text:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
        .trim_end()
        .to_string()
}

/// Narrow the widest column one character at a time until the table fits or
/// every column is at the minimum.
fn shrink_to(widths: &mut [usize], max_width: usize) {
    while total_width(widths) > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn total_width(widths: &[usize]) -> usize {
    widths.iter().sum::<usize>() + SEPARATOR.len() * widths.len().saturating_sub(1)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn looks_numeric(text: &str) -> bool {
    !text.is_empty() && text.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn columns_align_and_numbers_right_align() {
        let rows = vec![
            vec!["7".to_string(), "Acid".to_string()],
            vec!["1200".to_string(), "Sodium hydroxide".to_string()],
        ];
        let out = render_rows(&["id", "description"], &rows, TableOptions { max_width: None });
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "id    description");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "   7  Acid");
        assert_eq!(lines[3], "1200  Sodium hydroxide");
    }

    #[test]
    fn wide_tables_are_truncated_to_fit() {
        let rows = vec![vec!["x".repeat(60), "y".repeat(60)]];
        let out = render_rows(&["a", "b"], &rows, TableOptions { max_width: Some(40) });
        assert!(out.lines().all(|line| line.chars().count() <= 40));
        assert!(out.contains('…'));
    }
}
