/// Column widths for an aligned text table.
///
/// Widths are computed once from the header and every row, then each line is
/// rendered on demand so callers can interleave detail lines between rows.
#[derive(Clone, Debug)]
pub struct TableLayout<'h> {
    headers: &'h [&'h str],
    widths: Vec<usize>,
}

impl<'h> TableLayout<'h> {
    #[must_use]
    pub fn new(headers: &'h [&'h str], rows: &[Vec<String>], max_width: Option<usize>) -> Self {
        let mut widths: Vec<usize> = headers
            .iter()
            .enumerate()
            .map(|(index, header)| {
                rows.iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(header.len())
                    .max(MIN_WIDTH)
            })
            .collect();

        fit_widths(&mut widths, headers, max_width);
        Self { headers, widths }
    }

    #[must_use]
    pub fn header_line(&self) -> String {
        self.headers
            .iter()
            .zip(self.widths.iter())
            .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }

    #[must_use]
    pub fn divider(&self) -> String {
        let separators = self.widths.len().saturating_sub(1) * SEPARATOR.len();
        "-".repeat(self.widths.iter().sum::<usize>() + separators)
    }

    #[must_use]
    pub fn row_line(&self, row: &[String]) -> String {
        self.widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                format_cell(&truncated, *width, numeric)
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR)
    }
}

const MIN_WIDTH: usize = 5;
const SEPARATOR: &str = "  ";

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        // Shrink the widest column that is still above its floor.
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].len().max(MIN_WIDTH);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
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
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_table(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
        let layout = TableLayout::new(headers, rows, max_width);
        let mut lines = Vec::with_capacity(2 + rows.len());
        lines.push(layout.header_line());
        lines.push(layout.divider());
        lines.extend(rows.iter().map(|row| layout.row_line(row)));
        lines.join("\n")
    }

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["name", "grade", "attempts"];
        let rows = vec![
            vec!["Ra".to_string(), "V3".to_string(), "2".to_string()],
            vec![
                "Separate Reality".to_string(),
                "5.11d".to_string(),
                "14".to_string(),
            ],
        ];

        let table = render_table(&headers, &rows, None);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("name"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2].chars().count(), lines[3].chars().count());
        assert!(lines[2].ends_with(" 2"), "numbers are right-aligned: {:?}", lines[2]);
    }

    #[test]
    fn narrow_terminal_truncates_widest_column() {
        let headers = ["name", "grade"];
        let rows = vec![vec!["a very long climb name indeed".to_string(), "V1".to_string()]];

        let table = render_table(&headers, &rows, Some(20));
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 20);
        assert!(row.contains('…'));
    }

    #[test]
    fn non_ascii_cells_pad_by_character() {
        let headers = ["location"];
        let rows = vec![vec!["Céüse".to_string()], vec!["Rifle".to_string()]];
        let layout = TableLayout::new(&headers, &rows, None);
        assert_eq!(
            layout.row_line(&rows[0]).chars().count(),
            layout.row_line(&rows[1]).chars().count()
        );
    }
}
