#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Cell text that marks the best-priced listing.
pub const BEST_MARKER: &str = "best price";

/// Render a simple aligned table for string rows.
///
/// Widths are measured in chars so currency symbols do not skew alignment.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
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
                .max(6)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string();

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    let truncated = truncate_text(&value, *width);
                    let numeric = looks_numeric(&truncated);
                    let padded = format_cell(&truncated, *width, numeric);
                    if options.color {
                        colorize(&truncated, padded)
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].chars().count().max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] = widths[idx].saturating_sub(1);
        total = widths.iter().sum::<usize>() + separators;
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

/// Digits with grouping, optionally behind a currency prefix (`₹78,999`).
fn looks_numeric(value: &str) -> bool {
    let digits = value
        .trim()
        .trim_start_matches(|ch: char| !ch.is_ascii_digit() && ch != '-');
    !digits.is_empty()
        && digits
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '.' | ','))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

/// Wrap an already padded cell in ANSI color based on its content.
fn colorize(value: &str, padded: String) -> String {
    if value == BEST_MARKER {
        format!("\u{1b}[32m{padded}\u{1b}[0m")
    } else {
        padded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn aligns_mixed_widths() {
        let headers = ["platform", "price", "best"];
        let rows = vec![
            vec!["Amazon".to_string(), "₹79,900".to_string(), String::new()],
            vec![
                "Flipkart".to_string(),
                "₹78,999".to_string(),
                BEST_MARKER.to_string(),
            ],
        ];

        let table = render_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("platform"));
        assert!(lines[1].chars().all(|c| c == '-'));
        assert!(lines[2].contains("₹79,900"));
        assert!(lines[3].ends_with(BEST_MARKER));
        assert_eq!(
            lines[2].find("₹79,900").map(|i| lines[2][..i].chars().count()),
            lines[3].find("₹78,999").map(|i| lines[3][..i].chars().count()),
        );
    }

    #[test]
    fn divider_matches_printed_header() {
        let rows = vec![vec!["Amazon".to_string(), String::new()]];
        let table = render_table(&["platform", "best"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "platform  best");
        assert_eq!(lines[1].chars().count(), lines[0].chars().count());
    }

    #[test]
    fn shrinks_widest_column_to_fit() {
        let headers = ["platform", "link"];
        let rows = vec![vec![
            "Amazon".to_string(),
            "https://www.amazon.in/dp/B0CHX1W1XY?tag=very-long-affiliate".to_string(),
        ]];
        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        assert!(table.lines().all(|line| line.chars().count() <= 40));
        assert!(table.contains('…'));
    }

    #[test]
    fn colors_only_the_best_marker() {
        let rows = vec![
            vec!["Amazon".to_string(), String::new()],
            vec!["Flipkart".to_string(), BEST_MARKER.to_string()],
        ];
        let table = render_table(
            &["platform", "best"],
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert_eq!(table.matches("\u{1b}[32m").count(), 1);
    }

    #[test]
    fn currency_amounts_are_numeric() {
        assert!(looks_numeric("₹1,23,456"));
        assert!(looks_numeric("Rs. 499"));
        assert!(!looks_numeric("Flipkart"));
        assert!(!looks_numeric(""));
    }
}
