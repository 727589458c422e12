//! Plain-text table used for the per-note summary after a tagging run.
//! Widths are measured on visible characters so colored cells line up.

/// Render rows under a header. When `max_width` is set, the first column is
/// shortened with an ellipsis so each line fits.
pub fn render_table(
    headers: &[&str],
    rows: &[Vec<String>],
    max_width: Option<usize>,
) -> String {
    if headers.is_empty() {
        return String::new();
    }
    let cols = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| display_len(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(cols) {
            widths[i] = widths[i].max(display_len(cell));
        }
    }

    let separators = 3 * cols.saturating_sub(1);
    if let Some(max) = max_width {
        let others: usize = widths.iter().skip(1).sum();
        let room = max.saturating_sub(others + separators);
        widths[0] = widths[0].min(room.max(display_len(headers[0])));
    }

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let header_line = format_row(&header_cells, &widths);
    let mut out = String::new();
    out.push_str(&header_line);
    out.push('\n');
    out.push_str(&"-".repeat(display_len(&header_line)));
    for row in rows {
        let mut cells = row.clone();
        if let Some(first) = cells.first_mut() {
            if display_len(first) > widths[0] {
                *first = truncate_front(first, widths[0]);
            }
        }
        out.push('\n');
        out.push_str(format_row(&cells, &widths).trim_end());
    }
    out
}

fn format_row(row: &[String], widths: &[usize]) -> String {
    row.iter()
        .zip(widths.iter())
        .map(|(cell, width)| pad_field(cell, *width))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Right-pad a field based on visible length (ignoring ANSI codes).
pub fn pad_field(display: &str, target: usize) -> String {
    let mut out = display.to_string();
    out.push_str(&" ".repeat(target.saturating_sub(display_len(display))));
    out
}

/// Keep the end of a path, which holds the file name, and mark the cut with
/// a leading ellipsis. Expects uncolored text.
pub fn truncate_front(text: &str, max_width: usize) -> String {
    let len = text.chars().count();
    if len <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let keep = max_width - 1;
    let tail: String = text.chars().skip(len - keep).collect();
    format!("…{tail}")
}

/// Compute visible length of a string, ignoring ANSI escape sequences.
pub fn display_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
            continue;
        }
        len += 1;
    }
    len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_len_ignores_ansi() {
        assert_eq!(display_len("\x1b[1mabc\x1b[0m"), 3);
        assert_eq!(display_len("héllo"), 5);
    }

    #[test]
    fn test_truncate_front_keeps_file_name() {
        assert_eq!(truncate_front("deep/folder/note.md", 8), "…note.md");
        assert_eq!(truncate_front("a.md", 8), "a.md");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let rows = vec![
            vec!["a.md".to_string(), "tagged".to_string()],
            vec!["longer.md".to_string(), "failed".to_string()],
        ];
        let out = render_table(&["Note", "Result"], &rows, None);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Note      | Result");
        assert_eq!(lines[2], "a.md      | tagged");
        assert_eq!(lines[3], "longer.md | failed");
    }

    #[test]
    fn test_render_table_respects_max_width() {
        let rows = vec![vec!["some/very/long/path/note.md".to_string(), "ok".to_string()]];
        let out = render_table(&["Note", "Result"], &rows, Some(20));
        for line in out.lines().skip(2) {
            assert!(display_len(line) <= 20, "{line}");
        }
        assert!(out.contains("note.md"));
    }
}
