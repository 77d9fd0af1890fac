use anyhow::Error;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::models::Chapter;

/// Style applied to verses named in the address.
pub(crate) fn highlight_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Yellow)
}

/// Build the text of a chapter: a heading, then one line per verse numbered by
/// position. Verses listed in `highlighted` get the highlight style.
pub(crate) fn verse_lines(
    book_name: &str,
    chapter: &Chapter,
    highlighted: &[u32],
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(chapter.verses.len() + 2);
    lines.push(Line::from(Span::styled(
        format!("{book_name} {}", chapter.number),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    for (number, text) in (1u32..).zip(&chapter.verses) {
        let number_span = Span::styled(
            format!("{number}. "),
            Style::default().add_modifier(Modifier::BOLD),
        );
        let line = Line::from(vec![number_span, Span::raw(text.clone())]);
        if highlighted.contains(&number) {
            lines.push(line.style(highlight_style()));
        } else {
            lines.push(line);
        }
    }

    lines
}

/// Rows each line occupies once word-wrapped to `width`. Blank lines still
/// take one row.
pub(crate) fn wrapped_heights(lines: &[Line<'static>], width: u16) -> Vec<usize> {
    lines
        .iter()
        .map(|line| {
            Paragraph::new(line.clone())
                .wrap(Wrap { trim: false })
                .line_count(width)
                .max(1)
        })
        .collect()
}

/// Style markdown source line by line. Headings are bold, fenced code is
/// dimmed, everything else passes through untouched.
pub(crate) fn markdown_lines(body: &str) -> Vec<Line<'static>> {
    let mut in_code = false;
    body.lines()
        .map(|line| {
            if line.trim_start().starts_with("```") {
                in_code = !in_code;
                return Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            if in_code {
                return Line::from(Span::styled(
                    line.to_string(),
                    Style::default().fg(Color::Gray),
                ));
            }
            let trimmed = line.trim_start_matches('#');
            if trimmed.len() < line.len() && trimmed.starts_with(' ') {
                Line::from(Span::styled(
                    trimmed.trim().to_string(),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(line.to_string())
            }
        })
        .collect()
}

/// Compress sorted verse numbers into the `1-3,5` form for status messages.
pub(crate) fn verse_range_label(verses: &[u32]) -> String {
    let mut parts: Vec<String> = Vec::new();
    let mut iter = verses.iter().copied().peekable();
    while let Some(start) = iter.next() {
        let mut end = start;
        while iter.peek() == Some(&(end + 1)) {
            end += 1;
            iter.next();
        }
        if start == end {
            parts.push(start.to_string());
        } else {
            parts.push(format!("{start}-{end}"));
        }
    }
    parts.join(",")
}

/// Produce a rectangle centered within `area` that spans the requested percent
/// of the width and height. Used for modal dialogs.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(horizontal[1]);

    vertical[1]
}

/// Extract the most relevant error message from a chained error.
pub(crate) fn surface_error(err: &Error) -> String {
    err.chain()
        .last()
        .map(|cause| cause.to_string())
        .unwrap_or_else(|| err.to_string())
}
