//! Plain aligned tables for `--format table`.

use keynote_core::enums::{BadgeColor, ProjectStatus, WishlistPriority, WishlistStatus};
use serde::de::DeserializeOwned;

const MIN_COLUMN: usize = 6;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render `rows` under `headers`, numbers right-aligned.
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
                .fold(header.chars().count().max(MIN_COLUMN), usize::max)
        })
        .collect();
    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false, None))
        .collect::<Vec<_>>()
        .join(GAP);

    let divider = "-".repeat(header_line.chars().count());
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);

    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let text = clip(row.get(index).map_or("-", String::as_str), *width);
                let badge = if options.color { badge_for(&text) } else { None };
                pad(&text, *width, looks_numeric(&text), badge)
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line);
    }
    lines.join("\n")
}

/// Narrow the widest column one character at a time until the row fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let gaps = widths.len().saturating_sub(1) * GAP.len();
    while widths.iter().sum::<usize>() + gaps > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].len().max(MIN_COLUMN))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(text: &str, width: usize, right_align: bool, badge: Option<BadgeColor>) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    let shown = badge.map_or_else(
        || text.to_string(),
        |color| format!("\u{1b}[{}m{text}\u{1b}[0m", color.ansi_code()),
    );
    if right_align {
        format!("{fill}{shown}")
    } else {
        format!("{shown}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn parse_badge<T: DeserializeOwned>(value: &str) -> Option<T> {
    serde_json::from_value(serde_json::Value::String(value.to_string())).ok()
}

/// Badge color for a cell holding a wishlist status, project status, or
/// priority value.
pub(crate) fn badge_for(value: &str) -> Option<BadgeColor> {
    parse_badge::<WishlistStatus>(value)
        .map(WishlistStatus::badge)
        .or_else(|| parse_badge::<ProjectStatus>(value).map(ProjectStatus::badge))
        .or_else(|| parse_badge::<WishlistPriority>(value).map(WishlistPriority::badge))
}
