//! Button component for TUI

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Columns a button occupies for `label` (brackets and padding included)
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Build an inline `[ label ]` button
pub fn button(label: &str, is_selected: bool, is_enabled: bool) -> Span<'static> {
    let style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    Span::styled(format!("[ {label} ]"), style)
}

/// Lay out buttons left to right from `start`, separated by `gap` columns.
///
/// Returns the spans (gaps included) and each button's `[start, end)` columns.
pub fn button_row<T: Copy>(
    start: u16,
    gap: u16,
    buttons: impl IntoIterator<Item = (T, &'static str, bool)>,
) -> (Vec<Span<'static>>, Vec<(T, u16, u16)>) {
    let mut spans = Vec::new();
    let mut spots = Vec::new();
    let mut col = start;

    for (i, (target, label, is_selected)) in buttons.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" ".repeat(gap as usize)));
            col += gap;
        }
        let width = button_width(label);
        spans.push(button(label, is_selected, true));
        spots.push((target, col, col + width));
        col += width;
    }

    (spans, spots)
}
