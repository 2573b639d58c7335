//! Contact section: details and the contact form

use super::components::{button, button_width};
use super::page::{PageBuilder, PAD};
use crate::app::App;
use crate::state::{BannerKind, Field, FieldKind, HotspotTarget, Mode, Section};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Widest input box, in cells
const MAX_INPUT_WIDTH: u16 = 60;
/// Rows shown for the message field
const MESSAGE_ROWS: usize = 4;

const SUBMIT_LABEL: &str = "Send Message";
const SUBMITTING_LABEL: &str = "Sending...";

fn indent() -> Span<'static> {
    Span::raw(" ".repeat(PAD as usize))
}

fn input_width(page_width: u16) -> u16 {
    page_width.saturating_sub(PAD * 2).min(MAX_INPUT_WIDTH)
}

/// Inner text rows of a field: one for text and choice fields, several for
/// the message (the tail is kept when it overflows)
fn input_rows(field: &Field, focused: bool) -> Vec<String> {
    let mut text = field.display_value();
    if focused && !matches!(field.kind, FieldKind::Choice(_)) {
        text.push('▌');
    }

    match field.kind {
        FieldKind::Multiline => {
            let mut rows: Vec<String> = text.split('\n').map(str::to_string).collect();
            if rows.len() > MESSAGE_ROWS {
                rows.drain(..rows.len() - MESSAGE_ROWS);
            }
            rows.resize(MESSAGE_ROWS, String::new());
            rows
        }
        _ => vec![text],
    }
}

/// Clip or pad text to exactly `width` cells, keeping the end visible
fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        text.chars().skip(len - width).collect()
    } else {
        format!("{text}{}", " ".repeat(width - len))
    }
}

fn field_block(page: &mut PageBuilder, field: &Field, focused: bool, required: bool) {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut label = vec![indent(), Span::styled(field.id.label(), label_style)];
    if required {
        label.push(Span::styled(" *", Style::default().fg(Color::Red)));
    }
    page.push(Line::from(label));

    let border_color = if field.is_invalid() {
        Color::Red
    } else if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let border = Style::default().fg(border_color);
    let width = input_width(page.width);
    let inner = width.saturating_sub(4) as usize;
    let spot = [(HotspotTarget::Field(field.id), PAD, PAD + width)];

    for text in input_rows(field, focused) {
        let value_style = if field.value.is_empty() && !focused {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        page.push_clickable(
            Line::from(vec![
                indent(),
                Span::styled("│ ", border),
                Span::styled(fit(&text, inner), value_style),
                Span::styled(" │", border),
            ]),
            spot,
        );
    }

    match &field.error {
        Some(error) => page.push(Line::from(vec![
            indent(),
            Span::styled(format!("✗ {error}"), Style::default().fg(Color::Red)),
        ])),
        None => page.blank(),
    }
}

pub fn build(page: &mut PageBuilder, app: &App) {
    page.blank();
    page.section(Section::Contact);
    page.heading("Get In Touch");

    page.reveal(
        "contact:intro",
        vec![
            Line::from(vec![
                indent(),
                Span::raw("Have a project in mind? Send a message or write to "),
                Span::styled(app.contact_email.clone(), Style::default().fg(Color::Cyan)),
            ]),
            Line::from(vec![
                indent(),
                Span::styled("(press y to copy the address)", Style::default().fg(Color::DarkGray)),
            ]),
        ],
    );
    page.blank();

    let form = app.contact.state();
    let editing = app.state.mode == Mode::EditForm;

    for field in form.fields() {
        let focused = editing && form.focused() == Some(field.id);
        field_block(page, field, focused, app.contact.is_required(field.id));
    }

    let label = if form.loading {
        SUBMITTING_LABEL
    } else {
        SUBMIT_LABEL
    };
    let submit = button(label, editing && form.submit_focused(), form.submit_enabled);
    page.push_clickable(
        Line::from(vec![indent(), submit]),
        [(HotspotTarget::Submit, PAD, PAD + button_width(label))],
    );
    page.blank();

    if let Some(banner) = &form.banner {
        let (icon, color) = match banner.kind {
            BannerKind::Success => ("✓", Color::Green),
            BannerKind::Error => ("✗", Color::Red),
        };
        page.push(Line::from(vec![
            indent(),
            Span::styled(
                format!("{icon} {}", banner.message),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
    } else {
        page.blank();
    }
}
