//! About section with tabs for skills, experience and education

use super::components::button_row;
use super::page::{paragraph, PageBuilder, PAD};
use crate::app::App;
use crate::content::{TimelineItem, ABOUT_TEXT, EDUCATION, EXPERIENCE};
use crate::state::{AboutTab, HotspotTarget, Section, SkillBar};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::time::Instant;

/// Widest skill bar, in cells
const MAX_BAR_WIDTH: u16 = 40;

fn indent() -> Span<'static> {
    Span::raw(" ".repeat(PAD as usize))
}

fn bar_line(bar: &SkillBar, width: u16, now: Instant) -> Line<'static> {
    let cells = width.saturating_sub(PAD * 2 + 8).min(MAX_BAR_WIDTH) as usize;
    let percent = bar.width(now);
    let filled = ((percent / 100.0 * cells as f32).round() as usize).min(cells);

    Line::from(vec![
        indent(),
        Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
        Span::styled("░".repeat(cells - filled), Style::default().fg(Color::DarkGray)),
        Span::raw(format!(" {:>3}%", percent.round() as u8)),
    ])
}

fn timeline_lines(item: &TimelineItem) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            indent(),
            Span::styled(item.period, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            indent(),
            Span::styled(item.title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" · "),
            Span::styled(item.place, Style::default().fg(Color::Gray)),
        ]),
        Line::default(),
    ]
}

pub fn build(page: &mut PageBuilder, app: &App) {
    page.blank();
    page.section(Section::About);
    page.heading("About Me");

    let text = paragraph(ABOUT_TEXT, page.width, Style::default());
    page.reveal("about:intro", text);
    page.blank();

    let (mut spans, spots) = button_row(
        PAD,
        1,
        AboutTab::ALL
            .iter()
            .map(|tab| (*tab, tab.label(), app.state.tabs.is_active(*tab))),
    );
    spans.insert(0, indent());
    page.push_clickable(
        Line::from(spans),
        spots
            .into_iter()
            .map(|(tab, start, end)| (HotspotTarget::Tab(tab), start, end)),
    );
    page.blank();

    match app.state.tabs.active() {
        AboutTab::Skills => {
            for bar in app.state.skills.bars() {
                page.reveal(
                    format!("skill:{}", bar.name),
                    vec![Line::from(vec![indent(), Span::raw(bar.name)])],
                );
                page.skill_row();
                page.push(bar_line(bar, page.width, page.now));
            }
        }
        AboutTab::Experience => {
            for item in EXPERIENCE {
                page.reveal(format!("experience:{}", item.title), timeline_lines(item));
            }
        }
        AboutTab::Education => {
            for item in EDUCATION {
                page.reveal(format!("education:{}", item.title), timeline_lines(item));
            }
        }
    }
}
