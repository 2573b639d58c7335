//! Projects section with category filter

use super::components::button_row;
use super::page::{PageBuilder, PAD};
use crate::app::App;
use crate::content::Project;
use crate::state::{CardVisibility, HotspotTarget, ProjectFilter, Section};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn card_lines(project: &Project, fading: bool) -> Vec<Line<'static>> {
    let pad = " ".repeat(PAD as usize);
    let (title_style, tag_style, body_style) = if fading {
        let dim = Style::default().fg(Color::DarkGray);
        (dim, dim, dim)
    } else {
        (
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::Magenta),
            Style::default().fg(Color::Gray),
        )
    };

    vec![
        Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(format!("▸ {}", project.title), title_style),
            Span::styled(format!("  [{}]", project.category.label()), tag_style),
        ]),
        Line::from(vec![
            Span::raw(format!("{pad}  ")),
            Span::styled(project.summary, body_style),
        ]),
        Line::default(),
    ]
}

pub fn build(page: &mut PageBuilder, app: &App) {
    page.blank();
    page.section(Section::Projects);
    page.heading("Projects");

    let current = app.state.gallery.filter();
    let (mut spans, spots) = button_row(
        PAD,
        1,
        ProjectFilter::all()
            .into_iter()
            .map(|filter| (filter, filter.label(), filter == current)),
    );
    spans.insert(0, Span::raw(" ".repeat(PAD as usize)));
    page.push_clickable(
        Line::from(spans),
        spots
            .into_iter()
            .map(|(filter, start, end)| (HotspotTarget::Filter(filter), start, end)),
    );
    page.blank();

    for (project, visibility) in app.state.gallery.cards() {
        if visibility.in_layout() {
            let fading = matches!(visibility, CardVisibility::Hiding { .. });
            page.reveal(format!("project:{}", project.title), card_lines(project, fading));
        }
    }
}
