//! Page document builder
//!
//! Sections append lines to one tall document. While doing so they record
//! where each section starts, where reveal items and skill bars sit, and
//! which spans are clickable. The run loop stores that geometry so scroll
//! and mouse handling work against what was actually drawn.

use super::{about, contact, hero, projects};
use crate::app::App;
use crate::state::{Hotspot, HotspotTarget, PageLayout, RevealTracker, Section, SectionOffsets};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use std::time::Instant;

/// Left margin of page content
pub const PAD: u16 = 2;

/// A rendered page and its geometry
pub struct Page {
    pub lines: Vec<Line<'static>>,
    pub layout: PageLayout,
}

pub struct PageBuilder<'a> {
    lines: Vec<Line<'static>>,
    sections: Vec<(Section, u16)>,
    layout: PageLayout,
    reveal: &'a RevealTracker,
    pub now: Instant,
    pub width: u16,
}

impl<'a> PageBuilder<'a> {
    pub fn new(width: u16, reveal: &'a RevealTracker, now: Instant) -> Self {
        Self {
            lines: Vec::new(),
            sections: Vec::new(),
            layout: PageLayout::default(),
            reveal,
            now,
            width,
        }
    }

    /// Page row the next line will land on
    pub fn row(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    pub fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    /// Push a line with clickable `[start, end)` column spans
    pub fn push_clickable(
        &mut self,
        line: impl Into<Line<'static>>,
        spots: impl IntoIterator<Item = (HotspotTarget, u16, u16)>,
    ) {
        let row = self.row();
        self.layout
            .hotspots
            .extend(spots.into_iter().map(|(target, col_start, col_end)| Hotspot {
                row,
                col_start,
                col_end,
                target,
            }));
        self.push(line);
    }

    pub fn blank(&mut self) {
        self.push(Line::default());
    }

    /// Mark the start of a section
    pub fn section(&mut self, section: Section) {
        self.sections.push((section, self.row()));
    }

    /// Section title with an underline; fades in like other reveal items
    pub fn heading(&mut self, title: &str) {
        let pad = " ".repeat(PAD as usize);
        let title_line = Line::from(vec![
            Span::raw(pad.clone()),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let underline = Line::from(vec![
            Span::raw(pad),
            Span::styled(
                "─".repeat(title.chars().count()),
                Style::default().fg(Color::Blue),
            ),
        ]);
        self.reveal(format!("heading:{title}"), vec![title_line, underline]);
        self.blank();
    }

    /// A block that fades in once scrolled into view; hidden blocks keep
    /// their height so the page does not jump. `id` must be unique on the page.
    pub fn reveal(&mut self, id: impl Into<String>, lines: Vec<Line<'static>>) {
        let id = id.into();
        let visible = self.reveal.is_visible(&id, self.now);
        self.layout.reveal_items.push((id, self.row()));

        if visible {
            self.lines.extend(lines);
        } else {
            self.lines.extend(lines.iter().map(|_| Line::default()));
        }
    }

    /// Record the row of the next skill bar
    pub fn skill_row(&mut self) {
        let row = self.row();
        self.layout.skill_rows.push(row);
    }

    pub fn finish(mut self) -> Page {
        self.layout.total_height = self.row();
        self.layout.sections = SectionOffsets::new(self.sections);
        Page {
            lines: self.lines,
            layout: self.layout,
        }
    }
}

/// Greedy word wrap to `width` columns
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrapped paragraph lines indented by the page margin
pub fn paragraph(text: &str, width: u16, style: Style) -> Vec<Line<'static>> {
    let pad = " ".repeat(PAD as usize);
    wrap(text, width.saturating_sub(PAD * 2) as usize)
        .into_iter()
        .map(|line| Line::from(vec![Span::raw(pad.clone()), Span::styled(line, style)]))
        .collect()
}

/// Build the whole page for the given width
pub fn build(app: &App, width: u16, now: Instant) -> Page {
    let mut page = PageBuilder::new(width, &app.state.reveal, now);

    hero::build(&mut page, app);
    about::build(&mut page, app);
    projects::build(&mut page, app);
    contact::build(&mut page, app);

    page.blank();
    page.push(
        Line::from(Span::styled(
            "Built with ratatui · thanks for stopping by",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    );
    page.blank();

    page.finish()
}
