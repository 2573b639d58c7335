//! Hero section: particles, entrance sequence and typewriter title

use super::page::PageBuilder;
use crate::app::App;
use crate::content::{HERO_BUTTONS, HERO_DESCRIPTION, OWNER_NAME, SOCIAL_LINKS, TITLES};
use crate::state::{ParticleFrame, Section};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Rows in the hero
const HERO_HEIGHT: usize = 14;
/// Rows a particle rises at the top of its float
const FLOAT_ROWS: f32 = 2.0;

/// Hero rows holding entrance elements, in entrance order
const ELEMENT_ROWS: [usize; 6] = [3, 4, 6, 8, 10, 11];

/// Particle cells for one frame: `grid[row][col]` holds the brightest opacity
fn particle_grid(
    frames: impl Iterator<Item = ParticleFrame>,
    width: usize,
) -> Vec<Vec<Option<f32>>> {
    let mut grid = vec![vec![None; width]; HERO_HEIGHT];
    if width == 0 {
        return grid;
    }

    for frame in frames {
        let col = ((frame.x * (width - 1) as f32).round() as usize).min(width - 1);
        let base = frame.y * (HERO_HEIGHT - 1) as f32;
        let row = ((base - frame.lift * FLOAT_ROWS).round().max(0.0) as usize).min(HERO_HEIGHT - 1);
        let cell = &mut grid[row][col];
        *cell = Some(cell.map_or(frame.opacity, |o: f32| o.max(frame.opacity)));
    }
    grid
}

fn particle_line(cells: &[Option<f32>]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut blank = 0;

    for cell in cells {
        match cell {
            None => blank += 1,
            Some(opacity) => {
                if blank > 0 {
                    spans.push(Span::raw(" ".repeat(blank)));
                    blank = 0;
                }
                let (glyph, color) = if *opacity > 0.8 {
                    ("•", Color::Cyan)
                } else {
                    ("·", Color::DarkGray)
                };
                spans.push(Span::styled(glyph, Style::default().fg(color)));
            }
        }
    }
    Line::from(spans)
}

fn element_line(index: usize, app: &App) -> Line<'static> {
    match index {
        0 => Line::from(Span::styled("Hi, I'm", Style::default().fg(Color::Gray))).centered(),
        1 => Line::from(Span::styled(
            OWNER_NAME,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        2 => {
            // Pad to the longest title so the line does not shift while typing
            let longest = TITLES.iter().map(|t| t.chars().count()).max().unwrap_or(0);
            let text = app.state.typewriter.display();
            let padding = longest.saturating_sub(text.chars().count());
            let cursor = if app.state.typewriter.is_deleting() {
                Color::DarkGray
            } else {
                Color::Cyan
            };
            Line::from(vec![
                Span::styled(text.to_string(), Style::default().fg(Color::Cyan)),
                Span::styled("▌", Style::default().fg(cursor)),
                Span::raw(" ".repeat(padding)),
            ])
            .centered()
        }
        3 => Line::from(Span::raw(HERO_DESCRIPTION)).centered(),
        4 => Line::from(Span::styled(HERO_BUTTONS, Style::default().fg(Color::Cyan))).centered(),
        _ => Line::from(Span::styled(SOCIAL_LINKS, Style::default().fg(Color::DarkGray))).centered(),
    }
}

pub fn build(page: &mut PageBuilder, app: &App) {
    page.section(Section::Home);

    let elapsed = page.now.saturating_duration_since(app.state.started_at);
    let grid = particle_grid(app.state.particles.frames(elapsed), page.width as usize);

    for (row, cells) in grid.iter().enumerate() {
        let element = ELEMENT_ROWS.iter().position(|r| *r == row);
        match element {
            Some(index) if app.state.hero.is_visible(index, page.now) => {
                page.push(element_line(index, app));
            }
            Some(_) => page.blank(),
            None => page.push(particle_line(cells)),
        }
    }
}
