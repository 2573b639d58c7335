//! Loading screen with a filling progress bar

use crate::content::OWNER_NAME;
use crate::state::LoaderState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BAR_WIDTH: u16 = 30;

/// Text color for the current opacity; the screen dims while fading out
fn fade_color(opacity: f32, color: Color) -> Color {
    if opacity > 0.6 {
        color
    } else if opacity > 0.2 {
        Color::Gray
    } else {
        Color::DarkGray
    }
}

fn progress_bar(progress: f32) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH as usize);
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(BAR_WIDTH as usize - filled)
    )
}

/// Draw the loading screen
pub fn draw(frame: &mut Frame, area: Rect, loader: &LoaderState) {
    if !loader.text_visible() {
        return;
    }

    let text_color = fade_color(loader.opacity, Color::Cyan);
    let bar_color = fade_color(loader.opacity, Color::Blue);

    let lines = vec![
        Line::from(Span::styled(
            format!("Loading {OWNER_NAME}'s portfolio"),
            Style::default().fg(text_color),
        ))
        .centered(),
        Line::default(),
        Line::from(Span::styled(
            progress_bar(loader.progress),
            Style::default().fg(bar_color),
        ))
        .centered(),
    ];

    let height = lines.len() as u16;
    let content_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: area.width,
        height: height.min(area.height),
    };
    frame.render_widget(Paragraph::new(lines), content_area);

    // "Press any key to skip" hint at bottom
    let hint = "Press any key to skip";
    let hint_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(2),
        width: area.width,
        height: 1,
    }
    .intersection(area);
    let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))).centered();
    frame.render_widget(Paragraph::new(hint_line), hint_area);
}
