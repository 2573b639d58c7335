//! Layout components (navbar, menu, status bar)

use crate::app::App;
use crate::content::OWNER_NAME;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{is_mobile, Mode, Section, NAVBAR_HEIGHT, STATUS_BAR_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Hamburger button shown instead of links on narrow terminals
const MENU_BUTTON: &str = " ≡ ";
/// Width of the dropdown menu (borders included)
const MENU_WIDTH: u16 = 16;
const BACK_TO_TOP: &str = " ↑ Top ";

/// What a click on the navbar row landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarHit {
    Link(Section),
    Menu,
}

/// Split the screen into navbar, page viewport and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),     // Navbar
            Constraint::Min(0),                    // Page
            Constraint::Length(STATUS_BAR_HEIGHT), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

fn link_text(section: Section) -> String {
    format!(" {} ", section.label())
}

/// Columns of each navbar link, right-aligned with one space of margin
fn link_spans(width: u16) -> Vec<(Section, u16, u16)> {
    let total: u16 = Section::ALL
        .iter()
        .map(|s| link_text(*s).chars().count() as u16)
        .sum();
    let mut col = width.saturating_sub(total + 1);

    Section::ALL
        .iter()
        .map(|section| {
            let len = link_text(*section).chars().count() as u16;
            let span = (*section, col, col + len);
            col += len;
            span
        })
        .collect()
}

fn menu_button_span(width: u16) -> (u16, u16) {
    let len = MENU_BUTTON.chars().count() as u16;
    let start = width.saturating_sub(len + 1);
    (start, start + len)
}

/// Resolve a click on the navbar row
pub fn navbar_hit(width: u16, row: u16, col: u16) -> Option<NavbarHit> {
    if row >= NAVBAR_HEIGHT {
        return None;
    }
    if is_mobile(width) {
        let (start, end) = menu_button_span(width);
        return (col >= start && col < end).then_some(NavbarHit::Menu);
    }
    link_spans(width)
        .into_iter()
        .find(|(_, start, end)| col >= *start && col < *end)
        .map(|(section, _, _)| NavbarHit::Link(section))
}

fn menu_area(width: u16) -> Rect {
    Rect {
        x: width.saturating_sub(MENU_WIDTH),
        y: NAVBAR_HEIGHT,
        width: MENU_WIDTH.min(width),
        height: Section::ALL.len() as u16 + 2,
    }
}

/// Resolve a click inside the open dropdown menu
pub fn menu_hit(width: u16, row: u16, col: u16) -> Option<Section> {
    let area = menu_area(width);
    if col <= area.x || col >= (area.x + area.width).saturating_sub(1) {
        return None;
    }
    // First item sits below the top border
    let index = row.checked_sub(area.y + 1)? as usize;
    Section::ALL.get(index).copied()
}

fn back_to_top_area(width: u16, height: u16) -> Rect {
    let len = BACK_TO_TOP.chars().count() as u16;
    Rect {
        x: width.saturating_sub(len + 1),
        y: height.saturating_sub(STATUS_BAR_HEIGHT + 1),
        width: len,
        height: 1,
    }
}

/// Whether a click landed on the back-to-top button
pub fn back_to_top_hit(width: u16, height: u16, row: u16, col: u16) -> bool {
    let area = back_to_top_area(width, height);
    row == area.y && col >= area.x && col < area.x + area.width
}

/// Draw the navbar with the active link highlighted
pub fn draw_navbar(frame: &mut Frame, area: Rect, app: &App) {
    let bar_style = Style::default().bg(Color::Black);
    frame.render_widget(Paragraph::new("").style(bar_style), area);

    let brand = Paragraph::new(Line::from(Span::styled(
        format!(" {OWNER_NAME} "),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(brand, area);

    if is_mobile(area.width) {
        let (start, end) = menu_button_span(area.width);
        let style = if app.state.nav.menu_open {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let button_area = Rect {
            x: area.x + start,
            y: area.y,
            width: end - start,
            height: 1,
        }
        .intersection(area);
        frame.render_widget(Paragraph::new(MENU_BUTTON).style(style), button_area);
        return;
    }

    for (section, start, end) in link_spans(area.width) {
        let style = if section == app.state.nav.active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        let link_area = Rect {
            x: area.x + start,
            y: area.y,
            width: end - start,
            height: 1,
        }
        .intersection(area);
        frame.render_widget(Paragraph::new(link_text(section)).style(style), link_area);
    }
}

/// Draw the dropdown menu when it is open on a narrow terminal
pub fn draw_menu(frame: &mut Frame, app: &App) {
    let width = frame.area().width;
    if !app.state.nav.menu_open || !is_mobile(width) {
        return;
    }

    // Short terminals get a clipped menu
    let area = menu_area(width).intersection(frame.area());
    if area.is_empty() {
        return;
    }
    let lines: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let style = if *section == app.state.nav.active {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!(" {} {}", i + 1, section.label()), style))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the back-to-top button once the page is scrolled far enough
pub fn draw_back_to_top(frame: &mut Frame, app: &App) {
    if !app.state.back_to_top_visible() {
        return;
    }
    let size = frame.area();
    let area = back_to_top_area(size.width, size.height).intersection(size);
    if area.is_empty() {
        return;
    }
    let button = Paragraph::new(BACK_TO_TOP).style(Style::default().fg(Color::Black).bg(Color::Cyan));
    frame.render_widget(button, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    if let Some(error) = app.state.current_error() {
        spans.push(Span::styled(
            format!(" ✗ {error} "),
            Style::default().fg(Color::Red),
        ));
        spans.push(Span::raw("| "));
    }

    spans.push(Span::styled(
        get_mode_hints(app),
        Style::default().fg(Color::Gray),
    ));

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the current mode
fn get_mode_hints(app: &App) -> String {
    if app.in_loader() {
        return " Press any key to skip".to_string();
    }
    match app.state.mode {
        Mode::Browse => {
            let mut hints =
                " j/k:scroll  1-4:jump  [/]:tab  f:filter  c:contact  y:copy email".to_string();
            if app.state.back_to_top_visible() {
                hints.push_str("  t:top");
            }
            hints.push_str("  q:quit");
            hints
        }
        Mode::EditForm => {
            let mut hints = format!(" Tab:next  ←/→:subject  {SUBMIT_SHORTCUT}:send  Esc:done");
            if app.contact.state().has_errors() {
                hints.push_str("  · fix the fields marked ✗");
            }
            hints
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FolioConfig;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_links_are_right_aligned() {
        let spans = link_spans(100);
        let (_, _, end) = spans.last().copied().unwrap();
        assert_eq!(end, 99);
        // Links are contiguous and in section order
        for pair in spans.windows(2) {
            assert_eq!(pair[0].2, pair[1].1);
        }
        let sections: Vec<Section> = spans.iter().map(|(s, _, _)| *s).collect();
        assert_eq!(sections, Section::ALL.to_vec());
    }

    #[test]
    fn test_navbar_hit_on_link() {
        let (section, start, _) = link_spans(100)[2];
        assert_eq!(navbar_hit(100, 0, start), Some(NavbarHit::Link(section)));
        assert_eq!(navbar_hit(100, 1, start), None);
        assert_eq!(navbar_hit(100, 0, 0), None);
    }

    #[test]
    fn test_navbar_hit_on_mobile_menu_button() {
        let (start, _) = menu_button_span(60);
        assert_eq!(navbar_hit(60, 0, start), Some(NavbarHit::Menu));
        // Links are hidden on narrow terminals
        let (_, link_start, _) = link_spans(60)[0];
        assert_eq!(navbar_hit(60, 0, link_start), None);
    }

    #[test]
    fn test_menu_hit_items() {
        let area = menu_area(60);
        let col = area.x + 2;
        assert_eq!(menu_hit(60, area.y, col), None); // top border
        assert_eq!(menu_hit(60, area.y + 1, col), Some(Section::Home));
        assert_eq!(menu_hit(60, area.y + 4, col), Some(Section::Contact));
        assert_eq!(menu_hit(60, area.y + 5, col), None); // bottom border
        assert_eq!(menu_hit(60, area.y + 1, 0), None);
    }

    #[test]
    fn test_back_to_top_hit() {
        let area = back_to_top_area(100, 24);
        assert_eq!(area.y, 22);
        assert!(back_to_top_hit(100, 24, 22, area.x));
        assert!(!back_to_top_hit(100, 24, 21, area.x));
        assert!(!back_to_top_hit(100, 24, 22, area.x - 1));
    }

    #[test]
    fn test_menu_hit_zero_width() {
        assert_eq!(menu_hit(0, 2, 0), None);
        assert_eq!(menu_hit(1, 2, 0), None);
    }

    #[test]
    fn test_open_menu_is_clipped_on_short_terminal() {
        let mut app = App::new(&FolioConfig::default()).unwrap();
        app.state.nav.menu_open = true;
        let mut terminal = Terminal::new(TestBackend::new(60, 4)).unwrap();

        terminal
            .draw(|frame| {
                draw_menu(frame, &app);
                draw_back_to_top(frame, &app);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let area = menu_area(60);
        assert_eq!(buffer[(area.x, area.y)].symbol(), "┌");
        // First item still fits above the cut
        assert_eq!(buffer[(area.x + 2, area.y + 1)].symbol(), "1");
    }

    #[test]
    fn test_navbar_draws_on_tiny_width() {
        let app = App::new(&FolioConfig::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(2, 3)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                let (navbar, _, status) = create_layout(area);
                draw_navbar(frame, navbar, &app);
                draw_status_bar(frame, status, &app);
            })
            .unwrap();
    }
}
