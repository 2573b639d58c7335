//! UI module for rendering the TUI

mod about;
mod components;
mod contact;
mod hero;
pub mod layout;
mod loader;
mod page;
mod projects;

pub use page::{build as build_page, Page};

use crate::app::App;
use ratatui::{text::Line, widgets::Paragraph, Frame};

/// Main draw function; `page` is the full document from [`build_page`]
pub fn draw(frame: &mut Frame, app: &App, page: &[Line<'static>]) {
    let area = frame.area();

    if let Some(loader) = &app.loader {
        loader::draw(frame, area, loader);
        layout::draw_status_bar(frame, layout::create_layout(area).2, app);
        return;
    }

    let (navbar_area, page_area, status_area) = layout::create_layout(area);

    // Only the rows inside the viewport are handed to the paragraph
    let visible: Vec<Line> = page
        .iter()
        .skip(app.state.scroll as usize)
        .take(page_area.height as usize)
        .cloned()
        .collect();
    frame.render_widget(Paragraph::new(visible), page_area);

    layout::draw_navbar(frame, navbar_area, app);
    layout::draw_menu(frame, app);
    layout::draw_back_to_top(frame, app);
    layout::draw_status_bar(frame, status_area, app);
}
