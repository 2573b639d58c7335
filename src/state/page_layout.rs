//! Page geometry for scrolling, reveals and mouse handling
//!
//! The page is rendered as one tall document and shown through a viewport.
//!
//! ```text
//! Row 0:        Navbar (1 row)
//! Row 1..h-1:   Page viewport (scrolled)
//! Row h-1:      Status bar (1 row)
//! ```

use super::nav::SectionOffsets;
use super::projects::ProjectFilter;
use super::tabs::AboutTab;
use super::ContactField;

/// Height of the navbar
pub const NAVBAR_HEIGHT: u16 = 1;
/// Height of the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Something clickable inside the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotspotTarget {
    Tab(AboutTab),
    Filter(ProjectFilter),
    Field(ContactField),
    Submit,
}

/// A clickable span on one page row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotspot {
    pub row: u16,
    pub col_start: u16,
    pub col_end: u16,
    pub target: HotspotTarget,
}

impl Hotspot {
    pub fn contains(&self, row: u16, col: u16) -> bool {
        row == self.row && col >= self.col_start && col < self.col_end
    }
}

/// Geometry produced by the last page render
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub sections: SectionOffsets,
    /// Reveal item ids and their page rows, in document order
    pub reveal_items: Vec<(String, u16)>,
    /// Page rows of skill bars, in skill order
    pub skill_rows: Vec<u16>,
    pub hotspots: Vec<Hotspot>,
    pub total_height: u16,
}

impl PageLayout {
    /// Largest scroll offset that still fills the viewport
    pub fn max_scroll(&self, viewport_height: u16) -> u16 {
        self.total_height.saturating_sub(viewport_height)
    }

    /// Target under a click at a page position
    pub fn hit(&self, row: u16, col: u16) -> Option<HotspotTarget> {
        self.hotspots
            .iter()
            .find(|h| h.contains(row, col))
            .map(|h| h.target)
    }
}

/// Viewport height for a terminal of the given height
pub fn viewport_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(NAVBAR_HEIGHT + STATUS_BAR_HEIGHT)
}

/// Convert a screen row to a page row, if it falls inside the viewport
pub fn page_row(screen_row: u16, scroll: u16, terminal_height: u16) -> Option<u16> {
    if screen_row < NAVBAR_HEIGHT || screen_row >= terminal_height.saturating_sub(STATUS_BAR_HEIGHT)
    {
        return None;
    }
    Some(screen_row - NAVBAR_HEIGHT + scroll)
}
