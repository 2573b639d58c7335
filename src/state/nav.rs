//! Navigation: sections, active link, mobile menu and back-to-top

/// Rows below the viewport top used to decide which section is current
pub const SCROLL_SPY_OFFSET: u16 = 3;
/// Widths at or below this collapse the navbar behind the menu toggle
pub const MOBILE_BREAKPOINT: u16 = 76;
/// Scroll distance after which the back-to-top control appears
pub const BACK_TO_TOP_THRESHOLD: u16 = 12;

/// Page sections, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Section for a 1-based navbar shortcut
    pub fn from_shortcut(c: char) -> Option<Self> {
        let index = c.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(index).copied()
    }
}

/// Start row of each section within the rendered page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionOffsets(Vec<(Section, u16)>);

impl SectionOffsets {
    pub fn new(offsets: Vec<(Section, u16)>) -> Self {
        Self(offsets)
    }

    pub fn start_of(&self, section: Section) -> Option<u16> {
        self.0.iter().find(|(s, _)| *s == section).map(|(_, row)| *row)
    }

    /// Section whose span `[start, next start)` contains `row`
    pub fn section_at(&self, row: u16) -> Option<Section> {
        self.0
            .iter()
            .rev()
            .find(|(_, start)| row >= *start)
            .map(|(section, _)| *section)
    }
}

/// Navbar state
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// A navbar link was chosen: close the menu, mark it active and return
    /// the scroll position that brings its section to the top
    pub fn select(&mut self, section: Section, offsets: &SectionOffsets) -> Option<u16> {
        let row = offsets.start_of(section)?;
        self.close_menu();
        self.active = section;
        Some(row)
    }

    /// Scroll spy: highlight the section under the viewport top
    pub fn update_from_scroll(&mut self, scroll: u16, offsets: &SectionOffsets) {
        if let Some(section) = offsets.section_at(scroll.saturating_add(SCROLL_SPY_OFFSET)) {
            self.active = section;
        }
    }

    /// Close the menu once the window is wide enough for the full navbar
    pub fn on_resize(&mut self, width: u16) {
        if !is_mobile(width) {
            self.close_menu();
        }
    }
}

pub fn is_mobile(width: u16) -> bool {
    width <= MOBILE_BREAKPOINT
}

pub fn back_to_top_visible(scroll: u16) -> bool {
    scroll > BACK_TO_TOP_THRESHOLD
}
