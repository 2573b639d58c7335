//! About section tab switcher

/// Tabs in the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AboutTab {
    #[default]
    Skills,
    Experience,
    Education,
}

impl AboutTab {
    pub const ALL: [AboutTab; 3] = [AboutTab::Skills, AboutTab::Experience, AboutTab::Education];

    pub fn label(self) -> &'static str {
        match self {
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Education => "Education",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Skills => Self::Experience,
            Self::Experience => Self::Education,
            Self::Education => Self::Skills,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Skills => Self::Education,
            Self::Experience => Self::Skills,
            Self::Education => Self::Experience,
        }
    }
}

/// Exactly one tab is active at a time
#[derive(Debug, Clone, Copy, Default)]
pub struct TabState {
    active: AboutTab,
}

impl TabState {
    pub fn active(&self) -> AboutTab {
        self.active
    }

    pub fn is_active(&self, tab: AboutTab) -> bool {
        self.active == tab
    }

    /// Activate `tab`, deactivating every other one
    pub fn open(&mut self, tab: AboutTab) {
        self.active = tab;
    }

    pub fn next(&mut self) {
        self.active = self.active.next();
    }

    pub fn prev(&mut self) {
        self.active = self.active.prev();
    }
}
