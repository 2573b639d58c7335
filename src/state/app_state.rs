//! Application state definitions

use super::nav::{back_to_top_visible, NavState, Section};
use super::page_layout::PageLayout;
use super::particles::{ParticleField, PARTICLE_COUNT};
use super::projects::ProjectGallery;
use super::reveal::{HeroEntrance, RevealTracker};
use super::skills::SkillBars;
use super::tabs::TabState;
use super::typewriter::Typewriter;
use crate::content;
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of queued error messages
const MAX_ERRORS: usize = 5;

/// What keyboard input currently drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Scrolling and navigating the page
    #[default]
    Browse,
    /// Typing into the contact form
    EditForm,
}

/// Main application state
pub struct AppState {
    pub mode: Mode,
    /// Page scroll offset in rows
    pub scroll: u16,
    pub nav: NavState,
    pub tabs: TabState,
    pub skills: SkillBars,
    pub gallery: ProjectGallery,
    pub reveal: RevealTracker,
    pub hero: HeroEntrance,
    pub particles: ParticleField,
    pub typewriter: Typewriter,
    /// Geometry of the last rendered page
    pub layout: PageLayout,
    /// When the page started (drives particle motion)
    pub started_at: Instant,
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(now: Instant) -> Self {
        Self {
            mode: Mode::Browse,
            scroll: 0,
            nav: NavState::default(),
            tabs: TabState::default(),
            skills: SkillBars::new(content::SKILLS),
            gallery: ProjectGallery::new(content::PROJECTS),
            reveal: RevealTracker::default(),
            hero: HeroEntrance::default(),
            particles: ParticleField::generate(&mut rand::thread_rng(), PARTICLE_COUNT),
            typewriter: Typewriter::new(content::TITLES.iter().copied(), now),
            layout: PageLayout::default(),
            started_at: now,
            errors: VecDeque::new(),
        }
    }

    /// Scroll down, clamped to the page
    pub fn scroll_down(&mut self, rows: u16, viewport_height: u16) {
        let max = self.layout.max_scroll(viewport_height);
        self.scroll = self.scroll.saturating_add(rows).min(max);
    }

    /// Scroll up
    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Scroll so that `section` sits at the viewport top
    pub fn go_to(&mut self, section: Section, viewport_height: u16) {
        if let Some(row) = self.nav.select(section, &self.layout.sections) {
            self.scroll = row.min(self.layout.max_scroll(viewport_height));
        }
    }

    pub fn back_to_top_visible(&self) -> bool {
        back_to_top_visible(self.scroll)
    }

    /// Mark page items inside the viewport as seen
    pub fn observe_viewport(&mut self, viewport_height: u16, now: Instant) {
        self.reveal
            .observe(&self.layout.reveal_items, self.scroll, viewport_height, now);
        self.skills
            .observe(&self.layout.skill_rows, self.scroll, viewport_height, now);
    }

    /// Queue an error for display in the status bar
    pub fn push_error(&mut self, message: String) {
        if self.errors.len() == MAX_ERRORS {
            self.errors.pop_front();
        }
        self.errors.push_back(message);
    }

    /// Most recent error
    pub fn current_error(&self) -> Option<&str> {
        self.errors.back().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_back();
    }
}
