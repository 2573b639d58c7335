//! Project filter and card visibility

use crate::content::{Category, Project};
use std::time::{Duration, Instant};

/// Delay before a filtered-out card leaves the layout
pub const HIDE_DELAY: Duration = Duration::from_millis(300);

/// Active project filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(Category),
}

impl ProjectFilter {
    /// Filter buttons in display order
    pub fn all() -> Vec<ProjectFilter> {
        std::iter::once(ProjectFilter::All)
            .chain(Category::ALL.into_iter().map(ProjectFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => c == category,
        }
    }
}

/// Visibility of one project card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardVisibility {
    Shown,
    /// Marked hidden; still occupies layout until the deadline
    Hiding { until: Instant },
    Hidden,
}

impl CardVisibility {
    /// Card takes up space in the layout
    pub fn in_layout(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Project cards and the filter applied to them
#[derive(Debug, Clone)]
pub struct ProjectGallery {
    projects: Vec<Project>,
    visibility: Vec<CardVisibility>,
    filter: ProjectFilter,
}

impl ProjectGallery {
    pub fn new(projects: &[Project]) -> Self {
        Self {
            projects: projects.to_vec(),
            visibility: vec![CardVisibility::Shown; projects.len()],
            filter: ProjectFilter::All,
        }
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    /// Cards with their current visibility
    pub fn cards(&self) -> impl Iterator<Item = (&Project, CardVisibility)> {
        self.projects.iter().zip(self.visibility.iter().copied())
    }

    /// Apply a filter: matching cards show at once, others fade then leave
    pub fn apply(&mut self, filter: ProjectFilter, now: Instant) {
        self.filter = filter;
        for (project, visibility) in self.projects.iter().zip(self.visibility.iter_mut()) {
            *visibility = if filter.matches(project.category) {
                CardVisibility::Shown
            } else {
                match *visibility {
                    CardVisibility::Shown => CardVisibility::Hiding {
                        until: now + HIDE_DELAY,
                    },
                    other => other,
                }
            };
        }
        tracing::debug!(filter = filter.label(), "project filter applied");
    }

    /// Move to the next filter button
    pub fn cycle(&mut self, now: Instant) {
        let filters = ProjectFilter::all();
        let current = filters.iter().position(|f| *f == self.filter).unwrap_or(0);
        let next = filters[(current + 1) % filters.len()];
        self.apply(next, now);
    }

    /// Drop cards whose hide delay has elapsed
    pub fn tick(&mut self, now: Instant) {
        for visibility in &mut self.visibility {
            if let CardVisibility::Hiding { until } = *visibility {
                if now >= until {
                    *visibility = CardVisibility::Hidden;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use pretty_assertions::assert_eq;

    fn visible_titles(gallery: &ProjectGallery) -> Vec<&'static str> {
        gallery
            .cards()
            .filter(|(_, v)| *v == CardVisibility::Shown)
            .map(|(p, _)| p.title)
            .collect()
    }

    #[test]
    fn test_filter_buttons_start_with_all() {
        let filters = ProjectFilter::all();
        assert_eq!(filters[0], ProjectFilter::All);
        assert_eq!(filters.len(), Category::ALL.len() + 1);
    }

    #[test]
    fn test_default_shows_everything() {
        let gallery = ProjectGallery::new(PROJECTS);
        assert_eq!(visible_titles(&gallery).len(), PROJECTS.len());
        assert_eq!(gallery.filter(), ProjectFilter::All);
    }

    #[test]
    fn test_non_matching_cards_hide_after_delay() {
        let t0 = Instant::now();
        let mut gallery = ProjectGallery::new(PROJECTS);
        gallery.apply(ProjectFilter::Only(Category::Apex), t0);

        assert_eq!(
            visible_titles(&gallery),
            vec!["Case Routing Engine", "Bulk Data Cleaner"]
        );
        assert!(gallery.cards().all(|(_, v)| v.in_layout()));

        gallery.tick(t0 + Duration::from_millis(299));
        assert!(gallery.cards().all(|(_, v)| v.in_layout()));

        gallery.tick(t0 + HIDE_DELAY);
        let in_layout = gallery.cards().filter(|(_, v)| v.in_layout()).count();
        assert_eq!(in_layout, 2);
    }

    #[test]
    fn test_all_restores_hidden_cards_immediately() {
        let t0 = Instant::now();
        let mut gallery = ProjectGallery::new(PROJECTS);
        gallery.apply(ProjectFilter::Only(Category::Lightning), t0);
        gallery.tick(t0 + HIDE_DELAY);

        gallery.apply(ProjectFilter::All, t0 + Duration::from_secs(1));
        assert_eq!(visible_titles(&gallery).len(), PROJECTS.len());
    }

    #[test]
    fn test_refilter_during_hide_reshows_matching() {
        let t0 = Instant::now();
        let mut gallery = ProjectGallery::new(PROJECTS);
        gallery.apply(ProjectFilter::Only(Category::Apex), t0);
        gallery.apply(
            ProjectFilter::Only(Category::Integration),
            t0 + Duration::from_millis(100),
        );
        assert_eq!(visible_titles(&gallery), vec!["ERP Order Sync"]);

        // Already-hiding cards keep their original deadline
        gallery.tick(t0 + HIDE_DELAY);
        let in_layout = gallery.cards().filter(|(_, v)| v.in_layout()).count();
        assert_eq!(in_layout, 3);
    }

    #[test]
    fn test_cycle_walks_filters_and_wraps() {
        let t0 = Instant::now();
        let mut gallery = ProjectGallery::new(PROJECTS);
        let mut seen = Vec::new();
        for _ in 0..4 {
            gallery.cycle(t0);
            seen.push(gallery.filter());
        }
        assert_eq!(
            seen,
            vec![
                ProjectFilter::Only(Category::Apex),
                ProjectFilter::Only(Category::Lightning),
                ProjectFilter::Only(Category::Integration),
                ProjectFilter::All,
            ]
        );
    }
}
