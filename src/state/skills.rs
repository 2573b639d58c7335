//! Skill bar fill animation

use crate::content::Skill;
use std::time::{Duration, Instant};

/// Time for a bar to grow to its target width
const FILL_DURATION: Duration = Duration::from_millis(1000);

/// One skill bar; starts empty and fills once it has been seen
#[derive(Debug, Clone)]
pub struct SkillBar {
    pub name: &'static str,
    pub target: u8,
    started_at: Option<Instant>,
}

impl SkillBar {
    pub fn new(skill: &Skill) -> Self {
        Self {
            name: skill.name,
            target: skill.percent.min(100),
            started_at: None,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start filling; later calls are ignored
    pub fn trigger(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Current width as a percentage (0.0 to `target`)
    pub fn width(&self, now: Instant) -> f32 {
        let Some(started) = self.started_at else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(started);
        let t = (elapsed.as_secs_f32() / FILL_DURATION.as_secs_f32()).min(1.0);
        simple_easing::cubic_out(t) * f32::from(self.target)
    }
}

/// All skill bars on the page
#[derive(Debug, Clone, Default)]
pub struct SkillBars {
    bars: Vec<SkillBar>,
}

impl SkillBars {
    pub fn new(skills: &[Skill]) -> Self {
        Self {
            bars: skills.iter().map(SkillBar::new).collect(),
        }
    }

    pub fn bars(&self) -> &[SkillBar] {
        &self.bars
    }

    /// Trigger bars at least half inside the viewport.
    ///
    /// `rows` are the page rows of each bar (bars are one row tall).
    pub fn observe(&mut self, rows: &[u16], viewport_top: u16, viewport_height: u16, now: Instant) {
        let viewport_end = viewport_top.saturating_add(viewport_height);
        for (bar, row) in self.bars.iter_mut().zip(rows) {
            if !bar.is_triggered() && *row >= viewport_top && *row < viewport_end {
                tracing::trace!(skill = bar.name, "skill bar revealed");
                bar.trigger(now);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKILLS: &[Skill] = &[
        Skill { name: "Apex", percent: 90 },
        Skill { name: "LWC", percent: 60 },
    ];

    #[test]
    fn test_untriggered_bar_is_empty() {
        let bar = SkillBar::new(&SKILLS[0]);
        assert_eq!(bar.width(Instant::now()), 0.0);
    }

    #[test]
    fn test_bar_fills_to_target() {
        let t0 = Instant::now();
        let mut bar = SkillBar::new(&SKILLS[0]);
        bar.trigger(t0);
        assert_eq!(bar.width(t0), 0.0);
        let halfway = bar.width(t0 + Duration::from_millis(500));
        assert!(halfway > 45.0 && halfway < 90.0);
        assert_eq!(bar.width(t0 + FILL_DURATION), 90.0);
        assert_eq!(bar.width(t0 + Duration::from_secs(10)), 90.0);
    }

    #[test]
    fn test_trigger_happens_only_once() {
        let t0 = Instant::now();
        let mut bar = SkillBar::new(&SKILLS[0]);
        bar.trigger(t0);
        bar.trigger(t0 + Duration::from_secs(5));
        assert_eq!(bar.width(t0 + FILL_DURATION), 90.0);
    }

    #[test]
    fn test_target_is_capped_at_hundred() {
        let bar = SkillBar::new(&Skill { name: "x", percent: 150 });
        assert_eq!(bar.target, 100);
    }

    #[test]
    fn test_observe_triggers_visible_bars_only() {
        let t0 = Instant::now();
        let mut bars = SkillBars::new(SKILLS);
        bars.observe(&[30, 60], 20, 20, t0);
        assert!(bars.bars()[0].is_triggered());
        assert!(!bars.bars()[1].is_triggered());

        bars.observe(&[30, 60], 50, 20, t0 + Duration::from_secs(1));
        assert!(bars.bars()[1].is_triggered());
        // First bar keeps its original start
        assert_eq!(bars.bars()[0].width(t0 + FILL_DURATION), 90.0);
    }
}
