//! Loading screen animation state

use std::time::{Duration, Instant};

/// Animation phase for the loading screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderPhase {
    /// Blank screen before the loader text appears
    Blank,
    /// Loader text shown, progress bar empty
    Text,
    /// Progress bar filling
    Filling,
    /// Whole loader fading out
    FadeOut,
    /// Loader gone; page visible
    Complete,
}

/// Loading screen animation state
#[derive(Debug)]
pub struct LoaderState {
    /// When the loader started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: LoaderPhase,
    /// Progress bar fill, 0.0 to 1.0
    pub progress: f32,
    /// Loader opacity, 0.0 to 1.0 (drops during fade out)
    pub opacity: f32,
}

impl LoaderState {
    /// Loader text appears
    const TEXT_AT: Duration = Duration::from_millis(500);
    /// Progress bar starts filling
    const FILL_AT: Duration = Duration::from_millis(1000);
    /// Time for the bar to reach 100%
    const FILL_DURATION: Duration = Duration::from_millis(1500);
    /// Loader starts fading
    const FADE_AT: Duration = Duration::from_millis(3000);
    /// Loader removed
    const DONE_AT: Duration = Duration::from_millis(3500);

    pub fn new(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: LoaderPhase::Blank,
            progress: 0.0,
            opacity: 1.0,
        }
    }

    /// Update animation state for the given moment
    pub fn update(&mut self, now: Instant) {
        if self.phase == LoaderPhase::Complete {
            return;
        }

        let elapsed = now.saturating_duration_since(self.start_time);

        if elapsed < Self::TEXT_AT {
            self.phase = LoaderPhase::Blank;
        } else if elapsed < Self::FILL_AT {
            self.phase = LoaderPhase::Text;
        } else if elapsed < Self::FADE_AT {
            self.phase = LoaderPhase::Filling;
            let fill_elapsed = elapsed - Self::FILL_AT;
            let t = (fill_elapsed.as_secs_f32() / Self::FILL_DURATION.as_secs_f32()).min(1.0);
            self.progress = simple_easing::cubic_out(t);
        } else if elapsed < Self::DONE_AT {
            self.phase = LoaderPhase::FadeOut;
            self.progress = 1.0;
            let fade_elapsed = elapsed - Self::FADE_AT;
            let t = fade_elapsed.as_secs_f32() / (Self::DONE_AT - Self::FADE_AT).as_secs_f32();
            self.opacity = 1.0 - t.min(1.0);
        } else {
            self.complete();
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.complete();
    }

    fn complete(&mut self) {
        self.phase = LoaderPhase::Complete;
        self.progress = 1.0;
        self.opacity = 0.0;
    }

    pub fn text_visible(&self) -> bool {
        !matches!(self.phase, LoaderPhase::Blank | LoaderPhase::Complete)
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == LoaderPhase::Complete
    }
}
