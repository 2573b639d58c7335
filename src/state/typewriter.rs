//! Typewriter effect for the hero subtitle

use std::time::{Duration, Instant};

const TYPE_DELAY: Duration = Duration::from_millis(100);
const DELETE_DELAY: Duration = Duration::from_millis(50);
const HOLD_DELAY: Duration = Duration::from_millis(2000);
const NEXT_DELAY: Duration = Duration::from_millis(500);

/// Types each text out, holds it, deletes it, then moves on to the next
#[derive(Debug, Clone)]
pub struct Typewriter {
    texts: Vec<String>,
    text_index: usize,
    char_index: usize,
    deleting: bool,
    display: String,
    next_at: Instant,
}

impl Typewriter {
    pub fn new<I, S>(texts: I, start: Instant) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            texts: texts.into_iter().map(Into::into).collect(),
            text_index: 0,
            char_index: 0,
            deleting: false,
            display: String::new(),
            next_at: start,
        }
    }

    /// Text currently shown
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Run every step that is due by `now`
    pub fn tick(&mut self, now: Instant) {
        if self.texts.is_empty() {
            return;
        }
        while self.next_at <= now {
            let delay = self.step();
            self.next_at += delay;
        }
    }

    /// Advance one character and return the delay before the next step
    fn step(&mut self) -> Duration {
        let full = &self.texts[self.text_index];
        let len = full.chars().count();

        let shown = if self.deleting {
            self.char_index.saturating_sub(1)
        } else {
            (self.char_index + 1).min(len)
        };
        self.display = full.chars().take(shown).collect();

        let mut delay = if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            DELETE_DELAY
        } else {
            self.char_index += 1;
            TYPE_DELAY
        };

        if !self.deleting && self.char_index >= len {
            self.deleting = true;
            delay = HOLD_DELAY;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
            delay = NEXT_DELAY;
        }

        delay
    }
}
