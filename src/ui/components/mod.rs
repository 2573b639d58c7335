//! Reusable UI components

mod button;

pub use button::{button, button_row, button_width};
