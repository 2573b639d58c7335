//! Application state module

mod app_state;
mod forms;
mod loader_state;
mod nav;
mod page_layout;
mod particles;
mod projects;
mod reveal;
mod skills;
mod tabs;
mod timing;
mod typewriter;

pub use app_state::*;
pub use forms::*;
pub use loader_state::*;
pub use nav::*;
pub use page_layout::*;
pub use particles::*;
pub use projects::*;
pub use reveal::*;
pub use skills::*;
pub use tabs::*;
pub use timing::*;
pub use typewriter::*;
