pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{render_view, render_views, write_views};
pub use types::{RenderedView, ViewKind, ViewSet};
