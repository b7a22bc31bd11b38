//! The components module contains all shared components for our app.

mod app;
mod mood_form;
mod results;

pub use app::*;
pub use mood_form::*;
pub use results::*;
