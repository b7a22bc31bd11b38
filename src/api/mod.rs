//! Client for the mood analysis backend.

mod models;
mod mood;

pub use models::*;
pub use mood::*;
