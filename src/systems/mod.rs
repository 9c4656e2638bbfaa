//! Application systems
//!
//! Modular systems extracted from main.rs for better organization and testability.

mod animation;

pub use animation::{AnimationResult, AnimationSystem};
