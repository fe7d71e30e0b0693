//! UI state types shared by the engine and the terminal layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.

mod animation;
mod feedback;
mod options;
mod reveal;

pub use feedback::CopiedBadge;
pub use options::UiOptions;
pub use reveal::{RevealLevel, SectionReveal};
