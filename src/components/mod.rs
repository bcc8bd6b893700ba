//! UI components shared across pages.

pub mod dismiss;
pub mod navigation;
pub mod picker;
pub mod pitch_background;
