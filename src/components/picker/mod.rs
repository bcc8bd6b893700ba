//! Pickers for teams, seasons and matchdays.
//!
//! Both components share [`PickerState`] for filtering and selection and
//! close on outside clicks through the shared dismiss listener.

mod list_picker;
pub mod state;
mod team_picker;

pub use list_picker::ListPicker;
pub use state::{PickerEntry, PickerState};
pub use team_picker::TeamPicker;
