//! Animated pitch background.
//!
//! Renders a decorative football pitch on a full-viewport canvas with:
//! - Drifting particles that wrap at the edges and pulse in opacity
//! - Falling rain streaks recycled at the bottom edge
//! - Expanding rings that fade out and are pruned every frame
//! - Slow aurora bands and a sweeping scanline
//!
//! Entity counts scale with the viewport so density is resolution
//! independent. Every resize re-seeds the pools from scratch.
//!
//! # Example
//!
//! ```ignore
//! view! { <PitchBackground /> }
//! ```

mod component;
pub mod lifecycle;
mod render;
pub mod scene;
pub mod theme;
pub mod viewport;

pub use component::{LOOP_STATE_ATTR, PitchBackground};
pub use lifecycle::{LoopLifecycle, Teardown};
pub use scene::Scene;
pub use theme::Theme;
pub use viewport::Viewport;
