//! timegrid: day-column timeline layout engine.
//!
//! This crate computes the full pixel-space geometry of a Google-Calendar
//! style day/week chart (hour axis, day columns, event bars, "now" marker)
//! and drives its interaction state (hover isolation, grow animation,
//! debounced reflow). Rendering backends consume a materialized
//! [`render::RenderFrame`]; the engine itself never touches a drawing
//! surface directly.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineConfig, TimelineEngine};
pub use error::{TimelineError, TimelineResult};
