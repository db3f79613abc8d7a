mod engine;
mod engine_config;
mod frame_builder;
mod validation;

pub use engine::TimelineEngine;
pub use engine_config::TimelineConfig;
pub use frame_builder::{FrameLayout, build_frame, build_layout};
pub use validation::{effective_mode, validate_content_width, validate_dataset};
