mod animation;
mod hover;
mod reflow;

pub use animation::GrowAnimation;
pub use hover::{HoverController, HoverFadeConfig};
pub use reflow::ReflowController;
