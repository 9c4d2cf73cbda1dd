//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod generation;
mod repository;

pub use generation::{CaptionGenerator, CaptionPrompt, ImageGenerator, VideoComposer, VideoSpec};
pub use repository::PostRepository;
