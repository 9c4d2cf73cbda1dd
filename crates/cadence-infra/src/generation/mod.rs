//! Generation provider clients - implementations of the AI collaborator
//! ports over HTTP.

mod openai;
mod video;

pub use openai::{OpenAiClient, ProviderConfig};
pub use video::{MotionVideoClient, VideoProviderConfig};
