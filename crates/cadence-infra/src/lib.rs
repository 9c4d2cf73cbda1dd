//! # Cadence Infrastructure
//!
//! Concrete implementations of the ports defined in `cadence-core`.
//! This crate contains the post repositories and the generation provider
//! clients.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - In-memory repository only
//! - `postgres` - PostgreSQL repository via SeaORM

pub mod database;
pub mod generation;
pub mod memory;

pub use memory::InMemoryPostRepository;

pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;

pub use generation::{MotionVideoClient, OpenAiClient, ProviderConfig, VideoProviderConfig};
