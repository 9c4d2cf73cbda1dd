//! # Cadence Core
//!
//! The domain layer of the Cadence post scheduler.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the post entity and its status lifecycle, the recurrence policy, the
//! calendar projection, and the ports infrastructure must implement.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError, UpstreamError};
pub use service::PostService;
