//! HTTP-boundary middleware.

pub mod error;
