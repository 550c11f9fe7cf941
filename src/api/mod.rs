//! API Layer
//!
//! HTTP client for the Cura REST API and the error types it surfaces.

pub mod client;
pub mod error;

pub use client::*;
pub use error::{ApiError, ApiResult, ValidationError};
