//! REST API client module for the DMS backend.
//!
//! This module provides the `ApiClient` for the authentication endpoint and
//! the two OCR reprocess triggers. Reprocess calls use JWT bearer token
//! authentication obtained through `/api/auth/login`.

pub mod client;
pub mod error;

pub use client::{ApiClient, ReprocessAck};
pub use error::ApiError;
