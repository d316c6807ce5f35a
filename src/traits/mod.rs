//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - raw HTTP transport (reqwest in production, mock in tests)
//! - [`ImageApi`] - the three typed operations of the image backend

pub mod http;
pub mod image_api;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use image_api::ImageApi;
