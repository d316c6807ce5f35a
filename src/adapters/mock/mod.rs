//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP transport with canned responses
//! - [`ScriptedImageApi`] - image API whose calls are answered by the test

pub mod http;
pub mod image_api;

pub use http::{MockHttpClient, MockResponse};
pub use image_api::{ScriptedCall, ScriptedImageApi};
