//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP transport using reqwest
//!
//! The [`mock`] submodule provides the test doubles.

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, ScriptedImageApi};
pub use reqwest_http::ReqwestHttpClient;
