//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET, multipart POST)

pub mod http;

pub use http::{FilePart, Headers, HttpClient, HttpError, Response};
