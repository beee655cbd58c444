//! HTTP API for the manual viewer
//!
//! Serves the document catalogue, per-page text and keyword search over a
//! shared [`AppState`].

pub mod http;
pub mod rest;
pub mod state;

pub use http::{create_router, serve};
pub use state::AppState;
