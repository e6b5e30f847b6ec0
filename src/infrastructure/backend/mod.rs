//! Dashboard backend client.

mod client;
mod dto;
pub mod endpoints;

pub use client::{BackendClient, DEFAULT_BACKEND_URL};
pub use endpoints::Endpoint;
