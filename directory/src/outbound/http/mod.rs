//! HTTP outbound adapter.
//!
//! This module provides a thin `reqwest` implementation of the `UserSource`
//! port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_USER_AGENT, HttpUserSource, HttpUserSourceOptions};
