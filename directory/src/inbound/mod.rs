//! Inbound adapters: how presentation layers observe the directory.

pub mod snapshot;
