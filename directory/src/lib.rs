//! User directory library.
//!
//! The directory loads a fixed list of users from a remote JSON source once
//! per session, then derives filtered views and facet options from that set
//! as the search criteria change. The crate is laid out as a small hexagon:
//!
//! - [`domain`] owns the user records, the filter engine, the session state
//!   reducer, and the [`domain::ports::UserSource`] port.
//! - [`outbound`] adapts the port to HTTP with `reqwest`.
//! - [`inbound`] projects directory state into serialisable snapshots for a
//!   presentation layer.
//! - [`settings`] loads runtime configuration through `OrthoConfig`.
//! - [`driver`] runs one headless session and renders its snapshot.

pub mod domain;
pub mod driver;
pub mod inbound;
pub mod outbound;
pub mod settings;
