//! Domain ports defining the edges of the hexagon.
//!
//! The directory has a single driven port: the remote user source. Adapters
//! map transport failures into the variants of its error type.

mod macros;
mod user_source;

pub(crate) use macros::define_port_error;
#[cfg(test)]
pub use user_source::MockUserSource;
pub use user_source::{FixtureUserSource, UserSource, UserSourceError};
