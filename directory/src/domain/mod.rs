//! Domain primitives, services, and ports.
//!
//! Purpose: hold the directory's user records, the pure filter engine, the
//! session state reducer, and the loader service. Nothing here knows about
//! HTTP, JSON, or how state is rendered.
//!
//! Public surface:
//! - `User`, `UserId`, `Contact`, `Address`, `Company`: immutable records.
//! - `FilterCriteria` and the `filter_users` / `city_options` /
//!   `company_options` derivations.
//! - `DirectoryState`, `DirectoryAction`, `DirectoryView`: session state,
//!   its reducer inputs, and the derived view.
//! - `UserLoader`: performs the session's single fetch.
//! - `LoadFailure`: the only failure the presentation sees.

pub mod directory;
pub mod error;
pub mod filter;
pub mod loader;
pub mod ports;
pub mod user;

pub use self::directory::{DirectoryAction, DirectoryState, DirectoryView, LoadState, Theme};
pub use self::error::{DEFAULT_LOAD_FAILURE_MESSAGE, LoadFailure};
pub use self::filter::{FilterCriteria, city_options, company_options, filter_users};
pub use self::loader::UserLoader;
pub use self::user::{Address, Company, Contact, User, UserId};
