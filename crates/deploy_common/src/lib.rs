//! # Deployment helper support
//!
//! Pieces shared by the `deploy-render` and `deploy-allowed-hosts` binaries.
//!
//! ## Modules
//! - `errors`: Support error type
//! - `fs`: Atomic replacement of output files
//! - `list`: Comma separated command-line values
//! - `logging`: `RUST_LOG` driven tracing setup
//! - `status`: Progress lines on the status stream

pub mod errors;
pub mod fs;
pub mod list;
pub mod logging;
pub mod status;

pub use errors::{SupportError, SupportResult};
pub use list::CommaList;
