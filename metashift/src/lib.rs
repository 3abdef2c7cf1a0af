//! Deterministic seed-driven reordering of metadata lists.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure rotation logic. No I/O, generic over element type.
//! - **[`io`]**: Config, metadata files, and `.metashift/` scaffolding.
//!
//! [`offset`] coordinates the two to implement `metashift offset`.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod metadata;
pub mod offset;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
