//! Stable exit codes for metashift CLI commands.

use crate::core::rotate::RotateError;

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, unreadable input, or other errors.
pub const INVALID: i32 = 1;
/// `metashift offset` was given an empty metadata list.
pub const EMPTY_INPUT: i32 = 2;

/// Map a command error to its exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    let empty = err
        .chain()
        .any(|cause| cause.downcast_ref::<RotateError>().is_some());
    if empty { EMPTY_INPUT } else { INVALID }
}
