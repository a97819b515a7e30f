//! CLI command implementations.
//!
//! Each command returns `Ok(true)` on success, `Ok(false)` when the run
//! completed but found problems, and `Err` for fatal errors.

pub mod fix;
pub mod lookup;
pub mod validate;
