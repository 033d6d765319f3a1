//! Output contract types
//!
//! The simplified response shape returned to callers, and the
//! transformation from upstream records into it.

mod types;

pub use types::*;
