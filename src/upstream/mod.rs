//! Upstream Guides API module
//!
//! Builds requests against the Guides search provider and decodes its
//! responses into typed records.

mod guides;
mod types;

pub use guides::GuidesUpstream;
pub use types::{GuidesRecord, UpstreamRequest, UpstreamResponse};
