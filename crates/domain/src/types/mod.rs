//! Request parameter types
//!
//! Typed replacements for the free-form option maps resource calls accept.

pub mod receipt;
pub mod record;
pub mod report;

use serde::{Deserialize, Serialize};

pub use receipt::ReceiptUpload;
pub use record::Record;
pub use report::ReportRange;

use crate::impl_wire_name_conversions;

/// HTTP verbs the transport issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl_wire_name_conversions!(HttpVerb {
    Get => "get",
    Post => "post",
    Put => "put",
    Patch => "patch",
    Delete => "delete",
});

impl HttpVerb {
    /// Whether requests with this verb carry a body and content-length.
    pub fn has_body(self) -> bool {
        !matches!(self, Self::Get)
    }
}
