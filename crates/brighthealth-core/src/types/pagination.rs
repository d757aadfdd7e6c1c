//! Offset pagination for list endpoints.

use serde::{Deserialize, Serialize};

/// Default number of records returned by a list call.
pub const DEFAULT_LIMIT: u32 = 100;

/// Offset/limit window for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Number of records to skip.
    #[serde(default)]
    pub skip: u32,
    /// Maximum number of records to return.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    /// Return the SQL `OFFSET` value.
    pub fn offset(&self) -> i64 {
        i64::from(self.skip)
    }

    /// Return the SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}
