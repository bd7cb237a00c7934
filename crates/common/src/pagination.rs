//! Pagination utilities for service layer
//!
//! Offset/limit pagination as used by list endpoints.

use serde::Deserialize;

pub const DEFAULT_SKIP: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 25;

/// Offset/limit parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// rows to skip, in storage order
    #[serde(default)]
    pub skip: u64,
    /// maximum rows to return
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 { DEFAULT_LIMIT }

impl Pagination {
    pub fn new(skip: u64, limit: u64) -> Self { Self { skip, limit } }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: DEFAULT_SKIP, limit: DEFAULT_LIMIT } }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn default_values_are_sane() {
        let d = Pagination::default();
        assert_eq!(d.skip, 0);
        assert_eq!(d.limit, 25);
    }

    #[test]
    fn new_keeps_given_values() {
        let p = Pagination::new(5, 0);
        assert_eq!((p.skip, p.limit), (5, 0));
    }
}
