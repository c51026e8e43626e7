//! Feed query parameters

use crate::config::FeedConfig;
use serde::{Deserialize, Serialize};
use shared_types::SortOrder;

/// One page request against a viewer's feed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedRequest {
    /// Number of records to skip from the start of the ordered feed, not a page index.
    pub offset: usize,
    /// Page size; `None` means the configured default.
    pub limit: Option<usize>,
    pub order: SortOrder,
}

impl FeedRequest {
    pub fn new(offset: usize, limit: usize, order: SortOrder) -> Self {
        Self {
            offset,
            limit: Some(limit),
            order,
        }
    }

    /// Request built from raw caller parameters, with a free-form sort token.
    pub fn from_params(offset: Option<usize>, limit: Option<usize>, sort: Option<&str>) -> Self {
        Self {
            offset: offset.unwrap_or(0),
            limit,
            order: sort.map(SortOrder::parse_lenient).unwrap_or_default(),
        }
    }

    /// Page size after defaults and clamping.
    pub fn effective_limit(&self, config: &FeedConfig) -> usize {
        self.limit
            .unwrap_or(config.default_limit)
            .min(config.max_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = FeedRequest::default();
        assert_eq!(request.offset, 0);
        assert_eq!(request.order, SortOrder::Descending);
        assert_eq!(request.effective_limit(&FeedConfig::default()), 20);
    }

    #[test]
    fn test_limit_is_clamped() {
        let config = FeedConfig::default();
        assert_eq!(FeedRequest::new(0, 500, SortOrder::Ascending).effective_limit(&config), 100);
        assert_eq!(FeedRequest::new(0, 0, SortOrder::Ascending).effective_limit(&config), 0);
    }

    #[test]
    fn test_from_params() {
        let request = FeedRequest::from_params(Some(10), None, Some("AsC"));
        assert_eq!(request.offset, 10);
        assert_eq!(request.limit, None);
        assert_eq!(request.order, SortOrder::Ascending);

        let request = FeedRequest::from_params(None, Some(5), Some("sideways"));
        assert_eq!(request.order, SortOrder::Descending);
    }
}
