//! The filter compiler: raw string query parameters in, validated
//! `ListingQuerySpec` out, or every offending field at once.

use serde::Deserialize;

use crate::domain::types::ListingStatus;
use crate::error::FieldError;

/// Default page size when `limit` is absent.
pub const DEFAULT_LIMIT: u64 = 10;
/// Hard ceiling on page size. Values above it are a validation failure, not
/// clamped — the executor must never see an unbounded request.
pub const MAX_LIMIT: u64 = 50;

/// Raw `GET /listings` query parameters, exactly as the client sent them.
/// Unknown parameters are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawListingQuery {
    pub city: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Conjunction of the filters the client actually supplied. Absent fields
/// contribute no predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    /// Exact match on `listings.city`.
    pub city: Option<String>,
    /// Exact match on `categories.slug`.
    pub category: Option<String>,
    /// Exact match on `listings.status`.
    pub status: Option<ListingStatus>,
    /// Case-insensitive substring match on `listings.title`.
    pub search: Option<String>,
}

/// A validated, bounded listing query. The only way to obtain one is
/// [`RawListingQuery::compile`], so the executor can trust its bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuerySpec {
    pub filter: ListingFilter,
    pub limit: u64,
    pub offset: u64,
}

impl RawListingQuery {
    /// Validate and normalize into a [`ListingQuerySpec`].
    ///
    /// Each parameter is checked independently; the error lists every
    /// offending field, never just the first.
    pub fn compile(self) -> Result<ListingQuerySpec, Vec<FieldError>> {
        let mut errors = Vec::new();

        let status = match self.status.as_deref() {
            None => None,
            Some(raw) => match ListingStatus::parse(raw) {
                Some(status) => Some(status),
                None => {
                    errors.push(FieldError::new(
                        "status",
                        "must be one of `active`, `inactive`",
                    ));
                    None
                }
            },
        };

        let limit = match self.limit.as_deref() {
            None => DEFAULT_LIMIT,
            Some(raw) => match raw.parse::<u64>() {
                Ok(v) if v <= MAX_LIMIT => v,
                Ok(_) => {
                    errors.push(FieldError::new("limit", "must be at most 50"));
                    DEFAULT_LIMIT
                }
                Err(_) => {
                    errors.push(FieldError::new("limit", "must be a non-negative integer"));
                    DEFAULT_LIMIT
                }
            },
        };

        let offset = match self.offset.as_deref() {
            None => 0,
            Some(raw) => match raw.parse::<u64>() {
                Ok(v) => v,
                Err(_) => {
                    errors.push(FieldError::new("offset", "must be a non-negative integer"));
                    0
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ListingQuerySpec {
            filter: ListingFilter {
                city: self.city,
                category: self.category,
                status,
                search: self.search,
            },
            limit,
            offset,
        })
    }
}
