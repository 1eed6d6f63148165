#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::query::ListingQuerySpec;
use crate::domain::types::{Caller, Category, ListingSummary, NewListing, User};
use crate::error::CatalogError;

/// Repository for listings: the filtered read path and the single-row write.
pub trait ListingRepository: Send + Sync {
    /// Run one bounded query for the page described by `spec`.
    async fn search(&self, spec: &ListingQuerySpec) -> Result<Vec<ListingSummary>, CatalogError>;

    /// Insert one listing atomically. Returns the new id.
    async fn insert(&self, listing: &NewListing) -> Result<Uuid, CatalogError>;
}

/// Read-only access to the category taxonomy.
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, CatalogError>;
}

/// Repository for listing owners.
pub trait UserRepository: Send + Sync {
    /// Resolve the caller's user row, creating it on first contact.
    async fn find_or_create(&self, caller: &Caller) -> Result<User, CatalogError>;
}
