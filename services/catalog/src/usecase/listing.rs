use chrono::Utc;
use uuid::Uuid;

use crate::domain::query::ListingQuerySpec;
use crate::domain::repository::{CategoryRepository, ListingRepository, UserRepository};
use crate::domain::types::{Caller, ListingStatus, ListingSummary, NewListing};
use crate::error::{CatalogError, FieldError};

// ── SearchListings ───────────────────────────────────────────────────────────

pub struct SearchListingsUseCase<R: ListingRepository> {
    pub repo: R,
}

impl<R: ListingRepository> SearchListingsUseCase<R> {
    pub async fn execute(
        &self,
        spec: &ListingQuerySpec,
    ) -> Result<Vec<ListingSummary>, CatalogError> {
        self.repo.search(spec).await
    }
}

// ── CreateListing ────────────────────────────────────────────────────────────

const MIN_TITLE_CHARS: usize = 3;
const MIN_DESCRIPTION_CHARS: usize = 10;

/// Raw create-listing payload. Fields are optional so presence failures are
/// reported per-field instead of as one opaque deserialization error.
#[derive(Debug, Clone, Default)]
pub struct CreateListingInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub city: Option<String>,
    pub category_id: Option<String>,
}

pub struct CreateListingUseCase<L, C, U>
where
    L: ListingRepository,
    C: CategoryRepository,
    U: UserRepository,
{
    pub listings: L,
    pub categories: C,
    pub users: U,
}

impl<L, C, U> CreateListingUseCase<L, C, U>
where
    L: ListingRepository,
    C: CategoryRepository,
    U: UserRepository,
{
    /// Validate the payload, resolve the caller's user row (creating it on
    /// first contact), and insert one listing owned by that user.
    ///
    /// The owner always comes from `caller` — the payload has no say in it.
    pub async fn execute(
        &self,
        caller: &Caller,
        input: CreateListingInput,
    ) -> Result<Uuid, CatalogError> {
        let mut errors = Vec::new();

        let title = match input.title {
            Some(t) if t.chars().count() >= MIN_TITLE_CHARS => Some(t),
            _ => {
                errors.push(FieldError::new("title", "must be at least 3 characters"));
                None
            }
        };

        let description = match input.description {
            Some(d) if d.chars().count() >= MIN_DESCRIPTION_CHARS => Some(d),
            _ => {
                errors.push(FieldError::new(
                    "description",
                    "must be at least 10 characters",
                ));
                None
            }
        };

        let price = match input.price {
            Some(p) if p > 0 => Some(p),
            _ => {
                errors.push(FieldError::new("price", "must be a positive integer"));
                None
            }
        };

        let city = match input.city {
            Some(c) if !c.trim().is_empty() => Some(c),
            _ => {
                errors.push(FieldError::new("city", "is required"));
                None
            }
        };

        let category_id = match input.category_id.as_deref().map(Uuid::parse_str) {
            Some(Ok(id)) => {
                if self.categories.find_by_id(id).await?.is_some() {
                    Some(id)
                } else {
                    errors.push(FieldError::new("categoryId", "unknown category"));
                    None
                }
            }
            Some(Err(_)) => {
                errors.push(FieldError::new(
                    "categoryId",
                    "must be a valid category id",
                ));
                None
            }
            None => {
                errors.push(FieldError::new("categoryId", "is required"));
                None
            }
        };

        // Each validation failure above leaves its field None.
        let (Some(title), Some(description), Some(price), Some(city), Some(category_id)) =
            (title, description, price, city, category_id)
        else {
            return Err(CatalogError::InvalidPayload(errors));
        };

        let owner = self.users.find_or_create(caller).await?;

        let listing = NewListing {
            id: Uuid::now_v7(),
            title,
            description,
            price,
            status: ListingStatus::Active,
            city,
            created_at: Utc::now(),
            owner_id: owner.id,
            category_id,
        };
        self.listings.insert(&listing).await
    }
}
