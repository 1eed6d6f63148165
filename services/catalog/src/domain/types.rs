use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Listing lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingStatus {
    #[default]
    Active,
    Inactive,
}

impl ListingStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

/// One row of a listing search result page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSummary {
    pub id: Uuid,
    pub title: String,
    pub price: i64,
    pub city: Option<String>,
    pub status: ListingStatus,
    pub created_at: DateTime<Utc>,
    /// Category display name; None for uncategorized listings.
    pub category: Option<String>,
    /// URL of the image flagged primary; None when the listing has no images
    /// or none is flagged.
    pub primary_image_url: Option<String>,
}

/// A validated listing ready for insertion. All write-path requirements
/// (owner, city, category) are resolved by the time this exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub status: ListingStatus,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub owner_id: Uuid,
    pub category_id: Uuid,
}

/// Taxonomy node referenced by listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
}

/// Listing owner resolved from the external-auth subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub subject: String,
    pub name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Trusted caller identity as seen by the write path. Built from the gateway
/// headers by the handler; never from the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pub subject: String,
    pub email: Option<String>,
    pub name: Option<String>,
}
