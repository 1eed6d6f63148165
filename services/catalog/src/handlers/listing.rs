use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use souk_auth_types::identity::Identity;

use crate::domain::query::RawListingQuery;
use crate::domain::types::{Caller, ListingSummary};
use crate::error::CatalogError;
use crate::state::AppState;
use crate::usecase::listing::{CreateListingInput, CreateListingUseCase, SearchListingsUseCase};

// ── GET /listings ────────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingSummaryResponse {
    pub id: String,
    pub title: String,
    pub price: i64,
    pub city: Option<String>,
    pub status: &'static str,
    #[serde(serialize_with = "souk_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub category: Option<String>,
    pub primary_image_url: Option<String>,
}

impl From<ListingSummary> for ListingSummaryResponse {
    fn from(summary: ListingSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title,
            price: summary.price,
            city: summary.city,
            status: summary.status.as_str(),
            created_at: summary.created_at,
            category: summary.category,
            primary_image_url: summary.primary_image_url,
        }
    }
}

#[derive(Serialize)]
pub struct ListingsResponse {
    pub success: bool,
    pub data: Vec<ListingSummaryResponse>,
}

pub async fn search_listings(
    State(state): State<AppState>,
    Query(raw): Query<RawListingQuery>,
) -> Result<Json<ListingsResponse>, CatalogError> {
    let spec = raw.compile().map_err(CatalogError::InvalidQuery)?;
    let usecase = SearchListingsUseCase {
        repo: state.listing_repo(),
    };
    let listings = usecase.execute(&spec).await?;
    Ok(Json(ListingsResponse {
        success: true,
        data: listings
            .into_iter()
            .map(ListingSummaryResponse::from)
            .collect(),
    }))
}

// ── POST /listings ───────────────────────────────────────────────────────────

/// Create-listing body. There is deliberately no owner field — ownership
/// comes from the gateway identity, and unknown body fields are dropped.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListingRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub city: Option<String>,
    pub category_id: Option<String>,
}

#[derive(Serialize)]
pub struct CreateListingResponse {
    pub success: bool,
    pub id: String,
}

pub async fn create_listing(
    identity: Identity,
    State(state): State<AppState>,
    Json(body): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<CreateListingResponse>), CatalogError> {
    let caller = Caller {
        subject: identity.subject,
        email: identity.email,
        name: identity.name,
    };
    let usecase = CreateListingUseCase {
        listings: state.listing_repo(),
        categories: state.category_repo(),
        users: state.user_repo(),
    };
    let id = usecase
        .execute(
            &caller,
            CreateListingInput {
                title: body.title,
                description: body.description,
                price: body.price,
                city: body.city,
                category_id: body.category_id,
            },
        )
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateListingResponse {
            success: true,
            id: id.to_string(),
        }),
    ))
}
