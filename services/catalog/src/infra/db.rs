use anyhow::Context as _;
use chrono::Utc;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, OnConflict, Query, QueryStatementBuilder as _, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};
use uuid::Uuid;

use souk_catalog_schema::{categories, images, listings, users};

use crate::domain::query::ListingQuerySpec;
use crate::domain::repository::{CategoryRepository, ListingRepository, UserRepository};
use crate::domain::types::{Caller, Category, ListingStatus, ListingSummary, NewListing, User};
use crate::error::CatalogError;

// ── Listing repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbListingRepository {
    pub db: DatabaseConnection,
}

/// Escape LIKE wildcards so user search input matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Scalar subquery resolving the primary image URL for the current listing
/// row. LIMIT 1 keeps it scalar even if the at-most-one-primary expectation
/// is ever violated.
fn primary_image_url() -> SimpleExpr {
    let select = Query::select()
        .column((images::Entity, images::Column::Url))
        .from(images::Entity)
        .and_where(
            Expr::col((images::Entity, images::Column::ListingId))
                .equals((listings::Entity, listings::Column::Id)),
        )
        .and_where(Expr::col((images::Entity, images::Column::IsPrimary)).eq(true))
        .limit(1)
        .to_owned();
    SimpleExpr::SubQuery(None, Box::new(select.into_sub_query_statement()))
}

/// Build the one SELECT a search request runs: listings left-joined to
/// categories, the conjunction of the supplied filters, the primary-image
/// subquery, newest-first ordering with an id tie-break, and the validated
/// page bounds. Pure, so tests can assert the emitted SQL.
fn search_select(spec: &ListingQuerySpec) -> Select<listings::Entity> {
    let mut cond = Condition::all();
    if let Some(city) = &spec.filter.city {
        cond = cond.add(listings::Column::City.eq(city.as_str()));
    }
    if let Some(status) = spec.filter.status {
        cond = cond.add(listings::Column::Status.eq(status.as_str()));
    }
    if let Some(slug) = &spec.filter.category {
        cond = cond.add(categories::Column::Slug.eq(slug.as_str()));
    }
    if let Some(search) = &spec.filter.search {
        let pattern = format!("%{}%", escape_like(search));
        cond = cond.add(Expr::col((listings::Entity, listings::Column::Title)).ilike(pattern));
    }

    listings::Entity::find()
        .select_only()
        .column(listings::Column::Id)
        .column(listings::Column::Title)
        .column(listings::Column::Price)
        .column(listings::Column::City)
        .column(listings::Column::Status)
        .column(listings::Column::CreatedAt)
        .column_as(categories::Column::Name, "category")
        .expr_as(primary_image_url(), "primary_image_url")
        .join(JoinType::LeftJoin, listings::Relation::Category.def())
        .filter(cond)
        .order_by_desc(listings::Column::CreatedAt)
        .order_by_desc(listings::Column::Id)
        .limit(spec.limit)
        .offset(spec.offset)
}

#[derive(Debug, FromQueryResult)]
struct ListingSummaryRow {
    id: Uuid,
    title: String,
    price: i64,
    city: Option<String>,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
    category: Option<String>,
    primary_image_url: Option<String>,
}

fn listing_summary_from_row(row: ListingSummaryRow) -> Result<ListingSummary, CatalogError> {
    let status = ListingStatus::parse(&row.status).ok_or_else(|| {
        CatalogError::Internal(anyhow::anyhow!(
            "unrecognized listing status {:?}",
            row.status
        ))
    })?;
    Ok(ListingSummary {
        id: row.id,
        title: row.title,
        price: row.price,
        city: row.city,
        status,
        created_at: row.created_at,
        category: row.category,
        primary_image_url: row.primary_image_url,
    })
}

impl ListingRepository for DbListingRepository {
    async fn search(&self, spec: &ListingQuerySpec) -> Result<Vec<ListingSummary>, CatalogError> {
        let rows = search_select(spec)
            .into_model::<ListingSummaryRow>()
            .all(&self.db)
            .await
            .context("search listings")?;
        rows.into_iter().map(listing_summary_from_row).collect()
    }

    async fn insert(&self, listing: &NewListing) -> Result<Uuid, CatalogError> {
        listings::ActiveModel {
            id: Set(listing.id),
            title: Set(listing.title.clone()),
            description: Set(listing.description.clone()),
            price: Set(listing.price),
            status: Set(listing.status.as_str().to_owned()),
            city: Set(Some(listing.city.clone())),
            created_at: Set(listing.created_at),
            owner_id: Set(Some(listing.owner_id)),
            category_id: Set(Some(listing.category_id)),
        }
        .insert(&self.db)
        .await
        .context("insert listing")?;
        Ok(listing.id)
    }
}

// ── Category repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCategoryRepository {
    pub db: DatabaseConnection,
}

impl CategoryRepository for DbCategoryRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, CatalogError> {
        let model = categories::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find category by id")?;
        Ok(model.map(category_from_model))
    }
}

fn category_from_model(model: categories::Model) -> Category {
    Category {
        id: model.id,
        slug: model.slug,
        name: model.name,
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_or_create(&self, caller: &Caller) -> Result<User, CatalogError> {
        if let Some(model) = users::Entity::find()
            .filter(users::Column::Subject.eq(caller.subject.as_str()))
            .one(&self.db)
            .await
            .context("find user by subject")?
        {
            return Ok(user_from_model(model));
        }

        // Two first contacts can race on the unique subject; the loser's
        // insert is a no-op and the reload below returns the winner's row.
        users::Entity::insert(users::ActiveModel {
            id: Set(Uuid::now_v7()),
            subject: Set(caller.subject.clone()),
            name: Set(caller.name.clone()),
            email: Set(caller.email.clone().unwrap_or_default()),
            created_at: Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(users::Column::Subject)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("create user on first contact")?;

        let model = users::Entity::find()
            .filter(users::Column::Subject.eq(caller.subject.as_str()))
            .one(&self.db)
            .await
            .context("reload user after first contact")?
            .ok_or_else(|| anyhow::anyhow!("user row missing after first-contact insert"))?;
        Ok(user_from_model(model))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        subject: model.subject,
        name: model.name,
        email: model.email,
        created_at: model.created_at,
    }
}
