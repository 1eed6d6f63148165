use souk_catalog::domain::query::{DEFAULT_LIMIT, RawListingQuery};
use souk_catalog::domain::types::ListingStatus;
use souk_catalog::error::CatalogError;
use souk_catalog::usecase::listing::SearchListingsUseCase;

use crate::helpers::{MockListingRepo, test_summary};

// ── compile → execute flow ───────────────────────────────────────────────────

#[tokio::test]
async fn compiled_spec_reaches_the_repository_unchanged() {
    let raw = RawListingQuery {
        city: Some("Lahore".into()),
        status: Some("active".into()),
        search: Some("iphone".into()),
        limit: Some("5".into()),
        offset: Some("10".into()),
        ..Default::default()
    };
    let spec = raw.compile().unwrap();

    let repo = MockListingRepo::new(vec![test_summary("iPhone 14 Pro")]);
    let searched = repo.searched_handle();
    let usecase = SearchListingsUseCase { repo };

    let rows = usecase.execute(&spec).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "iPhone 14 Pro");

    let seen = searched.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].filter.city.as_deref(), Some("Lahore"));
    assert_eq!(seen[0].filter.status, Some(ListingStatus::Active));
    assert_eq!(seen[0].filter.search.as_deref(), Some("iphone"));
    assert_eq!(seen[0].limit, 5);
    assert_eq!(seen[0].offset, 10);
}

#[tokio::test]
async fn zero_filters_still_produce_a_bounded_spec() {
    let spec = RawListingQuery::default().compile().unwrap();

    let repo = MockListingRepo::empty();
    let searched = repo.searched_handle();
    let usecase = SearchListingsUseCase { repo };

    let rows = usecase.execute(&spec).await.unwrap();
    assert!(rows.is_empty());

    let seen = searched.lock().unwrap();
    assert!(seen[0].filter.city.is_none());
    assert!(seen[0].filter.category.is_none());
    assert!(seen[0].filter.status.is_none());
    assert!(seen[0].filter.search.is_none());
    assert_eq!(seen[0].limit, DEFAULT_LIMIT);
}

// ── invalid queries never reach the executor ─────────────────────────────────

#[tokio::test]
async fn oversized_limit_is_rejected_before_any_query_runs() {
    let raw = RawListingQuery {
        limit: Some("100".into()),
        ..Default::default()
    };
    let errors = raw.compile().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "limit");

    // The handler maps these straight to the 400 envelope.
    let err = CatalogError::InvalidQuery(errors);
    assert_eq!(err.to_string(), "Invalid query parameters");
}

#[tokio::test]
async fn repository_failures_surface_as_internal_errors() {
    struct FailingRepo;

    impl souk_catalog::domain::repository::ListingRepository for FailingRepo {
        async fn search(
            &self,
            _spec: &souk_catalog::domain::query::ListingQuerySpec,
        ) -> Result<Vec<souk_catalog::domain::types::ListingSummary>, CatalogError> {
            Err(CatalogError::Internal(anyhow::anyhow!("connection reset")))
        }

        async fn insert(
            &self,
            _listing: &souk_catalog::domain::types::NewListing,
        ) -> Result<uuid::Uuid, CatalogError> {
            Err(CatalogError::Internal(anyhow::anyhow!("connection reset")))
        }
    }

    let spec = RawListingQuery::default().compile().unwrap();
    let usecase = SearchListingsUseCase { repo: FailingRepo };
    let result = usecase.execute(&spec).await;
    assert!(matches!(result, Err(CatalogError::Internal(_))));
}
