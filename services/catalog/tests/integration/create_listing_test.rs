use chrono::Utc;
use uuid::Uuid;

use souk_catalog::domain::types::{ListingStatus, User};
use souk_catalog::error::CatalogError;
use souk_catalog::usecase::listing::{CreateListingInput, CreateListingUseCase};

use crate::helpers::{
    MockCategoryRepo, MockListingRepo, MockUserRepo, test_caller, test_category,
};

fn valid_input(category_id: Uuid) -> CreateListingInput {
    CreateListingInput {
        title: Some("iPhone 14 Pro".into()),
        description: Some("Lightly used, with box and charger".into()),
        price: Some(250_000),
        city: Some("Lahore".into()),
        category_id: Some(category_id.to_string()),
    }
}

// ── happy path ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn creates_listing_owned_by_the_caller() {
    let category = test_category("electronics", "Electronics");
    let owner = User {
        id: Uuid::now_v7(),
        subject: "auth0|u-1001".into(),
        name: None,
        email: "seller@example.com".into(),
        created_at: Utc::now(),
    };
    let listings = MockListingRepo::empty();
    let inserted = listings.inserted_handle();

    let usecase = CreateListingUseCase {
        listings,
        categories: MockCategoryRepo::new(vec![category.clone()]),
        users: MockUserRepo::new(Some(owner.clone())),
    };

    let id = usecase
        .execute(&test_caller(), valid_input(category.id))
        .await
        .unwrap();

    let rows = inserted.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].owner_id, owner.id);
    assert_eq!(rows[0].category_id, category.id);
    assert_eq!(rows[0].status, ListingStatus::Active);
    assert_eq!(rows[0].city, "Lahore");
}

#[tokio::test]
async fn first_contact_creates_the_callers_user_row() {
    let category = test_category("furniture", "Furniture");
    let users = MockUserRepo::new(None);
    let created = users.created_handle();

    let usecase = CreateListingUseCase {
        listings: MockListingRepo::empty(),
        categories: MockCategoryRepo::new(vec![category.clone()]),
        users,
    };

    usecase
        .execute(&test_caller(), valid_input(category.id))
        .await
        .unwrap();

    let callers = created.lock().unwrap();
    assert_eq!(callers.len(), 1);
    assert_eq!(callers[0].subject, "auth0|u-1001");
}

// ── payload validation ───────────────────────────────────────────────────────

fn payload_fields(error: CatalogError) -> Vec<&'static str> {
    match error {
        CatalogError::InvalidPayload(details) => details.iter().map(|e| e.field).collect(),
        other => panic!("expected InvalidPayload, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_payload_reports_every_missing_field() {
    let usecase = CreateListingUseCase {
        listings: MockListingRepo::empty(),
        categories: MockCategoryRepo::empty(),
        users: MockUserRepo::new(None),
    };

    let error = usecase
        .execute(&test_caller(), CreateListingInput::default())
        .await
        .unwrap_err();

    let fields = payload_fields(error);
    assert_eq!(fields.len(), 5);
    for field in ["title", "description", "price", "city", "categoryId"] {
        assert!(fields.contains(&field), "missing error for {field}");
    }
}

#[tokio::test]
async fn short_title_and_nonpositive_price_are_both_reported() {
    let category = test_category("vehicles", "Vehicles");
    let usecase = CreateListingUseCase {
        listings: MockListingRepo::empty(),
        categories: MockCategoryRepo::new(vec![category.clone()]),
        users: MockUserRepo::new(None),
    };

    let input = CreateListingInput {
        title: Some("ab".into()),
        price: Some(0),
        ..valid_input(category.id)
    };
    let fields = payload_fields(usecase.execute(&test_caller(), input).await.unwrap_err());
    assert_eq!(fields, vec!["title", "price"]);
}

#[tokio::test]
async fn unknown_category_is_a_field_error() {
    let usecase = CreateListingUseCase {
        listings: MockListingRepo::empty(),
        categories: MockCategoryRepo::empty(),
        users: MockUserRepo::new(None),
    };

    let fields = payload_fields(
        usecase
            .execute(&test_caller(), valid_input(Uuid::new_v4()))
            .await
            .unwrap_err(),
    );
    assert_eq!(fields, vec!["categoryId"]);
}

#[tokio::test]
async fn malformed_category_id_is_a_field_error() {
    let usecase = CreateListingUseCase {
        listings: MockListingRepo::empty(),
        categories: MockCategoryRepo::empty(),
        users: MockUserRepo::new(None),
    };

    let input = CreateListingInput {
        category_id: Some("not-a-uuid".into()),
        ..valid_input(Uuid::new_v4())
    };
    let fields = payload_fields(usecase.execute(&test_caller(), input).await.unwrap_err());
    assert_eq!(fields, vec!["categoryId"]);
}

#[tokio::test]
async fn blank_city_is_a_field_error() {
    let category = test_category("electronics", "Electronics");
    let usecase = CreateListingUseCase {
        listings: MockListingRepo::empty(),
        categories: MockCategoryRepo::new(vec![category.clone()]),
        users: MockUserRepo::new(None),
    };

    let input = CreateListingInput {
        city: Some("   ".into()),
        ..valid_input(category.id)
    };
    let fields = payload_fields(usecase.execute(&test_caller(), input).await.unwrap_err());
    assert_eq!(fields, vec!["city"]);
}

#[tokio::test]
async fn invalid_payload_never_touches_the_listing_repository() {
    let listings = MockListingRepo::empty();
    let inserted = listings.inserted_handle();
    let users = MockUserRepo::new(None);
    let created = users.created_handle();

    let usecase = CreateListingUseCase {
        listings,
        categories: MockCategoryRepo::empty(),
        users,
    };

    let _ = usecase
        .execute(&test_caller(), CreateListingInput::default())
        .await;

    assert!(inserted.lock().unwrap().is_empty());
    assert!(created.lock().unwrap().is_empty());
}
