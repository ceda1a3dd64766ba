use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use restaurant_lib::authorization::{ActingUser, ADMIN_ROLE};
use restaurant_lib::entities::{Address, NewRestaurant, RestaurantUpdate};
use restaurant_lib::errors_service::ServiceError;
use restaurant_lib::repository::errors::RepositoryError;
use restaurant_lib::repository::models::RestaurantRow;
use restaurant_lib::repository::traits::RestaurantRepositoryTrait;
use restaurant_lib::restaurant_service::RestaurantService;
use restaurant_lib::validation::PageQuery;

mock! {
    pub RestaurantRepo {}

    #[async_trait]
    impl RestaurantRepositoryTrait for RestaurantRepo {
        async fn create_restaurant(&self, restaurant: &NewRestaurant, created_by: Uuid) -> Result<RestaurantRow, RepositoryError>;
        async fn get_restaurant(&self, id: Uuid) -> Result<Option<RestaurantRow>, RepositoryError>;
        async fn get_restaurants_paginated(&self, query: &PageQuery) -> Result<(Vec<RestaurantRow>, u64), RepositoryError>;
        async fn update_restaurant(&self, id: Uuid, update: &RestaurantUpdate) -> Result<RestaurantRow, RepositoryError>;
        async fn delete_restaurant(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

fn restaurant_row(id: Uuid, created_by: Uuid) -> RestaurantRow {
    RestaurantRow {
        id: id.to_string(),
        name: "KFC".to_string(),
        description: Some("Fried chicken".to_string()),
        category: Some("Fast Food".to_string()),
        has_delivery: true,
        contact_email: None,
        contact_number: None,
        city: "Kraków".to_string(),
        street: "Długa 5".to_string(),
        postal_code: None,
        created_by: created_by.to_string(),
    }
}

fn new_restaurant(name: &str) -> NewRestaurant {
    NewRestaurant {
        name: name.to_string(),
        address: Address {
            city: "Kraków".to_string(),
            street: "Długa 5".to_string(),
            postal_code: None,
        },
        ..NewRestaurant::default()
    }
}

// ==================== LIST RESTAURANTS TESTS ====================

#[tokio::test]
async fn test_get_restaurants_rejects_invalid_query_before_repo() {
    // No expectations: touching the repository would fail the test.
    let repo = MockRestaurantRepo::new();
    let service = RestaurantService::with_repo(Arc::new(repo));

    let result = service.get_restaurants(PageQuery::new(0, 4)).await;

    match result {
        Err(ServiceError::Validation(messages)) => assert_eq!(messages.len(), 2),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_restaurants_rejects_unknown_sort_field() {
    let repo = MockRestaurantRepo::new();
    let service = RestaurantService::with_repo(Arc::new(repo));

    let result = service
        .get_restaurants(PageQuery::new(1, 10).sorted_by("ContactNumber"))
        .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn test_get_restaurants_pagination_math() {
    let mut repo = MockRestaurantRepo::new();
    let created_by = Uuid::new_v4();

    repo.expect_get_restaurants_paginated()
        .withf(|query| query.page_number == 2 && query.page_size == 5)
        .times(1)
        .returning(move |_| {
            let rows = (0..5)
                .map(|_| restaurant_row(Uuid::new_v4(), created_by))
                .collect();
            Ok((rows, 12))
        });

    let service = RestaurantService::with_repo(Arc::new(repo));
    let result = service.get_restaurants(PageQuery::new(2, 5)).await;

    let page = result.unwrap();
    assert_eq!(page.items.len(), 5);
    assert_eq!(page.total, 12);
    assert_eq!(page.page, 2);
    assert_eq!(page.page_size, 5);
    assert_eq!(page.total_pages, 3);
}

#[tokio::test]
async fn test_get_restaurants_empty_page() {
    let mut repo = MockRestaurantRepo::new();

    repo.expect_get_restaurants_paginated()
        .times(1)
        .returning(|_| Ok((vec![], 0)));

    let service = RestaurantService::with_repo(Arc::new(repo));
    let page = service.get_restaurants(PageQuery::new(1, 10)).await.unwrap();

    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
}

// ==================== GET RESTAURANT TESTS ====================

#[tokio::test]
async fn test_get_restaurant_success() {
    let mut repo = MockRestaurantRepo::new();
    let id = Uuid::new_v4();
    let created_by = Uuid::new_v4();

    repo.expect_get_restaurant()
        .withf(move |got| *got == id)
        .times(1)
        .returning(move |_| Ok(Some(restaurant_row(id, created_by))));

    let service = RestaurantService::with_repo(Arc::new(repo));
    let restaurant = service.get_restaurant(id).await.unwrap().unwrap();

    assert_eq!(restaurant.id, id);
    assert_eq!(restaurant.name, "KFC");
    assert_eq!(restaurant.address.city, "Kraków");
    assert_eq!(restaurant.created_by, created_by);
}

#[tokio::test]
async fn test_get_restaurant_absent() {
    let mut repo = MockRestaurantRepo::new();

    repo.expect_get_restaurant().times(1).returning(|_| Ok(None));

    let service = RestaurantService::with_repo(Arc::new(repo));
    let result = service.get_restaurant(Uuid::new_v4()).await;

    assert!(result.unwrap().is_none());
}

// ==================== CREATE RESTAURANT TESTS ====================

#[tokio::test]
async fn test_create_restaurant_success() {
    let mut repo = MockRestaurantRepo::new();
    let created_by = Uuid::new_v4();

    repo.expect_create_restaurant()
        .withf(move |input, by| input.name == "KFC" && *by == created_by)
        .times(1)
        .returning(move |_, by| Ok(restaurant_row(Uuid::new_v4(), by)));

    let service = RestaurantService::with_repo(Arc::new(repo));
    let restaurant = service
        .create_restaurant(new_restaurant("KFC"), created_by)
        .await
        .unwrap();

    assert_eq!(restaurant.created_by, created_by);
}

#[tokio::test]
async fn test_create_restaurant_rejects_blank_name() {
    let repo = MockRestaurantRepo::new();
    let service = RestaurantService::with_repo(Arc::new(repo));

    let result = service
        .create_restaurant(new_restaurant("   "), Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

#[tokio::test]
async fn test_create_restaurant_rejects_overlong_name() {
    let repo = MockRestaurantRepo::new();
    let service = RestaurantService::with_repo(Arc::new(repo));

    let result = service
        .create_restaurant(new_restaurant(&"x".repeat(26)), Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
}

// ==================== UPDATE RESTAURANT TESTS ====================

fn update(name: &str) -> RestaurantUpdate {
    RestaurantUpdate {
        name: name.to_string(),
        description: Some("updated".to_string()),
        has_delivery: false,
    }
}

#[tokio::test]
async fn test_update_restaurant_absent_is_not_found() {
    let mut repo = MockRestaurantRepo::new();

    repo.expect_get_restaurant().times(1).returning(|_| Ok(None));

    let service = RestaurantService::with_repo(Arc::new(repo));
    let actor = ActingUser::new(Uuid::new_v4(), vec!["User".to_string()]);
    let result = service
        .update_restaurant(Uuid::new_v4(), update("New name"), &actor)
        .await;

    assert!(matches!(result, Err(ServiceError::NotFound)));
}

#[tokio::test]
async fn test_update_restaurant_by_owner_succeeds() {
    let mut repo = MockRestaurantRepo::new();
    let id = Uuid::new_v4();
    let owner = Uuid::new_v4();

    repo.expect_get_restaurant()
        .times(1)
        .returning(move |_| Ok(Some(restaurant_row(id, owner))));
    repo.expect_update_restaurant()
        .withf(|_, u| u.name == "New name")
        .times(1)
        .returning(move |_, _| Ok(restaurant_row(id, owner)));

    let service = RestaurantService::with_repo(Arc::new(repo));
    let actor = ActingUser::new(owner, vec!["User".to_string()]);
    let result = service.update_restaurant(id, update("New name"), &actor).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_update_restaurant_by_stranger_is_forbidden() {
    let mut repo = MockRestaurantRepo::new();
    let id = Uuid::new_v4();

    repo.expect_get_restaurant()
        .times(1)
        .returning(move |_| Ok(Some(restaurant_row(id, Uuid::new_v4()))));

    let service = RestaurantService::with_repo(Arc::new(repo));
    let actor = ActingUser::new(Uuid::new_v4(), vec!["User".to_string()]);
    let result = service.update_restaurant(id, update("New name"), &actor).await;

    assert!(matches!(result, Err(ServiceError::Forbidden)));
}

// ==================== DELETE RESTAURANT TESTS ====================

#[tokio::test]
async fn test_delete_restaurant_absent_is_not_found() {
    let mut repo = MockRestaurantRepo::new();

    repo.expect_get_restaurant().times(1).returning(|_| Ok(None));

    let service = RestaurantService::with_repo(Arc::new(repo));
    let actor = ActingUser::new(Uuid::new_v4(), vec![ADMIN_ROLE.to_string()]);
    let result = service.delete_restaurant(Uuid::new_v4(), &actor).await;

    // Absence wins over authorization, even for administrators.
    assert!(matches!(result, Err(ServiceError::NotFound)));
}

#[tokio::test]
async fn test_delete_restaurant_by_owner_succeeds() {
    let mut repo = MockRestaurantRepo::new();
    let id = Uuid::new_v4();
    let owner = Uuid::new_v4();

    repo.expect_get_restaurant()
        .times(1)
        .returning(move |_| Ok(Some(restaurant_row(id, owner))));
    repo.expect_delete_restaurant()
        .withf(move |got| *got == id)
        .times(1)
        .returning(|_| Ok(()));

    let service = RestaurantService::with_repo(Arc::new(repo));
    let actor = ActingUser::new(owner, vec!["User".to_string()]);

    assert!(service.delete_restaurant(id, &actor).await.is_ok());
}

#[tokio::test]
async fn test_delete_restaurant_by_stranger_is_forbidden() {
    let mut repo = MockRestaurantRepo::new();
    let id = Uuid::new_v4();

    repo.expect_get_restaurant()
        .times(1)
        .returning(move |_| Ok(Some(restaurant_row(id, Uuid::new_v4()))));
    // delete_restaurant must never be reached.

    let service = RestaurantService::with_repo(Arc::new(repo));
    let actor = ActingUser::new(Uuid::new_v4(), vec!["User".to_string()]);
    let result = service.delete_restaurant(id, &actor).await;

    assert!(matches!(result, Err(ServiceError::Forbidden)));
}

#[tokio::test]
async fn test_delete_restaurant_by_admin_succeeds() {
    let mut repo = MockRestaurantRepo::new();
    let id = Uuid::new_v4();

    repo.expect_get_restaurant()
        .times(1)
        .returning(move |_| Ok(Some(restaurant_row(id, Uuid::new_v4()))));
    repo.expect_delete_restaurant().times(1).returning(|_| Ok(()));

    let service = RestaurantService::with_repo(Arc::new(repo));
    let actor = ActingUser::new(Uuid::new_v4(), vec![ADMIN_ROLE.to_string()]);

    assert!(service.delete_restaurant(id, &actor).await.is_ok());
}
