use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{NewDish, NewRestaurant, RestaurantUpdate};
use crate::repository::errors::RepositoryError;
use crate::repository::models::{DishRow, NewUserRow, RestaurantRow, UserRow};
use crate::validation::PageQuery;

#[async_trait]
pub trait RestaurantRepositoryTrait: Send + Sync {
    async fn create_restaurant(
        &self,
        restaurant: &NewRestaurant,
        created_by: Uuid,
    ) -> Result<RestaurantRow, RepositoryError>;
    async fn get_restaurant(&self, id: Uuid) -> Result<Option<RestaurantRow>, RepositoryError>;
    async fn get_restaurants_paginated(
        &self,
        query: &PageQuery,
    ) -> Result<(Vec<RestaurantRow>, u64), RepositoryError>;
    async fn update_restaurant(
        &self,
        id: Uuid,
        update: &RestaurantUpdate,
    ) -> Result<RestaurantRow, RepositoryError>;
    async fn delete_restaurant(&self, id: Uuid) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait DishRepositoryTrait: Send + Sync {
    async fn create_dish(
        &self,
        restaurant_id: Uuid,
        dish: &NewDish,
    ) -> Result<DishRow, RepositoryError>;
    async fn get_dish(&self, dish_id: Uuid) -> Result<Option<DishRow>, RepositoryError>;
    async fn get_dishes_for_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<DishRow>, RepositoryError>;
    async fn delete_dishes_for_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn create_user(&self, user: &NewUserRow) -> Result<UserRow, RepositoryError>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<UserRow>, RepositoryError>;
    async fn get_registered_emails(&self) -> Result<Vec<String>, RepositoryError>;
}
