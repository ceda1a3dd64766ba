use std::sync::Arc;

use uuid::Uuid;

use crate::entities::{Dish, NewDish};
use crate::errors_service::ServiceError;
use crate::repository::models::DishRow;
use crate::repository::traits::{DishRepositoryTrait, RestaurantRepositoryTrait};
use crate::repository::{DishRepository, RestaurantRepository};
use crate::validation::RuleSet;

fn parse_uuid(s: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(s).map_err(|_| ServiceError::InvalidUuid(s.to_string()))
}

fn validate_new_dish(dish: &NewDish) -> Result<(), ServiceError> {
    let result = RuleSet::new()
        .rule("name", "must not be empty", |d: &NewDish| {
            !d.name.trim().is_empty()
        })
        .rule("price", "must not be negative", |d| d.price >= 0.0)
        .evaluate(dish);

    if result.is_ok() {
        Ok(())
    } else {
        Err(ServiceError::Validation(result.messages()))
    }
}

fn dish_from_row(row: DishRow) -> Result<Dish, ServiceError> {
    Ok(Dish {
        id: parse_uuid(&row.id)?,
        restaurant_id: parse_uuid(&row.restaurant_id)?,
        name: row.name,
        description: row.description,
        price: row.price,
    })
}

/// Dishes are a sub-resource of a restaurant: every operation first checks
/// that the parent restaurant exists and reports `NotFound` otherwise.
#[derive(Debug, Clone)]
pub struct DishService<D = DishRepository, R = RestaurantRepository>
where
    D: DishRepositoryTrait,
    R: RestaurantRepositoryTrait,
{
    pub dish_repo: Arc<D>,
    pub restaurant_repo: Arc<R>,
}

impl DishService<DishRepository, RestaurantRepository> {
    pub fn new(dish_repo: DishRepository, restaurant_repo: RestaurantRepository) -> Self {
        Self::with_repos(Arc::new(dish_repo), Arc::new(restaurant_repo))
    }
}

impl<D, R> DishService<D, R>
where
    D: DishRepositoryTrait,
    R: RestaurantRepositoryTrait,
{
    pub fn with_repos(dish_repo: Arc<D>, restaurant_repo: Arc<R>) -> Self {
        Self {
            dish_repo,
            restaurant_repo,
        }
    }

    async fn ensure_restaurant_exists(&self, restaurant_id: Uuid) -> Result<(), ServiceError> {
        self.restaurant_repo
            .get_restaurant(restaurant_id)
            .await
            .map_err(ServiceError::from)?
            .ok_or(ServiceError::NotFound)?;
        Ok(())
    }

    pub async fn get_dishes(&self, restaurant_id: Uuid) -> Result<Vec<Dish>, ServiceError> {
        self.ensure_restaurant_exists(restaurant_id).await?;
        self.dish_repo
            .get_dishes_for_restaurant(restaurant_id)
            .await
            .map_err(ServiceError::from)?
            .into_iter()
            .map(dish_from_row)
            .collect()
    }

    /// Fetch one dish of one restaurant. A dish that exists but belongs to a
    /// different restaurant is reported as `NotFound`.
    pub async fn get_dish(&self, restaurant_id: Uuid, dish_id: Uuid) -> Result<Dish, ServiceError> {
        self.ensure_restaurant_exists(restaurant_id).await?;

        let row = self
            .dish_repo
            .get_dish(dish_id)
            .await
            .map_err(ServiceError::from)?
            .ok_or(ServiceError::NotFound)?;

        let dish = dish_from_row(row)?;
        if dish.restaurant_id != restaurant_id {
            return Err(ServiceError::NotFound);
        }
        Ok(dish)
    }

    pub async fn create_dish(
        &self,
        restaurant_id: Uuid,
        dish: NewDish,
    ) -> Result<Dish, ServiceError> {
        self.ensure_restaurant_exists(restaurant_id).await?;
        validate_new_dish(&dish)?;

        let row = self
            .dish_repo
            .create_dish(restaurant_id, &dish)
            .await
            .map_err(ServiceError::from)?;
        dish_from_row(row)
    }

    /// Remove every dish of a restaurant.
    pub async fn delete_dishes(&self, restaurant_id: Uuid) -> Result<(), ServiceError> {
        self.ensure_restaurant_exists(restaurant_id).await?;
        self.dish_repo
            .delete_dishes_for_restaurant(restaurant_id)
            .await
            .map_err(ServiceError::from)
    }
}
