use std::sync::Arc;

use uuid::Uuid;

use crate::authorization::{authorize_mutation, ActingUser, Decision, ResourceOwnership};
use crate::entities::{Address, NewRestaurant, PaginatedResult, Restaurant, RestaurantUpdate};
use crate::errors_service::ServiceError;
use crate::repository::models::RestaurantRow;
use crate::repository::traits::RestaurantRepositoryTrait;
use crate::repository::RestaurantRepository;
use crate::validation::{PageQuery, QueryValidator, RuleSet};

pub const MAX_RESTAURANT_NAME_LENGTH: usize = 25;

fn parse_uuid(s: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(s).map_err(|_| ServiceError::InvalidUuid(s.to_string()))
}

fn validate_new_restaurant(input: &NewRestaurant) -> Result<(), ServiceError> {
    let result = RuleSet::new()
        .rule("name", "must not be empty", |r: &NewRestaurant| {
            !r.name.trim().is_empty()
        })
        .rule("name", "must not exceed 25 characters", |r| {
            r.name.len() <= MAX_RESTAURANT_NAME_LENGTH
        })
        .rule("city", "must not be empty", |r| {
            !r.address.city.trim().is_empty()
        })
        .rule("street", "must not be empty", |r| {
            !r.address.street.trim().is_empty()
        })
        .evaluate(input);

    if result.is_ok() {
        Ok(())
    } else {
        Err(ServiceError::Validation(result.messages()))
    }
}

fn validate_restaurant_update(update: &RestaurantUpdate) -> Result<(), ServiceError> {
    let result = RuleSet::new()
        .rule("name", "must not be empty", |u: &RestaurantUpdate| {
            !u.name.trim().is_empty()
        })
        .rule("name", "must not exceed 25 characters", |u| {
            u.name.len() <= MAX_RESTAURANT_NAME_LENGTH
        })
        .evaluate(update);
    if result.is_ok() {
        Ok(())
    } else {
        Err(ServiceError::Validation(result.messages()))
    }
}

pub(crate) fn restaurant_from_row(row: RestaurantRow) -> Result<Restaurant, ServiceError> {
    Ok(Restaurant {
        id: parse_uuid(&row.id)?,
        name: row.name,
        description: row.description,
        category: row.category,
        has_delivery: row.has_delivery,
        contact_email: row.contact_email,
        contact_number: row.contact_number,
        address: Address {
            city: row.city,
            street: row.street,
            postal_code: row.postal_code,
        },
        created_by: parse_uuid(&row.created_by)?,
    })
}

fn ownership_of(row: &RestaurantRow) -> Result<ResourceOwnership, ServiceError> {
    Ok(ResourceOwnership {
        resource_id: parse_uuid(&row.id)?,
        created_by: parse_uuid(&row.created_by)?,
    })
}

#[derive(Debug, Clone)]
pub struct RestaurantService<R = RestaurantRepository>
where
    R: RestaurantRepositoryTrait,
{
    pub restaurant_repo: Arc<R>,
    query_validator: QueryValidator,
}

impl RestaurantService<RestaurantRepository> {
    pub fn new(restaurant_repo: RestaurantRepository) -> Self {
        Self::with_repo(Arc::new(restaurant_repo))
    }
}

impl<R> RestaurantService<R>
where
    R: RestaurantRepositoryTrait,
{
    pub fn with_repo(restaurant_repo: Arc<R>) -> Self {
        Self {
            restaurant_repo,
            query_validator: QueryValidator::restaurants(),
        }
    }

    /// List restaurants for a validated page query. Rejected queries never
    /// reach the repository.
    pub async fn get_restaurants(
        &self,
        query: PageQuery,
    ) -> Result<PaginatedResult<Restaurant>, ServiceError> {
        let validation = self.query_validator.validate(&query);
        if !validation.is_ok() {
            return Err(ServiceError::Validation(validation.messages()));
        }

        let (rows, total) = self
            .restaurant_repo
            .get_restaurants_paginated(&query)
            .await
            .map_err(ServiceError::from)?;
        let restaurants: Vec<Restaurant> = rows
            .into_iter()
            .map(restaurant_from_row)
            .collect::<Result<_, _>>()?;

        Ok(PaginatedResult {
            items: restaurants,
            total,
            page: query.page_number,
            page_size: query.page_size,
            total_pages: ((total as f64) / (query.page_size as f64)).ceil() as u32,
        })
    }

    pub async fn get_restaurant(&self, id: Uuid) -> Result<Option<Restaurant>, ServiceError> {
        let row = self
            .restaurant_repo
            .get_restaurant(id)
            .await
            .map_err(ServiceError::from)?;
        row.map(restaurant_from_row).transpose()
    }

    pub async fn create_restaurant(
        &self,
        input: NewRestaurant,
        created_by: Uuid,
    ) -> Result<Restaurant, ServiceError> {
        validate_new_restaurant(&input)?;
        let row = self
            .restaurant_repo
            .create_restaurant(&input, created_by)
            .await
            .map_err(ServiceError::from)?;
        restaurant_from_row(row)
    }

    /// Update a restaurant. Only its creator or an administrator may do so.
    pub async fn update_restaurant(
        &self,
        id: Uuid,
        update: RestaurantUpdate,
        actor: &ActingUser,
    ) -> Result<Restaurant, ServiceError> {
        validate_restaurant_update(&update)?;

        let row = self
            .restaurant_repo
            .get_restaurant(id)
            .await
            .map_err(ServiceError::from)?
            .ok_or(ServiceError::NotFound)?;

        if authorize_mutation(&ownership_of(&row)?, actor) == Decision::Deny {
            return Err(ServiceError::Forbidden);
        }

        let updated = self
            .restaurant_repo
            .update_restaurant(id, &update)
            .await
            .map_err(ServiceError::from)?;
        restaurant_from_row(updated)
    }

    /// Delete a restaurant. Absence is reported as `NotFound` before any
    /// authorization decision is made.
    pub async fn delete_restaurant(
        &self,
        id: Uuid,
        actor: &ActingUser,
    ) -> Result<(), ServiceError> {
        let row = self
            .restaurant_repo
            .get_restaurant(id)
            .await
            .map_err(ServiceError::from)?
            .ok_or(ServiceError::NotFound)?;

        if authorize_mutation(&ownership_of(&row)?, actor) == Decision::Deny {
            tracing::debug!(restaurant_id = %id, actor_id = %actor.user_id, "delete denied");
            return Err(ServiceError::Forbidden);
        }

        self.restaurant_repo
            .delete_restaurant(id)
            .await
            .map_err(ServiceError::from)
    }
}
