use async_trait::async_trait;
use sqlx::{query, query_as, query_scalar, MySqlPool};
use uuid::Uuid;

use crate::entities::{NewRestaurant, RestaurantUpdate};
use crate::repository::errors::RepositoryError;
use crate::repository::models::RestaurantRow;
use crate::repository::traits::RestaurantRepositoryTrait;
use crate::validation::{PageQuery, SortDirection};

const RESTAURANT_COLUMNS: &str = "id, name, description, category, has_delivery, \
     contact_email, contact_number, city, street, postal_code, created_by";

/// Map an allow-listed sort field to its column. Unknown or absent fields
/// fall back to insertion order; the validator rejects unknown fields before
/// a query reaches the repository.
fn order_clause(query: &PageQuery) -> String {
    let column = match query.sort_by.as_deref() {
        Some("Name") => "name",
        Some("Description") => "description",
        Some("Category") => "category",
        _ => "id",
    };
    let direction = match query.sort_direction {
        SortDirection::Ascending => "ASC",
        SortDirection::Descending => "DESC",
    };
    format!("ORDER BY {column} {direction}")
}

#[derive(Debug, Clone)]
pub struct RestaurantRepository {
    pub pool: MySqlPool,
}

impl RestaurantRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepositoryTrait for RestaurantRepository {
    async fn create_restaurant(
        &self,
        restaurant: &NewRestaurant,
        created_by: Uuid,
    ) -> Result<RestaurantRow, RepositoryError> {
        let id = Uuid::new_v4();

        query(
            r#"
            INSERT INTO restaurants
                (id, name, description, category, has_delivery,
                 contact_email, contact_number, city, street, postal_code, created_by)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(&restaurant.name)
        .bind(&restaurant.description)
        .bind(&restaurant.category)
        .bind(restaurant.has_delivery)
        .bind(&restaurant.contact_email)
        .bind(&restaurant.contact_number)
        .bind(&restaurant.address.city)
        .bind(&restaurant.address.street)
        .bind(&restaurant.address.postal_code)
        .bind(created_by.to_string())
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        let row = query_as::<_, RestaurantRow>(&format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn get_restaurant(&self, id: Uuid) -> Result<Option<RestaurantRow>, RepositoryError> {
        let row = query_as::<_, RestaurantRow>(&format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn get_restaurants_paginated(
        &self,
        page: &PageQuery,
    ) -> Result<(Vec<RestaurantRow>, u64), RepositoryError> {
        let like = page
            .search_phrase
            .as_ref()
            .map(|phrase| format!("%{phrase}%"));
        let limit = page.page_size as u64;
        let offset = (page.page_number.max(1) as u64 - 1) * limit;
        let order = order_clause(page);

        let (rows, total) = match &like {
            Some(pattern) => {
                let rows = query_as::<_, RestaurantRow>(&format!(
                    "SELECT {RESTAURANT_COLUMNS} FROM restaurants \
                     WHERE name LIKE ? OR description LIKE ? {order} LIMIT ? OFFSET ?"
                ))
                .bind(pattern)
                .bind(pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(RepositoryError::from)?;

                let total = query_scalar::<_, i64>(
                    "SELECT COUNT(*) FROM restaurants WHERE name LIKE ? OR description LIKE ?",
                )
                .bind(pattern)
                .bind(pattern)
                .fetch_one(&self.pool)
                .await
                .map_err(RepositoryError::from)?;

                (rows, total)
            }
            None => {
                let rows = query_as::<_, RestaurantRow>(&format!(
                    "SELECT {RESTAURANT_COLUMNS} FROM restaurants {order} LIMIT ? OFFSET ?"
                ))
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(RepositoryError::from)?;

                let total = query_scalar::<_, i64>("SELECT COUNT(*) FROM restaurants")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(RepositoryError::from)?;

                (rows, total)
            }
        };

        Ok((rows, total as u64))
    }

    async fn update_restaurant(
        &self,
        id: Uuid,
        update: &RestaurantUpdate,
    ) -> Result<RestaurantRow, RepositoryError> {
        query(
            r#"
            UPDATE restaurants
            SET name = ?, description = ?, has_delivery = ?
            WHERE id = ?
            "#,
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.has_delivery)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        let row = query_as::<_, RestaurantRow>(&format!(
            "SELECT {RESTAURANT_COLUMNS} FROM restaurants WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn delete_restaurant(&self, id: Uuid) -> Result<(), RepositoryError> {
        query("DELETE FROM restaurants WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }
}
