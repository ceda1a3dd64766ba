use async_trait::async_trait;
use sqlx::{query, query_as, MySqlPool};
use uuid::Uuid;

use crate::entities::NewDish;
use crate::repository::errors::RepositoryError;
use crate::repository::models::DishRow;
use crate::repository::traits::DishRepositoryTrait;

#[derive(Debug, Clone)]
pub struct DishRepository {
    pub pool: MySqlPool,
}

impl DishRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DishRepositoryTrait for DishRepository {
    async fn create_dish(
        &self,
        restaurant_id: Uuid,
        dish: &NewDish,
    ) -> Result<DishRow, RepositoryError> {
        let id = Uuid::new_v4();

        query(
            r#"
            INSERT INTO dishes (id, restaurant_id, name, description, price)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(id.to_string())
        .bind(restaurant_id.to_string())
        .bind(&dish.name)
        .bind(&dish.description)
        .bind(dish.price)
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        let row = query_as::<_, DishRow>(
            r#"
            SELECT id, restaurant_id, name, description, price
            FROM dishes WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn get_dish(&self, dish_id: Uuid) -> Result<Option<DishRow>, RepositoryError> {
        let row = query_as::<_, DishRow>(
            r#"
            SELECT id, restaurant_id, name, description, price
            FROM dishes WHERE id = ?
            "#,
        )
        .bind(dish_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(row)
    }

    async fn get_dishes_for_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<Vec<DishRow>, RepositoryError> {
        let rows = query_as::<_, DishRow>(
            r#"
            SELECT id, restaurant_id, name, description, price
            FROM dishes WHERE restaurant_id = ?
            "#,
        )
        .bind(restaurant_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(RepositoryError::from)?;

        Ok(rows)
    }

    async fn delete_dishes_for_restaurant(
        &self,
        restaurant_id: Uuid,
    ) -> Result<(), RepositoryError> {
        query("DELETE FROM dishes WHERE restaurant_id = ?")
            .bind(restaurant_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::from)?;

        Ok(())
    }
}
