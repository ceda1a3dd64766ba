use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct RestaurantRow {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub has_delivery: bool,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub city: String,
    pub street: String,
    pub postal_code: Option<String>,
    pub created_by: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct DishRow {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub role: String,
}

/// Column values for a user insert; the id is generated by the repository.
#[derive(Debug, Clone)]
pub struct NewUserRow {
    pub email: String,
    pub password_hash: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub role: String,
}
