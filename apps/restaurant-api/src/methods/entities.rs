use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use restaurant_lib::entities::{
    Address, Dish, NewDish, NewRestaurant, PaginatedResult, Restaurant, RestaurantUpdate, User,
};
use restaurant_lib::validation::{PageQuery, RegisterRequest, SortDirection};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRestaurantRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub has_delivery: bool,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    pub city: String,
    pub street: String,
    #[serde(default)]
    pub postal_code: Option<String>,
}

impl From<CreateRestaurantRequest> for NewRestaurant {
    fn from(request: CreateRestaurantRequest) -> Self {
        NewRestaurant {
            name: request.name,
            description: request.description,
            category: request.category,
            has_delivery: request.has_delivery,
            contact_email: request.contact_email,
            contact_number: request.contact_number,
            address: Address {
                city: request.city,
                street: request.street,
                postal_code: request.postal_code,
            },
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRestaurantRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub has_delivery: bool,
}

impl From<UpdateRestaurantRequest> for RestaurantUpdate {
    fn from(request: UpdateRestaurantRequest) -> Self {
        RestaurantUpdate {
            name: request.name,
            description: request.description,
            has_delivery: request.has_delivery,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub has_delivery: bool,
    pub contact_email: Option<String>,
    pub contact_number: Option<String>,
    pub city: String,
    pub street: String,
    pub postal_code: Option<String>,
}

impl From<Restaurant> for RestaurantResponse {
    fn from(restaurant: Restaurant) -> Self {
        RestaurantResponse {
            id: restaurant.id,
            name: restaurant.name,
            description: restaurant.description,
            category: restaurant.category,
            has_delivery: restaurant.has_delivery,
            contact_email: restaurant.contact_email,
            contact_number: restaurant.contact_number,
            city: restaurant.address.city,
            street: restaurant.address.street,
            postal_code: restaurant.address.postal_code,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDishRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
}

impl From<CreateDishRequest> for NewDish {
    fn from(request: CreateDishRequest) -> Self {
        NewDish {
            name: request.name,
            description: request.description,
            price: request.price,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DishResponse {
    pub id: Uuid,
    pub restaurant_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}

impl From<Dish> for DishResponse {
    fn from(dish: Dish) -> Self {
        DishResponse {
            id: dish.id,
            restaurant_id: dish.restaurant_id,
            name: dish.name,
            description: dish.description,
            price: dish.price,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

impl From<RegisterUserRequest> for RegisterRequest {
    fn from(request: RegisterUserRequest) -> Self {
        RegisterRequest {
            email: request.email,
            password: request.password,
            confirm_password: request.confirm_password,
            nationality: request.nationality,
            date_of_birth: request.date_of_birth,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub nationality: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub roles: Vec<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            email: user.email,
            nationality: user.nationality,
            date_of_birth: user.date_of_birth,
            roles: user.roles,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, ToSchema)]
pub enum SortDirectionParam {
    Ascending,
    Descending,
}

impl From<SortDirectionParam> for SortDirection {
    fn from(direction: SortDirectionParam) -> Self {
        match direction {
            SortDirectionParam::Ascending => SortDirection::Ascending,
            SortDirectionParam::Descending => SortDirection::Descending,
        }
    }
}

/// List query parameters. `pageNumber` and `pageSize` are required; a
/// request without them is rejected before validation even runs.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct RestaurantQueryParams {
    pub page_number: u32,
    pub page_size: u32,
    pub search_phrase: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirectionParam>,
}

impl From<RestaurantQueryParams> for PageQuery {
    fn from(params: RestaurantQueryParams) -> Self {
        PageQuery {
            page_number: params.page_number,
            page_size: params.page_size,
            search_phrase: params.search_phrase,
            sort_by: params.sort_by,
            sort_direction: params
                .sort_direction
                .map(SortDirection::from)
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T, U> From<PaginatedResult<T>> for PaginatedResponse<U>
where
    U: From<T>,
{
    fn from(result: PaginatedResult<T>) -> Self {
        PaginatedResponse {
            items: result.items.into_iter().map(U::from).collect(),
            total: result.total,
            page: result.page,
            page_size: result.page_size,
            total_pages: result.total_pages,
        }
    }
}
