use std::sync::Arc;

use restaurant_lib::account_service::AccountService;
use restaurant_lib::dish_service::DishService;
use restaurant_lib::repository::traits::{
    DishRepositoryTrait, RestaurantRepositoryTrait, UserRepositoryTrait,
};
use restaurant_lib::repository::{DishRepository, RestaurantRepository, UserRepository};
use restaurant_lib::restaurant_service::RestaurantService;

use crate::error::is_prod_like;

#[derive(Clone)]
pub struct AppState<R = RestaurantRepository, D = DishRepository, U = UserRepository>
where
    R: RestaurantRepositoryTrait + Send + Sync + 'static,
    D: DishRepositoryTrait + Send + Sync + 'static,
    U: UserRepositoryTrait + Send + Sync + 'static,
{
    pub restaurant_service: Arc<RestaurantService<R>>,
    pub dish_service: Arc<DishService<D, R>>,
    pub account_service: Arc<AccountService<U>>,
    pub env: String,
}

impl<R, D, U> AppState<R, D, U>
where
    R: RestaurantRepositoryTrait + Send + Sync + 'static,
    D: DishRepositoryTrait + Send + Sync + 'static,
    U: UserRepositoryTrait + Send + Sync + 'static,
{
    pub fn is_prod_like(&self) -> bool {
        is_prod_like(&self.env)
    }
}
