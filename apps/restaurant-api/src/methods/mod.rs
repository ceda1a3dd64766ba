pub mod create_dish;
pub mod create_restaurant;
pub mod delete_dishes;
pub mod delete_restaurant;
pub mod entities;
pub mod get_dish_by_id;
pub mod get_dishes;
pub mod get_restaurant_by_id;
pub mod get_restaurants;
pub mod health_check;
pub mod login_user;
pub mod register_user;
pub mod routes;
pub mod update_restaurant;
