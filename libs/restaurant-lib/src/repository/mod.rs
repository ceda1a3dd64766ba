pub mod dish_repository;
pub mod errors;
pub mod models;
pub mod restaurant_repository;
pub mod traits;
pub mod user_repository;

pub use dish_repository::DishRepository;
pub use errors::RepositoryError;
pub use restaurant_repository::RestaurantRepository;
pub use user_repository::UserRepository;
