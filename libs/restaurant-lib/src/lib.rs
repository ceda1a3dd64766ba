pub mod account_service;
pub mod auth;
pub mod authorization;
pub mod dish_service;
pub mod entities;
pub mod errors_service;
pub mod password;
pub mod repository;
pub mod restaurant_service;
pub mod util;
pub mod validation;

pub use account_service::*;
pub use authorization::*;
pub use dish_service::*;
pub use entities::*;
pub use errors_service::*;
pub use restaurant_service::*;
pub use validation::*;
