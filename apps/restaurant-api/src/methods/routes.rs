// API v1 routes (nested under /v1)
pub const RESTAURANTS_PATH: &str = "/restaurants";
pub const RESTAURANTS_BY_ID_PATH: &str = "/restaurants/{id}";
pub const RESTAURANT_DISHES_PATH: &str = "/restaurants/{id}/dishes";
pub const RESTAURANT_DISH_BY_ID_PATH: &str = "/restaurants/{id}/dishes/{dish_id}";
pub const ACCOUNT_REGISTER_PATH: &str = "/account/register";
pub const ACCOUNT_LOGIN_PATH: &str = "/account/login";

// Root-level service routes (not versioned)
pub const SERVICE_HEALTH_PATH: &str = "/health";
pub const SERVICE_DOCS_PATH: &str = "/docs";

// API version prefix
pub const API_V1_PREFIX: &str = "/v1";
