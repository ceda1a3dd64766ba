use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    middleware::from_fn,
    routing::{get, post, put},
    Extension, Router,
};
use secrecy::ExposeSecret;
use tokio::net::TcpListener;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use restaurant_lib::account_service::AccountService;
use restaurant_lib::auth::JwtAuth;
use restaurant_lib::dish_service::DishService;
use restaurant_lib::repository::dish_repository::DishRepository;
use restaurant_lib::repository::restaurant_repository::RestaurantRepository;
use restaurant_lib::repository::user_repository::UserRepository;
use restaurant_lib::restaurant_service::RestaurantService;
use restaurant_lib::util::connect_with_retry;

use restaurant_api::config::{AuthConfig, MiddlewareConfig};
use restaurant_api::constants::{DATABASE_URL, ENV, LOCAL_ENV, RESTAURANT_API_PORT, SERVICE};
use restaurant_api::methods::create_dish::create_dish;
use restaurant_api::methods::create_restaurant::create_restaurant;
use restaurant_api::methods::delete_dishes::delete_dishes;
use restaurant_api::methods::delete_restaurant::delete_restaurant;
use restaurant_api::methods::entities::{
    CreateDishRequest, CreateRestaurantRequest, DishResponse, LoginRequest, LoginResponse,
    PaginatedResponse, RegisterUserRequest, RestaurantResponse, SortDirectionParam,
    UpdateRestaurantRequest, UserResponse,
};
use restaurant_api::methods::get_dish_by_id::get_dish_by_id;
use restaurant_api::methods::get_dishes::get_dishes;
use restaurant_api::methods::get_restaurant_by_id::get_restaurant_by_id;
use restaurant_api::methods::get_restaurants::get_restaurants;
use restaurant_api::methods::health_check::health_check;
use restaurant_api::methods::login_user::login_user;
use restaurant_api::methods::register_user::register_user;
use restaurant_api::methods::update_restaurant::update_restaurant;
use restaurant_api::methods::routes::{
    ACCOUNT_LOGIN_PATH, ACCOUNT_REGISTER_PATH, API_V1_PREFIX, RESTAURANTS_BY_ID_PATH,
    RESTAURANTS_PATH, RESTAURANT_DISHES_PATH, RESTAURANT_DISH_BY_ID_PATH, SERVICE_DOCS_PATH,
    SERVICE_HEALTH_PATH,
};
use restaurant_api::middleware::auth::require_auth;
use restaurant_api::shutdown::shutdown_signal;
use restaurant_api::state::AppState;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurant_api::methods::get_restaurants::get_restaurants,
        restaurant_api::methods::get_restaurant_by_id::get_restaurant_by_id,
        restaurant_api::methods::create_restaurant::create_restaurant,
        restaurant_api::methods::update_restaurant::update_restaurant,
        restaurant_api::methods::delete_restaurant::delete_restaurant,
        restaurant_api::methods::get_dishes::get_dishes,
        restaurant_api::methods::get_dish_by_id::get_dish_by_id,
        restaurant_api::methods::create_dish::create_dish,
        restaurant_api::methods::delete_dishes::delete_dishes,
        restaurant_api::methods::register_user::register_user,
        restaurant_api::methods::login_user::login_user
    ),
    components(schemas(
        CreateRestaurantRequest, UpdateRestaurantRequest, RestaurantResponse,
        CreateDishRequest, DishResponse,
        RegisterUserRequest, UserResponse, LoginRequest, LoginResponse,
        SortDirectionParam,
        PaginatedResponse<RestaurantResponse>
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "restaurants", description = "Restaurant management endpoints"),
        (name = "dishes", description = "Dish management endpoints"),
        (name = "account", description = "Registration and login endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing subscriber
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let env =
        std::env::var(ENV).map_err(|_| format!("{} environment variable must be set", ENV))?;

    let registry = tracing_subscriber::registry().with(filter);

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true);

    if env == LOCAL_ENV {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty();
        registry.with(json_layer).with(pretty_layer).init();
    } else {
        registry.with(json_layer).init();
    }

    tracing::info!(service = SERVICE, env = %env, "tracing initialized");

    // Load middleware and token configuration from environment
    let middleware_config = MiddlewareConfig::from_env();
    tracing::info!(
        rate_limit_per_minute = middleware_config.rate_limit_per_minute,
        rate_limit_burst = middleware_config.rate_limit_burst,
        request_timeout_secs = middleware_config.request_timeout.as_secs(),
        max_body_size = middleware_config.max_body_size,
        cors_origins = ?middleware_config.cors_allowed_origins,
        "middleware configuration loaded"
    );

    let auth_config = AuthConfig::from_env()?;
    let jwt = Arc::new(JwtAuth::new(
        auth_config.jwt_secret.expose_secret(),
        auth_config.token_ttl_secs,
    ));

    // Setup database pool
    let database_url = std::env::var(DATABASE_URL)
        .map_err(|_| format!("{} environment variable must be set", DATABASE_URL))?;

    let pool = connect_with_retry(&database_url, 10).await?;

    // Create shared services
    let restaurant_repo = Arc::new(RestaurantRepository::new(pool.clone()));
    let restaurant_service = RestaurantService::with_repo(restaurant_repo.clone());
    let dish_service = DishService::with_repos(
        Arc::new(DishRepository::new(pool.clone())),
        restaurant_repo,
    );
    let account_service = AccountService::with_repo(
        Arc::new(UserRepository::new(pool.clone())),
        jwt.as_ref().clone(),
    );

    let app_state = AppState {
        restaurant_service: Arc::new(restaurant_service),
        dish_service: Arc::new(dish_service),
        account_service: Arc::new(account_service),
        env: env.clone(),
    };

    // Anonymous endpoints: reads, registration and login
    let public_v1 = Router::new()
        .route(RESTAURANTS_PATH, get(get_restaurants))
        .route(RESTAURANTS_BY_ID_PATH, get(get_restaurant_by_id))
        .route(RESTAURANT_DISHES_PATH, get(get_dishes))
        .route(RESTAURANT_DISH_BY_ID_PATH, get(get_dish_by_id))
        .route(ACCOUNT_REGISTER_PATH, post(register_user))
        .route(ACCOUNT_LOGIN_PATH, post(login_user));

    // Mutations require a verified identity
    let protected_v1 = Router::new()
        .route(RESTAURANTS_PATH, post(create_restaurant))
        .route(
            RESTAURANTS_BY_ID_PATH,
            put(update_restaurant).delete(delete_restaurant),
        )
        .route(
            RESTAURANT_DISHES_PATH,
            post(create_dish).delete(delete_dishes),
        )
        .layer(from_fn(require_auth))
        .layer(Extension(jwt.clone()));

    let v1_routes = public_v1.merge(protected_v1);

    // Build root-level routes (health, docs)
    let root_routes = Router::new()
        .route(SERVICE_HEALTH_PATH, get(health_check))
        .merge(SwaggerUi::new(SERVICE_DOCS_PATH).url("/api-doc/openapi.json", ApiDoc::openapi()));

    // Combine routes: nest v1 under /v1, keep health and docs at root
    let mut app = Router::new()
        .nest(API_V1_PREFIX, v1_routes)
        .merge(root_routes)
        .with_state(app_state);

    // ============================================
    // Middleware stack (applied inner to outer)
    // Order: Request → Rate Limit → Timeout → CORS → Body Limit → Request ID → Trace → Handler
    // ============================================

    // 1. Trace layer (innermost - closest to handler)
    app = app.layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(tracing::Level::DEBUG))
            .on_response(DefaultOnResponse::new().level(tracing::Level::DEBUG)),
    );

    // 2. Request ID layers
    let x_request_id = HeaderName::from_static("x-request-id");
    app = app
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(
            x_request_id.clone(),
            MakeRequestUuid,
        ));

    // 3. Body limit layer
    app = app.layer(RequestBodyLimitLayer::new(middleware_config.max_body_size));

    // 4. CORS layer
    let cors_layer = if middleware_config.cors_allowed_origins.contains(&"*".to_string()) {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, x_request_id])
    } else {
        let origins: Vec<_> = middleware_config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::CONTENT_TYPE,
                header::AUTHORIZATION,
                HeaderName::from_static("x-request-id"),
            ])
    };
    app = app.layer(cors_layer);

    // 5. Timeout layer (returns 408 Request Timeout)
    app = app.layer(TimeoutLayer::with_status_code(
        StatusCode::REQUEST_TIMEOUT,
        middleware_config.request_timeout,
    ));

    // 6. Rate limiting layer (outermost)
    // Calculate milliseconds between requests: 60000ms / requests_per_minute
    let replenish_interval_ms = 60_000 / middleware_config.rate_limit_per_minute as u64;
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_interval_ms)
            .burst_size(middleware_config.rate_limit_burst)
            .finish()
            .expect("failed to build governor config"),
    );
    app = app.layer(GovernorLayer {
        config: governor_conf,
    });

    // Read port from env (default to 3333)
    let port: u16 = std::env::var(RESTAURANT_API_PORT)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3333);

    let addr = format!("0.0.0.0:{}", port);
    let public_url = format!("http://127.0.0.1:{}", port);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("restaurant-api is ready to accept requests at: {}", public_url);
    tracing::info!("API v1 endpoints available at: {}/v1", public_url);

    // Serve with graceful shutdown
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(middleware_config.shutdown_timeout))
    .await
    .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}
