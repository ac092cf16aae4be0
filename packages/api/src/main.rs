use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use api::config::Config;
use api::state::AppState;
use shared::repositories::cart_repository::DynamoDbCartRepository;
use shared::services::auth_service::AuthService;
use shared::services::cart_service::CartService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Set up services
    let aws_config = aws_config::load_from_env().await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);

    let cart_repository = Arc::new(DynamoDbCartRepository::new(
        client,
        config.carts_table.clone(),
    ));
    let cart_service = Arc::new(CartService::new(cart_repository));
    let auth_service = Arc::new(AuthService::new(config.jwt_secret.clone()));

    let app_state = AppState {
        auth_service,
        cart_service,
    };

    let app = api::create_app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Cart service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
