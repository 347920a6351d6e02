use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use bookstore_service::authentication::service::AuthService;
use bookstore_service::book::service::BookService;
use bookstore_service::config::Config;
use bookstore_service::inbound::http::router::create_router;
use bookstore_service::repositories::PostgresBookRepository;
use bookstore_service::repositories::PostgresSellerRepository;
use bookstore_service::seller::service::SellerService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstore_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "bookstore-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_connections = config.database.max_connections,
        jwt_algorithm = %config.jwt.algorithm,
        access_token_expire_minutes = config.jwt.access_token_expire_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::from_settings(
        config.jwt.secret.as_bytes(),
        &config.jwt.algorithm,
        config.jwt.access_token_expire_minutes,
    )?);

    let seller_repository = Arc::new(PostgresSellerRepository::new(pg_pool.clone()));
    let book_repository = Arc::new(PostgresBookRepository::new(pg_pool));

    let seller_service = Arc::new(SellerService::new(
        Arc::clone(&seller_repository),
        Arc::clone(&book_repository),
        PasswordHasher::new(),
    ));
    let book_service = Arc::new(BookService::new(
        Arc::clone(&book_repository),
        Arc::clone(&seller_repository),
    ));
    let auth_service = Arc::new(AuthService::new(seller_repository, authenticator));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(seller_service, book_service, auth_service);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");
    Ok(())
}
