use std::sync::Arc;

use anyhow::Error;
use auth::default_window;
use auth::parse_window;
use auth::TokenIssuer;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use task_service::config::Config;
use task_service::domain::session::ports::SessionServicePort;
use task_service::domain::session::service::SessionService;
use task_service::domain::task::service::TaskService;
use task_service::inbound::http::router::create_router;
use task_service::outbound::repositories::PostgresRefreshTokenRepository;
use task_service::outbound::repositories::PostgresTaskRepository;
use task_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn window_from_spec(spec: &str, setting: &str) -> Duration {
    match parse_window(spec) {
        Some(window) => window,
        None => {
            tracing::warn!(
                setting,
                spec,
                "Unparseable token expiry, falling back to 7 days"
            );
            default_window()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "task_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "task-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        access_token_expiry = %config.auth.access_token_expiry,
        refresh_token_expiry = %config.auth.refresh_token_expiry,
        "Configuration loaded"
    );

    if config.auth.uses_placeholder_secrets() {
        tracing::warn!(
            "Signing secrets are unset, using insecure placeholder defaults"
        );
    }

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let access_window = window_from_spec(&config.auth.access_token_expiry, "access_token_expiry");
    let refresh_window =
        window_from_spec(&config.auth.refresh_token_expiry, "refresh_token_expiry");

    let token_issuer = Arc::new(TokenIssuer::new(
        config.auth.access_token_secret.as_bytes(),
        config.auth.refresh_token_secret.as_bytes(),
        access_window,
        refresh_window,
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let refresh_token_repository = Arc::new(PostgresRefreshTokenRepository::new(pg_pool.clone()));
    let task_repository = Arc::new(PostgresTaskRepository::new(pg_pool));

    let session_service = Arc::new(SessionService::new(
        user_repository,
        refresh_token_repository,
        Arc::clone(&token_issuer),
    ));
    let task_service = Arc::new(TaskService::new(task_repository));

    match session_service.cleanup_expired_tokens().await {
        Ok(removed) => tracing::info!(removed, "Expired refresh tokens swept"),
        Err(e) => tracing::warn!(error = %e, "Expired refresh token sweep failed"),
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Server listening"
    );

    let application = create_router(session_service, task_service, token_issuer);

    axum::serve(listener, application).await?;

    Ok(())
}
