use std::sync::Arc;

use auth::PasswordHasher;
use axum::Router;
use movies_api::authentication::gateway::AuthGateway;
use movies_api::authentication::ports::UserLookup;
use movies_api::config::Config;
use movies_api::inbound::http::router::create_router;
use movies_api::movie::ports::MovieRepository;
use movies_api::movie::service::MovieService;
use movies_api::repositories::InMemoryMovieRepository;
use movies_api::repositories::InMemoryUserRepository;
use movies_api::repositories::PostgresMovieRepository;
use movies_api::repositories::PostgresUserRepository;
use movies_api::user::ports::UserRepository;
use movies_api::user::service::UserService;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "movies-api",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;
    let settings = config.auth_settings();

    tracing::info!(
        http_port = config.server.http_port,
        token_ttl_hours = config.jwt.expiration_hours,
        lookup_timeout_ms = config.auth.lookup_timeout_ms,
        hash_memory_kib = settings.hash_cost.memory_kib,
        hash_iterations = settings.hash_cost.iterations,
        "Configuration loaded"
    );

    let http_application = if config.database.url.is_empty() {
        tracing::warn!(
            persistence = "in-memory",
            "No database configured, users and favorites are lost on restart"
        );
        build_application(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryMovieRepository::with_seed_catalog()?),
            &config,
        )?
    } else {
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

        build_application(
            Arc::new(PostgresUserRepository::new(pg_pool.clone())),
            Arc::new(PostgresMovieRepository::new(pg_pool)),
            &config,
        )?
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, http_application).await?;
    tracing::info!("Server exited");

    Ok(())
}

/// Wire the services; the user service and auth gateway share one user store.
fn build_application<R, M>(
    repository: Arc<R>,
    movie_repository: Arc<M>,
    config: &Config,
) -> Result<Router, anyhow::Error>
where
    R: UserRepository + UserLookup,
    M: MovieRepository,
{
    let settings = config.auth_settings();
    let password_hasher = PasswordHasher::with_cost(settings.hash_cost)?;

    let auth_gateway = AuthGateway::new(
        Arc::clone(&repository),
        config.jwt.secret.as_bytes(),
        settings,
    )?;
    let user_service = UserService::new(repository, password_hasher);
    let movie_service = MovieService::new(movie_repository);

    Ok(create_router(
        Arc::new(user_service),
        Arc::new(movie_service),
        Arc::new(auth_gateway),
    ))
}
