mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use std::net::SocketAddr;

use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::{
    infrastructure::user_repository::{SqlUserRepository, ensure_schema},
    presentation::handlers::user_handler::create_user_router,
    usecase::create_user_usecase::CreateUserUsecase,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url =
        dotenvy::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_string());

    // An in-memory SQLite database lives and dies with its connection, so
    // the pool is pinned to a single one; every request must see the same
    // store for the unique indexes to mean anything.
    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt).await?;
    ensure_schema(&db).await?;

    let user_repository = SqlUserRepository::new(db);
    let create_user_service = CreateUserUsecase::new(user_repository);

    let app = create_user_router(create_user_service);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!(%addr, "listening");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
