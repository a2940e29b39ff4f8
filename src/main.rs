use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use utility_billing::config::Config;
use utility_billing::middleware::RequestId;
use utility_billing::modules::bills::repositories::{BillStore, PgBillStore};
use utility_billing::modules::bills::services::BillingService;
use utility_billing::modules::houses::repositories::{HouseStore, PgHouseStore};
use utility_billing::modules::{bills, health, houses};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "utility_billing=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting utility billing service");
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool and bring the schema up to date
    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;

    sqlx::migrate!()
        .run(&db_pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    let house_store: Arc<dyn HouseStore> = Arc::new(PgHouseStore::new(db_pool.clone()));
    let bill_store: Arc<dyn BillStore> = Arc::new(PgBillStore::new(db_pool));
    let billing_service = Arc::new(BillingService::new(house_store.clone(), bill_store));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let cors = config.cors.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(house_store.clone()))
            .app_data(web::Data::new(billing_service.clone()))
            .wrap(cors.middleware())
            .wrap(TracingLogger::default())
            .wrap(RequestId)
            .configure(health::controllers::configure)
            .configure(houses::controllers::configure)
            .configure(bills::controllers::configure)
    })
    .workers(workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;

    Ok(())
}
