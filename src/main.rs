use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use simbly_backend::{
    AppState,
    config::Config,
    handlers,
    services::{
        order_stats::{DbPurchaseOrderSource, OrderStatsService},
        resend::ResendService,
        retell::RetellService,
        supabase_rest::SupabaseRestClient,
    },
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,simbly_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    // Connect to database
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    tracing::info!("Running migrations...");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    // Wire services; the upstream API keys are optional at boot
    let retell = config
        .retell_api_key
        .clone()
        .map(|key| RetellService::new(key, config.retell_base_url.clone()));
    if retell.is_none() {
        tracing::warn!("RETELL_API_KEY not set; /api/retellCallStats will answer 500");
    }

    let resend = config.resend_api_key.clone().map(|key| {
        ResendService::new(
            key,
            config.resend_from_email.clone(),
            config.resend_base_url.clone(),
        )
    });
    if resend.is_none() {
        tracing::warn!("RESEND_API_KEY not set; /api/sendWaitlistEmail will answer 500");
    }

    let supabase_rest = SupabaseRestClient::new(
        config.supabase_url.clone(),
        config.supabase_anon_key.clone(),
    );
    let order_stats = OrderStatsService::new(
        Arc::new(DbPurchaseOrderSource::new(db.clone())),
        supabase_rest,
    );

    let state = AppState {
        db,
        retell,
        resend,
        order_stats,
    };

    // Build router
    let app = Router::new()
        .route("/", get(health))
        .route(
            "/api/retellCallStats",
            get(handlers::call_stats::get_retell_call_stats),
        )
        .route("/api/orderStats", get(handlers::order_stats::get_order_stats))
        .route(
            "/api/purchase-orders",
            get(handlers::purchase_order::list_purchase_orders),
        )
        .route("/api/consignees", get(handlers::consignee::list_consignees))
        .route("/api/suppliers", get(handlers::supplier::list_suppliers))
        .route("/api/debtors", get(handlers::debtor::list_debtors))
        .route(
            "/api/sendWaitlistEmail",
            post(handlers::waitlist::send_waitlist_email),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listener");

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

async fn health() -> &'static str {
    "simbly-backend is up"
}
