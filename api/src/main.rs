//! EcoHarmony Park ticketing API
//!
//! Sells park-entry tickets for groups of visitors: validates the purchase,
//! prices each visitor, routes payment and emails a confirmation.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::mail::sendgrid::Sender;
use adapters::{
    ConsoleNotifier, InMemoryUserDirectory, SandboxPaymentGateway, SendGridNotifier, SystemClock,
    WeekdayCalendar,
};
use app::TicketingService;
use config::Config;
use domain::ports::{Notifier, OpeningCalendar, PaymentInitiator, UserDirectory};

/// Application state shared across all handlers
pub struct AppState<U, C, P, N>
where
    U: UserDirectory,
    C: OpeningCalendar,
    P: PaymentInitiator,
    N: Notifier + ?Sized,
{
    pub ticketing_service: Arc<TicketingService<U, C, P, N>>,
}

impl<U, C, P, N> Clone for AppState<U, C, P, N>
where
    U: UserDirectory,
    C: OpeningCalendar,
    P: PaymentInitiator,
    N: Notifier + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            ticketing_service: self.ticketing_service.clone(),
        }
    }
}

type ProductionState =
    AppState<InMemoryUserDirectory, WeekdayCalendar, SandboxPaymentGateway, dyn Notifier>;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct IndexResponse {
    service: &'static str,
    version: &'static str,
    endpoints: [&'static str; 2],
}

async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        service: "EcoHarmony Park tickets",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ["POST /tickets/purchase", "GET /health"],
    })
}

/// Build the HTTP router
///
/// With a frontend directory, unknown paths fall back to its `index.html`.
fn router<U, C, P, N>(state: AppState<U, C, P, N>, frontend_dir: Option<&Path>) -> Router
where
    U: UserDirectory + 'static,
    C: OpeningCalendar + 'static,
    P: PaymentInitiator + 'static,
    N: Notifier + ?Sized + 'static,
{
    let api = Router::new()
        .route("/health", get(health))
        .route(
            "/tickets/purchase",
            post(handlers::purchase_tickets::<U, C, P, N>),
        );

    let app = match frontend_dir {
        Some(dir) => api.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => api.route("/", get(index)),
    };

    app.layer(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    )
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

fn build_state(config: &Config) -> ProductionState {
    let users = Arc::new(match &config.registered_users {
        Some(ids) => InMemoryUserDirectory::with_users(ids.iter().copied()),
        None => InMemoryUserDirectory::allow_all(),
    });
    let calendar = Arc::new(WeekdayCalendar::new(config.park_open_days.iter().copied()));
    tracing::info!(open_days = ?calendar.open_days(), "Park calendar configured");
    let payments = Arc::new(SandboxPaymentGateway::new(
        config.payment_checkout_url.clone(),
    ));

    let notifier: Arc<dyn Notifier> = match &config.sendgrid_api_key {
        Some(api_key) => Arc::new(SendGridNotifier::new(
            api_key.clone(),
            Sender {
                address: config.mail_from_address.clone(),
                name: config.mail_from_name.clone(),
            },
        )),
        None => {
            tracing::warn!("SENDGRID_API_KEY not set, confirmation emails will only be logged");
            Arc::new(ConsoleNotifier)
        }
    };

    let ticketing_service = Arc::new(TicketingService::new(
        users,
        calendar,
        payments,
        notifier,
        Arc::new(SystemClock),
    ));

    AppState { ticketing_service }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ecoharmony_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting EcoHarmony ticketing API...");

    // Load configuration
    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!(
        restricted_users = config.registered_users.is_some(),
        sendgrid = config.sendgrid_enabled(),
        "Configuration loaded"
    );

    let state = build_state(&config);
    let app = router(state, config.frontend_dir.as_deref());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
pub(crate) fn test_state<U, C, P, N>(
    users: U,
    calendar: C,
    payments: P,
    notifier: N,
) -> AppState<U, C, P, N>
where
    U: UserDirectory,
    C: OpeningCalendar,
    P: PaymentInitiator,
    N: Notifier,
{
    AppState {
        ticketing_service: Arc::new(TicketingService::new(
            Arc::new(users),
            Arc::new(calendar),
            Arc::new(payments),
            Arc::new(notifier),
            Arc::new(test_utils::FixedClock(test_utils::test_today())),
        )),
    }
}

#[cfg(test)]
pub(crate) fn test_server<U, C, P, N>(state: AppState<U, C, P, N>) -> axum_test::TestServer
where
    U: UserDirectory + 'static,
    C: OpeningCalendar + 'static,
    P: PaymentInitiator + 'static,
    N: Notifier + ?Sized + 'static,
{
    axum_test::TestServer::new(router(state, None)).unwrap()
}
