use std::sync::Arc;

use axum::Router;
use pagseguro_gateway::adapters::http::{checkout_router, CheckoutAppState};
use pagseguro_gateway::adapters::PagSeguroPaymentAdapter;
use pagseguro_gateway::application::{GatewayRegistry, PaymentGatewayAdapter};
use pagseguro_gateway::config::AppConfig;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    if config.server.json_logs() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if let Err(e) = config.validate() {
        tracing::error!(error = %e, "Invalid configuration");
        return Err(e.into());
    }

    let provider = Arc::new(PagSeguroPaymentAdapter::new(
        config.pagseguro.to_client_config(),
    ));
    let gateway = PaymentGatewayAdapter::new(provider, config.gateway.clone())?;
    let registry = GatewayRegistry::new().with_gateway(Arc::new(gateway))?;

    let app = Router::new()
        .nest("/api", checkout_router())
        .with_state(CheckoutAppState::new(Arc::new(registry)))
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .layer(TraceLayer::new_for_http());

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        pagseguro = ?config.pagseguro.environment,
        "PagSeguro gateway listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
