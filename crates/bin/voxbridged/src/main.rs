//! # voxbridged: voxbridge daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Install the `tracing` subscriber
//! - Construct the virtual hub (state store and service dispatcher)
//! - Construct the smart-home dispatcher and the audit event bus
//! - Build the axum router and serve it
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

use voxbridge_adapter_http_axum::router;
use voxbridge_adapter_http_axum::state::AppState;
use voxbridge_adapter_virtual::VirtualHub;
use voxbridge_app::event_bus::InProcessEventBus;
use voxbridge_app::smart_home::SmartHome;
use voxbridge_domain::entity::EntityId;
use voxbridge_domain::event::SmartHomeEvent;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::load().context("failed to load configuration")?;

    let filter = EnvFilter::try_new(&config.logging.filter)
        .with_context(|| format!("invalid log filter {:?}", config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Hub
    let hub = Arc::new(VirtualHub::from_config(&config.entities).context("invalid [[entities]]")?);
    tracing::info!(entities = hub.len(), "virtual hub ready");

    // Audit events
    let event_bus = Arc::new(InProcessEventBus::new(256));
    tokio::spawn(log_audit_events(event_bus.subscribe()));

    // HTTP
    let state = config.smart_home.enabled.then(|| {
        AppState::new(SmartHome::new(
            Arc::clone(&hub),
            Arc::clone(&hub),
            Arc::clone(&event_bus),
            config.smart_home.to_smart_home_config(),
        ))
    });
    let app = router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "voxbridged listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn log_audit_events(mut rx: broadcast::Receiver<SmartHomeEvent>) {
    loop {
        match rx.recv().await {
            Ok(event) => tracing::info!(
                event_id = %event.id,
                request_namespace = %event.request.namespace,
                request_name = %event.request.name,
                entity_id = event.request.entity_id.as_ref().map(EntityId::as_str),
                response_name = %event.response.name,
                context_id = %event.context.id,
                detail = event.detail.as_deref(),
                "smart home event"
            ),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "audit log fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
