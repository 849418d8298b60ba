//! # Supa Link Bot Main Entry Point
//!
//! Initializes logging, loads configuration, registers the command menu,
//! and runs the Telegram dispatcher next to the health server.

use anyhow::Result;
use teloxide::dispatching::ShutdownToken;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use supa_link_bot::bot::{commands::register_command_menu, handlers, startup};
use supa_link_bot::config::Config;
use supa_link_bot::services::health::{HealthService, Readiness};
use supa_link_bot::utils::logging::log_system_event;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "supa_link_bot=debug,teloxide=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing token ends the process here
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Supa Link Bot v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded - HTTP Port: {}", config.http_port);

    let bot = Bot::new(&config.bot_token);
    info!("Bot instance created");

    // A rejected token or unreachable API ends the process here, before
    // readiness is reported
    let readiness = Readiness::default();
    startup::connect(&bot, &readiness).await?;

    match register_command_menu(&bot).await {
        Ok(()) => log_system_event("Bot commands menu updated", None),
        Err(e) => tracing::error!("Failed to set bot commands: {}", e),
    }

    // Health server
    let health_service = HealthService::new(readiness.clone());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Health check server starting on port {}", config.http_port);

    let mut dispatcher = Dispatcher::builder(bot, handlers::schema())
        .default_handler(|upd| async move {
            tracing::debug!("Unhandled update {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build();

    spawn_sigterm_handler(dispatcher.shutdown_token());

    let health_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_service.router).await {
            tracing::error!("Health server error: {}", e);
        }
    });

    info!("🤖 Supa Link Bot started, polling for updates");

    tokio::select! {
        _ = dispatcher.dispatch() => {
            log_system_event("Dispatcher stopped", None);
        }
        result = health_task => {
            if let Err(e) = result {
                tracing::error!("Health task error: {}", e);
            }
        }
    }

    info!("Application stopped");
    Ok(())
}

/// Stops the dispatcher on SIGTERM; Ctrl-C is handled by the dispatcher itself.
#[cfg(unix)]
fn spawn_sigterm_handler(token: ShutdownToken) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                tracing::warn!("Could not install SIGTERM handler: {}", e);
                return;
            }
        };

        sigterm.recv().await;
        log_system_event("Stopping bot (SIGTERM)", None);
        match token.shutdown() {
            Ok(done) => done.await,
            Err(_) => tracing::debug!("Dispatcher was idle at SIGTERM"),
        }
    });
}

#[cfg(not(unix))]
fn spawn_sigterm_handler(_token: ShutdownToken) {}
