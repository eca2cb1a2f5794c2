use std::sync::Arc;

use lexbook_app::app::api::routes;
use lexbook_app::backend_handler::BackendHandler;
use lexbook_app::config::ConfigHandler;
use lexbook_app::schedule_handler::{ScheduleContext, ScheduleHandler};
use lexbook_core::config::load_config;
use lexbook_schedule::{SameDayPolicy, SystemClock};
use lexbook_service::availability::AvailabilityClient;
use salvo::conn::TcpListener;
use salvo::logging::Logger;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting Lexbook availability service");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let tz = config.schedule.tz()?;
    let schedule = ScheduleContext {
        clock: Arc::new(SystemClock::new(tz)),
        policy: SameDayPolicy::from_cutoff(config.schedule.cutoff()?),
    };
    tracing::info!(timezone = %tz, policy = ?schedule.policy, "Schedule clock configured");

    let client = AvailabilityClient::from_config(&config.backend)?;
    tracing::info!(backend = %client.base_url(), "Availability backend client created");

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(Logger::new())
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .hoop(ScheduleHandler { context: schedule })
        .hoop(BackendHandler { client })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}
