//! relayguard — reachability-driven relay failover daemon.
//!
//! Watches a remote automation server by probing a liveness endpoint on a
//! fixed interval. While the server is reachable the relay stays in
//! `Detached` mode (output held on, physical input ignored); after a
//! debounced run of consecutive probe failures the relay is switched to
//! `Follow` mode (output mirrors the physical input) so the switch keeps
//! working without the server. The first successful probe switches back.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────┐
//!   │                      FAILOVER LOOP                       │
//!   │                                                          │
//!   │  ┌───────────┐   tick    ┌────────┐  ProbeResult         │
//!   │  │ scheduler │──────────▶│ prober │──────────┐           │
//!   │  └───────────┘           └────┬───┘          ▼           │
//!   │        ▲                      │         ┌───────────┐    │
//!   │        │ interval             │ HTTP    │ debouncer │    │
//!   │        │ (single-flight)      ▼         └─────┬─────┘    │
//!   │        │               liveness endpoint      │ decision │
//!   │        │                                      ▼          │
//!   │        │                              ┌────────────────┐ │
//!   │        └──────────────────────────────│ mode controller│ │
//!   │                                       └───────┬────────┘ │
//!   └───────────────────────────────────────────────┼──────────┘
//!                                                   │ set_mode
//!                                                   ▼
//!                                           actuator (relay device)
//! ```
//!
//! Cross-cutting concerns: config (TOML, validated at startup), lifecycle
//! (signal-driven graceful shutdown), observability (tracing + Prometheus
//! metrics).

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use relayguard::actuator::HttpActuator;
use relayguard::config::load_config;
use relayguard::failover::{Debouncer, FailoverLoop, ModeController};
use relayguard::lifecycle::{signals, Shutdown};
use relayguard::observability::{logging, metrics};
use relayguard::probe::HttpProber;

#[derive(Parser)]
#[command(name = "relayguard")]
#[command(about = "Reachability-driven relay failover controller", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "relayguard.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Configuration errors are the only fatal class; everything after this
    // point keeps the control loop alive.
    let config = load_config(&cli.config)?;

    logging::init(&config.observability);

    tracing::info!(
        endpoint = %config.probe.endpoint,
        interval_secs = config.scheduler.interval_secs,
        failure_threshold = config.debounce.failure_threshold,
        channel_id = config.actuator.channel_id,
        "relayguard v0.1.0 starting"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let prober = HttpProber::new(&config.probe);
    let actuator = HttpActuator::new(&config.actuator);
    let controller = ModeController::new(actuator, config.actuator.channel_id);
    let debouncer = Debouncer::new(config.debounce.failure_threshold);

    let shutdown = Shutdown::new();
    let loop_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::shutdown_signal().await;
        tracing::info!("Shutdown signal received");
        shutdown.trigger();
    });

    let interval = Duration::from_secs(config.scheduler.interval_secs);
    let failover = FailoverLoop::new(prober, debouncer, controller, interval);
    failover.run(loop_shutdown).await;

    tracing::info!("Shutdown complete");
    Ok(())
}
