//! LedBridge — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP (axum)           POST /set_led ──set──┐            │
//! │                                             ▼            │
//! │                                       StatusStore        │
//! │                                             │ get        │
//! │  Render task (tokio)   IndicatorService ◀───┘            │
//! │                              │ show                      │
//! │                              ▼                           │
//! │                       HardwareAdapter (G / Y / R)        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Ctrl+C / SIGTERM cancels a shared token: the server drains, the render
//! task forces every LED LOW, then the process exits. A GPIO write
//! failure cancels the same token and the process exits non-zero.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use log::{info, warn};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use ledbridge::adapters::config_file::JsonConfigFile;
use ledbridge::adapters::hardware;
use ledbridge::adapters::http;
use ledbridge::adapters::log_sink::LogEventSink;
use ledbridge::app::ports::{ConfigError, ConfigPort};
use ledbridge::app::service::IndicatorService;
use ledbridge::app::store::StatusStore;
use ledbridge::config::IndicatorConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("LedBridge v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config (file or defaults) ──────────────────────────
    let config_port = JsonConfigFile::from_env();
    let config = match config_port.load() {
        Ok(cfg) => cfg,
        Err(ConfigError::NotFound) => {
            warn!("No config file, using defaults");
            IndicatorConfig::default()
        }
        Err(e) => return Err(anyhow!(e).context("loading configuration")),
    };

    info!(
        "Wiring: GREEN={}, YELLOW={}, RED={} ({})",
        config.green_line, config.yellow_line, config.red_line, config.gpio_chip
    );

    // ── 3. Hardware (all LOW) ─────────────────────────────────
    let hw = hardware::open(&config).context("initialising LED outputs")?;

    // ── 4. Shared state + render task ─────────────────────────
    let store = Arc::new(StatusStore::new(config.initial_status()));
    let cancel = CancellationToken::new();

    let service = IndicatorService::new(hw, LogEventSink::new());
    let renderer = tokio::spawn(service.run(
        Arc::clone(&store),
        config.tick_interval(),
        cancel.clone(),
    ));

    // ── 5. Signals ────────────────────────────────────────────
    tokio::spawn(cancel_on_signal(cancel.clone()));

    // ── 6. HTTP endpoint ──────────────────────────────────────
    let addr = config.socket_addr();
    let served = match TcpListener::bind(addr).await {
        Ok(listener) => {
            info!("Listening on http://{}{}", addr, http::SET_LED_PATH);
            http::serve(listener, Arc::clone(&store), cancel.clone())
                .await
                .with_context(|| format!("serving on {}", addr))
        }
        Err(e) => Err(anyhow!(e).context(format!("binding {}", addr))),
    };

    // ── 7. Shutdown: stop rendering, outputs to safe state ────
    cancel.cancel();
    let rendered = renderer.await.context("render task panicked")?;
    info!("Exiting.");

    served?;
    rendered.context("indicator hardware fault")
}

/// Cancel `token` on Ctrl+C or SIGTERM.
async fn cancel_on_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Ctrl+C received, shutting down"),
        () = terminate => info!("SIGTERM received, shutting down"),
        () = token.cancelled() => return,
    }
    token.cancel();
}
