use std::sync::Arc;

use anyhow::Context;

use claimsy_portal::config::PortalConfig;
use claimsy_portal::server::{AppState, build_router};
use claimsy_portal::store::{Database, MemoryBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = PortalConfig::from_env().context("Invalid portal configuration")?;
    let addr = config.socket_addr()?;

    eprintln!("Claimsy portal v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: http://{}/api", addr);
    eprintln!("   Vendor org: {}", config.vendor_org_id);
    eprintln!(
        "   Simulated latency: {}ms",
        config.simulated_latency.as_millis()
    );

    // ── Storage ─────────────────────────────────────────────────────────
    let db: Arc<dyn Database> = if config.seed_fixtures {
        eprintln!("   Fixtures: seeded");
        Arc::new(MemoryBackend::with_fixtures(config.simulated_latency))
    } else {
        Arc::new(MemoryBackend::new(config.simulated_latency))
    };

    let state = AppState::new(db, &config)
        .await
        .context("Failed to restore session")?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "Portal server started");
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
