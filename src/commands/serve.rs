use std::path::Path;

use anyhow::{Context, Result};
use tokio::net::TcpListener;

use super::load_config;

pub fn cmd_serve(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
    json: bool,
) -> Result<()> {
    let config = load_config(Path::new("."), config_path)?;
    let host = host.unwrap_or(config.serve.host);
    let port = port.unwrap_or(config.serve.port);
    let render = config.render;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(async move {
        let listener = TcpListener::bind((host.as_str(), port))
            .await
            .with_context(|| format!("failed to bind {host}:{port}"))?;
        let addr = listener.local_addr()?;

        if json {
            println!(
                "{}",
                serde_json::json!({ "event": "serving", "address": addr.to_string() })
            );
        } else {
            println!("🌐 BetterNotes convert server on http://{addr}");
            println!("Press Ctrl+C to stop\n");
        }

        betternotes::server::serve(listener, render, shutdown_signal()).await?;
        Ok::<_, anyhow::Error>(())
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
