//! Serve command - build, then serve the output directory

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;

use crate::server::create_router;

/// Run the serve command.
///
/// Builds the site once and serves the output on `127.0.0.1:port` until
/// interrupted. Pages are not rebuilt while serving.
pub async fn run(config_path: &Path, port: u16) -> Result<()> {
    tracing::info!(?config_path, port, "Starting server");

    let output = super::build::run(config_path, None)?;
    let app = create_router(&output);

    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!("  Serving {} at http://{addr}", output.display());
    println!("  Press Ctrl+C to stop");
    println!();

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}
