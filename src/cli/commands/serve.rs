use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::initialize_app_state_with_url;
use crate::router::create_router;
use crate::schemas::AppState;

/// One-line description of what the server will answer from.
fn dataset_summary(state: &AppState) -> String {
    let window = state.dataset.window();
    format!(
        "{} observations loaded, {} in window {} to {}",
        state.dataset.len(),
        window.len(),
        window.start_date(),
        window.max_date()
    )
}

pub async fn serve(database_url: &str, bind_address: &str) -> Result<()> {
    let state = initialize_app_state_with_url(database_url)
        .await
        .inspect_err(|e| error!("Failed to load observations: {}", e))?;
    info!("{}", dataset_summary(&state));

    let app = create_router(state);

    let listener = TcpListener::bind(bind_address)
        .await
        .inspect_err(|e| error!("Failed to bind to address {}: {}", bind_address, e))?;

    info!("Climate server running on http://{}", bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
