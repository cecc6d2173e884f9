use axum::{extract::State, http::StatusCode, response::Html};
use compute::chart::{HISTOGRAM_TITLE, PRECIPITATION_TITLE};
use compute::{ChartImage, render_precipitation_bar_chart, render_temperature_histogram};
use std::sync::Arc;
use tracing::{error, instrument};

use crate::schemas::{AppState, PAGES};
use crate::views;

/// Landing page listing every page
#[instrument]
pub async fn index() -> Html<String> {
    Html(views::index_page(&PAGES))
}

/// Bar chart of precipitation for every reading in the last twelve months
#[instrument(skip(state))]
pub async fn precipitation_for_all_dates(
    State(state): State<AppState>,
) -> Result<Html<String>, StatusCode> {
    let dataset = Arc::clone(&state.dataset);
    let chart = render_off_thread(move || render_precipitation_bar_chart(dataset.window())).await?;

    Ok(Html(views::chart_page(PRECIPITATION_TITLE, &chart, &PAGES)))
}

/// Histogram of temperatures in the last twelve months
#[instrument(skip(state))]
pub async fn histogram_last_12_months(
    State(state): State<AppState>,
) -> Result<Html<String>, StatusCode> {
    let dataset = Arc::clone(&state.dataset);
    let chart = render_off_thread(move || render_temperature_histogram(dataset.window())).await?;

    Ok(Html(views::chart_page(HISTOGRAM_TITLE, &chart, &PAGES)))
}

/// Charts are CPU bound, so they are drawn on the blocking pool.
async fn render_off_thread<F>(render: F) -> Result<ChartImage, StatusCode>
where
    F: FnOnce() -> compute::error::Result<ChartImage> + Send + 'static,
{
    match tokio::task::spawn_blocking(render).await {
        Ok(Ok(chart)) => Ok(chart),
        Ok(Err(e)) => {
            error!("Failed to render chart: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
        Err(e) => {
            error!("Chart rendering task failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
