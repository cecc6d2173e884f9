use anyhow::{Context, Result};
use compute::{ClimateDataset, render_precipitation_bar_chart, render_temperature_histogram};
use sea_orm::Database;
use std::path::{Path, PathBuf};
use tracing::{info, debug, error};

pub const PRECIPITATION_FILE: &str = "precipitation_last_12_months.png";
pub const HISTOGRAM_FILE: &str = "temperature_histogram_last_12_months.png";

/// Renders both charts from the stored observations and writes them as PNG
/// files into `output_dir`. Returns the paths written.
pub async fn export_charts(database_url: &str, output_dir: &Path) -> Result<Vec<PathBuf>> {
    info!("Exporting charts to {}", output_dir.display());
    debug!("Database URL: {}", database_url);

    let db = match Database::connect(database_url).await {
        Ok(connection) => connection,
        Err(e) => {
            error!("Failed to connect to database '{}': {}", database_url, e);
            return Err(e.into());
        }
    };
    let dataset = ClimateDataset::load(&db).await?;
    db.close().await?;

    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let charts = [
        (PRECIPITATION_FILE, render_precipitation_bar_chart(dataset.window())?),
        (HISTOGRAM_FILE, render_temperature_histogram(dataset.window())?),
    ];

    let mut written = Vec::with_capacity(charts.len());
    for (file_name, chart) in charts {
        let path = output_dir.join(file_name);
        tokio::fs::write(&path, chart.png_bytes())
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
