//! Reading the dataset and configuration from disk.

use anyhow::Context;
use log::{info, warn};
use wx_data::chart::ChartLayout;
use wx_weather::Dataset;

/// Read and parse the weather CSV. Skipped rows are logged, not fatal;
/// a dataset with no usable rows is.
pub async fn load_dataset(csv_path: &str) -> anyhow::Result<Dataset> {
    let body = tokio::fs::read_to_string(csv_path)
        .await
        .with_context(|| format!("Failed to read {}", csv_path))?;
    let dataset = Dataset::from_csv_str(&body)
        .with_context(|| format!("Failed to parse {}", csv_path))?;

    if !dataset.skipped().is_empty() {
        warn!(
            "{} of {} rows in {} were skipped",
            dataset.skipped().len(),
            dataset.len() + dataset.skipped().len(),
            csv_path
        );
    }
    if dataset.is_empty() {
        anyhow::bail!("{} contains no usable weather rows", csv_path);
    }
    info!(
        "{}: {} records, {} cities, years {:?}",
        csv_path,
        dataset.len(),
        dataset.cities().len(),
        dataset.years()
    );
    Ok(dataset)
}

/// Read a `ChartLayout` JSON file, or fall back to the default layout.
pub async fn load_layout(layout_path: Option<&str>) -> anyhow::Result<ChartLayout> {
    let Some(path) = layout_path else {
        return Ok(ChartLayout::default());
    };
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read layout {}", path))?;
    let layout: ChartLayout = serde_json::from_str(&body)
        .with_context(|| format!("Failed to parse layout {}", path))?;
    if layout.inner_width() <= 0.0 || layout.inner_height() <= 0.0 {
        anyhow::bail!("Layout {} leaves no room for the chart", path);
    }
    Ok(layout)
}
