//! Per-result enrichment fan-out and ordered join

use futures::future::{join, join_all};
use leafscan_common::{ClassificationResult, EnrichedRow, Treatment};
use web_sys::File;

use crate::api::{self, ApiConfig};
use crate::notify;
use crate::reader;

/// Build one enriched row per classification, in batch order.
///
/// Preview decode and treatment lookup run concurrently within each
/// row, and all rows run concurrently with each other. The returned
/// vector is complete before the caller touches the results view, so
/// the table replacement is atomic and ordering never depends on
/// completion timing.
pub async fn enrich_rows(
    config: &ApiConfig,
    pairs: Vec<(File, ClassificationResult)>,
) -> Vec<EnrichedRow> {
    let row_tasks = pairs.into_iter().map(|(file, classification)| async move {
        let (preview, treatment) = join(
            reader::read_data_url(&file),
            treatment_or_placeholder(config, &classification.disease),
        )
        .await;
        EnrichedRow {
            classification,
            preview,
            treatment,
        }
    });

    join_all(row_tasks).await
}

/// A failed lookup degrades this row to the placeholder without
/// touching any other row. Repeated labels are fetched redundantly.
async fn treatment_or_placeholder(config: &ApiConfig, disease: &str) -> Treatment {
    match api::reference::treatment_for(config, disease).await {
        Ok(treatment) => treatment,
        Err(error) => {
            notify::log_warn("treatment lookup failed", &error.to_string());
            Treatment::placeholder()
        }
    }
}
