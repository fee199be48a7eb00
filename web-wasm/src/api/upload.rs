//! Batch classification upload

use leafscan_common::{
    validate, ClassificationResult, Coordinates, Error, Result, Session, UploadResponse,
};
use web_sys::{File, FormData};

use super::client::{post_form, ApiConfig};

/// Submit the selected files for classification.
///
/// The batch must be non-empty; that is checked again here so no
/// caller can reach the network with an empty form. Coordinates are
/// attached only when both halves are present, the bearer token only
/// when the session has one. A non-2xx response or fetch failure
/// fails the whole batch; there are no partial results.
pub async fn classify_batch(
    config: &ApiConfig,
    session: &Session,
    files: &[File],
    coordinates: &Coordinates,
) -> Result<Vec<ClassificationResult>> {
    validate::batch_non_empty(files.len())?;

    let form = FormData::new().map_err(|_| Error::Api("FormData unavailable".to_string()))?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|_| Error::Api("failed to append file to form".to_string()))?;
    }
    if let (Some(latitude), Some(longitude)) = (coordinates.latitude, coordinates.longitude) {
        form.append_with_str("latitude", &latitude.to_string())
            .map_err(|_| Error::Api("failed to append coordinates".to_string()))?;
        form.append_with_str("longitude", &longitude.to_string())
            .map_err(|_| Error::Api("failed to append coordinates".to_string()))?;
    }

    let response: UploadResponse =
        post_form(&config.url("/upload"), &form, session.token.as_deref()).await?;
    Ok(response.results)
}
