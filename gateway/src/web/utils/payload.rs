use actix_web::web::Bytes;
use common::utils::log_entry::detection::DetectionEntry;
use futures::{Stream, StreamExt};
use std::fmt::Display;
use std::pin::pin;

/// Body limit for JSON routes: base64 inflates an image by a third, plus room for the envelope.
pub fn payload_limit(max_upload_size: usize) -> usize {
    max_upload_size.saturating_add(max_upload_size / 3).saturating_add(64 * 1024)
}

/// Collects a request body, stopping as soon as it grows past `limit`.
/// The limit is supplied per request so config updates take effect without a restart.
pub async fn read_limited<S, E>(stream: S, limit: usize) -> Result<Vec<u8>, DetectionEntry>
where
    S: Stream<Item = Result<Bytes, E>>,
    E: Display,
{
    let mut stream = pin!(stream);
    let mut body = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|err| DetectionEntry::InvalidUpload(err.to_string()))?;
        if body.len() + chunk.len() > limit {
            return Err(DetectionEntry::UploadTooLarge(limit));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}
