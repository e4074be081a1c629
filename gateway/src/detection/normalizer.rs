use crate::detection::fallback::FallbackGenerator;
use crate::detection::proxy::Proxy;
use crate::utils::logging::*;
use common::detection::detection_result::sort_by_confidence;
use common::detection::{DetectionRequest, DetectionResponse, DetectionResult};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

/// An uploaded image, already read into memory.
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub filename: String,
    pub data: Vec<u8>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DetectionOutcome {
    pub detections: Vec<DetectionResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_image: Option<String>,
    pub fallback: bool,
}

/// Turns backend replies into canonical, confidence-ordered detections.
///
/// [`Normalizer::detect`] never fails: structural, status and transport
/// errors all resolve to the fallback set. [`Normalizer::try_detect`] exposes
/// the underlying error for callers that want it.
pub struct Normalizer {
    proxy: Arc<Proxy>,
    fallback: FallbackGenerator,
}

impl Normalizer {
    pub fn new(proxy: Arc<Proxy>, fallback: FallbackGenerator) -> Self {
        Self {
            proxy,
            fallback,
        }
    }

    pub async fn detect(&self, request_id: Uuid, image: &ImageFile) -> DetectionOutcome {
        match self.try_detect(request_id, image).await {
            Ok(outcome) => {
                logging_information!(request_id, DetectionEntry::DetectionComplete(outcome.detections.len()), "");
                outcome
            }
            Err(entry) => {
                logging_warning!(request_id, DetectionEntry::FallbackSubstituted, entry);
                DetectionOutcome {
                    detections: self.fallback.generate().await,
                    processed_image: None,
                    fallback: true,
                }
            }
        }
    }

    pub async fn try_detect(&self, request_id: Uuid, image: &ImageFile) -> Result<DetectionOutcome, DetectionEntry> {
        let request = DetectionRequest::new(image.filename.clone(), &image.data);
        let payload = serde_json::to_value(&request)
            .map_err(|err| DetectionEntry::EncodeRequestError(err.to_string()))?;
        logging_debug!(request_id, DetectionEntry::RequestSent(request.filename, request.file_size), "");
        let reply = self.proxy.forward_detect(&payload).await;
        if !reply.is_success() {
            return Err(DetectionEntry::BackendStatus(reply.status, reply.error_message()));
        }
        let response = DetectionResponse::parse(reply.body)?;
        let mut detections = response.detections.into_iter()
            .map(DetectionResult::from)
            .collect::<Vec<_>>();
        sort_by_confidence(&mut detections);
        Ok(DetectionOutcome {
            detections,
            processed_image: response.processed_image,
            fallback: false,
        })
    }
}
