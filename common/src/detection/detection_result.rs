use crate::detection::bounding_box::BoundingBox;
use crate::detection::detection_response::RawDetection;
use crate::detection::label::label_for;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DetectionResult {
    pub label: String,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<BoundingBox>,
}

impl DetectionResult {
    pub fn new<T: Into<String>>(label: T, confidence: f64, bbox: Option<BoundingBox>) -> Self {
        Self {
            label: label.into(),
            confidence,
            bbox,
        }
    }
}

impl From<RawDetection> for DetectionResult {
    fn from(raw: RawDetection) -> Self {
        Self {
            label: label_for(raw.class_id),
            confidence: raw.confidence,
            bbox: raw.bbox,
        }
    }
}

/// Orders by confidence, highest first. Equal confidences keep their input order.
pub fn sort_by_confidence(detections: &mut [DetectionResult]) {
    detections.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}
