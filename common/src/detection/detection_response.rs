use crate::detection::bounding_box::BoundingBox;
use crate::utils::log_entry::detection::DetectionEntry;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One detection as emitted by the backend, before labelling.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawDetection {
    pub class_id: i64,
    pub confidence: f64,
    #[serde(default)]
    pub bbox: Option<BoundingBox>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DetectionResponse {
    pub detections: Vec<RawDetection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_image: Option<String>,
}

impl DetectionResponse {
    /// Validates an untyped backend body.
    ///
    /// A truthy `error` field wins over everything else. `detections` must be
    /// present and must be a list whose elements match [`RawDetection`];
    /// unknown fields such as `model_info` are ignored.
    pub fn parse(body: Value) -> Result<Self, DetectionEntry> {
        if let Some(error) = body.get("error").and_then(reported_error) {
            return Err(DetectionEntry::BackendReported(error));
        }
        match body.get("detections") {
            None | Some(Value::Null) => Err(DetectionEntry::MissingDetections),
            Some(Value::Array(_)) => serde_json::from_value(body)
                .map_err(|err| DetectionEntry::MalformedDetections(err.to_string())),
            Some(_) => Err(DetectionEntry::MalformedDetections("detections is not a list".to_string())),
        }
    }
}

fn reported_error(error: &Value) -> Option<String> {
    match error {
        Value::Null | Value::Bool(false) => None,
        Value::String(message) if message.is_empty() => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_body_is_accepted() {
        let body = json!({
            "detections": [{"class_id": 6364, "confidence": 0.5, "bbox": {"x": 1, "y": 2.5, "width": 3, "height": 4}}],
            "model_info": {"model_name": "YOLOv8"},
            "processed_image": "aGVsbG8=",
        });
        let response = DetectionResponse::parse(body).unwrap();
        assert_eq!(response.detections.len(), 1);
        assert_eq!(response.detections[0].class_id, 6364);
        assert_eq!(response.detections[0].bbox, Some(BoundingBox::new(1.0, 2.5, 3.0, 4.0)));
        assert_eq!(response.processed_image.as_deref(), Some("aGVsbG8="));
    }

    #[test]
    fn empty_detections_are_valid() {
        let response = DetectionResponse::parse(json!({"detections": []})).unwrap();
        assert!(response.detections.is_empty());
        assert_eq!(response.processed_image, None);
    }

    #[test]
    fn missing_bbox_is_tolerated() {
        let response = DetectionResponse::parse(json!({"detections": [{"class_id": 1, "confidence": 0.3}]})).unwrap();
        assert_eq!(response.detections[0].bbox, None);
    }

    #[test]
    fn error_field_is_reported() {
        let result = DetectionResponse::parse(json!({"detections": [], "error": "model not loaded"}));
        assert_eq!(result, Err(DetectionEntry::BackendReported("model not loaded".to_string())));
        assert!(DetectionResponse::parse(json!({"detections": [], "error": null})).is_ok());
        assert!(DetectionResponse::parse(json!({"detections": [], "error": ""})).is_ok());
    }

    #[test]
    fn zero_error_code_is_not_a_failure() {
        assert!(DetectionResponse::parse(json!({"detections": [], "error": 0})).is_ok());
        assert!(DetectionResponse::parse(json!({"detections": [], "error": 0.0})).is_ok());
        let result = DetectionResponse::parse(json!({"detections": [], "error": 2}));
        assert_eq!(result, Err(DetectionEntry::BackendReported("2".to_string())));
    }

    #[test]
    fn missing_detections_are_rejected() {
        assert_eq!(DetectionResponse::parse(json!({})), Err(DetectionEntry::MissingDetections));
        assert_eq!(DetectionResponse::parse(json!({"detections": null})), Err(DetectionEntry::MissingDetections));
        assert_eq!(DetectionResponse::parse(json!([1, 2])), Err(DetectionEntry::MissingDetections));
    }

    #[test]
    fn malformed_detections_are_rejected() {
        let not_a_list = DetectionResponse::parse(json!({"detections": {"class_id": 0}}));
        assert!(matches!(not_a_list, Err(DetectionEntry::MalformedDetections(_))));
        let bad_element = DetectionResponse::parse(json!({"detections": [{"class_id": "zero", "confidence": 0.1}]}));
        assert!(matches!(bad_element, Err(DetectionEntry::MalformedDetections(_))));
        let fractional_class = DetectionResponse::parse(json!({"detections": [{"class_id": 1.5, "confidence": 0.1}]}));
        assert!(matches!(fractional_class, Err(DetectionEntry::MalformedDetections(_))));
    }
}
