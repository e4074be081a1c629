use crate::detection::label::SPACECRAFT_LABELS;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ModelInfo {
    pub model_name: String,
    pub model_path: String,
    pub input_shape: Vec<u32>,
    pub num_classes: usize,
    pub labels: Vec<String>,
}

impl ModelInfo {
    /// Description reported when the backend cannot describe its own model.
    pub fn unknown() -> Self {
        Self {
            model_name: "Unknown".to_string(),
            model_path: "Unknown".to_string(),
            input_shape: vec![1, 3, 640, 640],
            num_classes: SPACECRAFT_LABELS.len(),
            labels: SPACECRAFT_LABELS.iter().map(|label| label.to_string()).collect(),
        }
    }
}
