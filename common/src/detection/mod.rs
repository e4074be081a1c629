pub mod bounding_box;
pub mod detection_request;
pub mod detection_response;
pub mod detection_result;
pub mod label;
pub mod model_info;

pub use bounding_box::BoundingBox;
pub use detection_request::DetectionRequest;
pub use detection_response::{DetectionResponse, RawDetection};
pub use detection_result::DetectionResult;
pub use model_info::ModelInfo;
