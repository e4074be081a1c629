use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectionEntry {
    #[error("Received image {0} ({1} bytes)")]
    ImageReceived(String, usize),
    #[error("Sending image {0} ({1} bytes) to backend")]
    RequestSent(String, u64),
    #[error("Detection complete, found {0} components")]
    DetectionComplete(usize),
    #[error("Falling back to mock detection")]
    FallbackSubstituted,
    #[error("Failed to encode detection request: {0}")]
    EncodeRequestError(String),
    #[error("Backend responded with status {0}: {1}")]
    BackendStatus(u16, String),
    #[error("Backend error: {0}")]
    BackendReported(String),
    #[error("Backend response has no detections")]
    MissingDetections,
    #[error("Backend response is malformed: {0}")]
    MalformedDetections(String),
    #[error("Invalid base64 image: {0}")]
    InvalidImageEncoding(String),
    #[error("Please upload an image file")]
    NotAnImage,
    #[error("Image exceeds the upload limit of {0} bytes")]
    UploadTooLarge(usize),
    #[error("Missing image field")]
    MissingImageField,
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),
}

impl From<DetectionEntry> for String {
    #[inline(always)]
    fn from(value: DetectionEntry) -> Self {
        value.to_string()
    }
}
