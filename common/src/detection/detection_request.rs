use crate::utils::log_entry::detection::DetectionEntry;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Payload accepted by the inference backend's `/detect` route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DetectionRequest {
    pub image: String,
    pub filename: String,
    pub file_size: u64,
}

impl DetectionRequest {
    pub fn new<T: Into<String>>(filename: T, data: &[u8]) -> Self {
        Self {
            image: STANDARD.encode(data),
            filename: filename.into(),
            file_size: data.len() as u64,
        }
    }
}

/// Returns the base64 part of a `data:` URL, or the input when it is not one.
pub fn strip_data_url(encoded: &str) -> &str {
    if encoded.starts_with("data:") {
        encoded.split_once(',').map_or("", |(_, payload)| payload)
    } else {
        encoded
    }
}

/// Media type declared by a `data:` URL, e.g. `image/png`.
pub fn data_url_mime(encoded: &str) -> Option<&str> {
    let (header, _) = encoded.strip_prefix("data:")?.split_once(',')?;
    header.split(';').next().filter(|mime| !mime.is_empty())
}

pub fn decode_image(encoded: &str) -> Result<Vec<u8>, DetectionEntry> {
    STANDARD.decode(strip_data_url(encoded).trim())
        .map_err(|err| DetectionEntry::InvalidImageEncoding(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_records_name_and_size() {
        let request = DetectionRequest::new("panel.png", b"\x89PNG\r\n");
        assert_eq!(request.filename, "panel.png");
        assert_eq!(request.file_size, 6);
        assert!(!request.image.starts_with("data:"));
    }

    #[test]
    fn encoded_image_decodes_to_original_bytes() {
        let bytes = (0..=255_u8).cycle().take(1000).collect::<Vec<u8>>();
        let request = DetectionRequest::new("noise.bin", &bytes);
        assert_eq!(decode_image(&request.image).unwrap(), bytes);
    }

    #[test]
    fn data_url_prefix_is_stripped() {
        assert_eq!(strip_data_url("data:image/png;base64,aGVsbG8="), "aGVsbG8=");
        assert_eq!(strip_data_url("aGVsbG8="), "aGVsbG8=");
        assert_eq!(strip_data_url("data:image/png;base64"), "");
        assert_eq!(decode_image("data:image/jpeg;base64,aGVsbG8=").unwrap(), b"hello");
    }

    #[test]
    fn data_url_mime_is_extracted() {
        assert_eq!(data_url_mime("data:image/png;base64,aGVsbG8="), Some("image/png"));
        assert_eq!(data_url_mime("data:;base64,aGVsbG8="), None);
        assert_eq!(data_url_mime("aGVsbG8="), None);
    }

    #[test]
    fn invalid_base64_is_rejected() {
        assert!(matches!(decode_image("not base64!"), Err(DetectionEntry::InvalidImageEncoding(_))));
    }
}
