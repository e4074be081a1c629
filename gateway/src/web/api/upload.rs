use crate::detection::normalizer::{ImageFile, Normalizer};
use crate::utils::config::Config;
use crate::utils::logging::*;
use crate::web::utils::payload::{payload_limit, read_limited};
use actix_multipart::{Field, Multipart};
use actix_web::{post, web, HttpResponse, Responder, Scope};
use common::detection::detection_request::{data_url_mime, decode_image};
use futures::{StreamExt, TryStreamExt};
use mime_guess::mime;
use sanitize_filename::sanitize;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";
const IMAGE_FIELD: &str = "image";
const DEFAULT_FILENAME: &str = "upload";

pub fn initialize() -> Scope {
    web::scope("/api/upload")
        .service(upload)
        .service(upload_base64)
}

#[derive(Deserialize)]
struct EncodedUpload {
    image: String,
    #[serde(default)]
    filename: Option<String>,
}

#[post("")]
async fn upload(normalizer: web::Data<Normalizer>, mut payload: Multipart) -> impl Responder {
    let request_id = Uuid::new_v4();
    let max_upload_size = Config::now().await.max_upload_size;
    match read_image(&mut payload, max_upload_size).await {
        Ok(image) => respond(request_id, &normalizer, image).await,
        Err(entry) => reject(request_id, entry).await,
    }
}

#[post("/base64")]
async fn upload_base64(normalizer: web::Data<Normalizer>, payload: web::Payload) -> impl Responder {
    let request_id = Uuid::new_v4();
    let max_upload_size = Config::now().await.max_upload_size;
    let image = read_encoded(payload, max_upload_size).await
        .and_then(|encoded| decode_upload(encoded, max_upload_size));
    match image {
        Ok(image) => respond(request_id, &normalizer, image).await,
        Err(entry) => reject(request_id, entry).await,
    }
}

async fn respond(request_id: Uuid, normalizer: &Normalizer, image: ImageFile) -> HttpResponse {
    logging_information!(request_id, DetectionEntry::ImageReceived(image.filename.clone(), image.data.len()), "");
    let outcome = normalizer.detect(request_id, &image).await;
    HttpResponse::Ok()
        .insert_header((REQUEST_ID_HEADER, request_id.to_string()))
        .json(outcome)
}

async fn reject(request_id: Uuid, entry: DetectionEntry) -> HttpResponse {
    logging_warning!(request_id, entry.clone(), "");
    let mut response = match entry {
        DetectionEntry::UploadTooLarge(_) => HttpResponse::PayloadTooLarge(),
        _ => HttpResponse::BadRequest(),
    };
    response
        .insert_header((REQUEST_ID_HEADER, request_id.to_string()))
        .json(json!({ "error": entry.to_string() }))
}

async fn read_image(payload: &mut Multipart, max_upload_size: usize) -> Result<ImageFile, DetectionEntry> {
    while let Some(mut field) = payload.try_next().await.map_err(|err| DetectionEntry::InvalidUpload(err.to_string()))? {
        let field_name = field.content_disposition().and_then(|content_disposition| content_disposition.get_name());
        if field_name != Some(IMAGE_FIELD) {
            drain_field(&mut field).await?;
            continue;
        }
        let filename = sanitized_filename(field.content_disposition().and_then(|content_disposition| content_disposition.get_filename()));
        let content_type = field.content_type().map(|mime| mime.essence_str().to_string());
        if !is_image(content_type.as_deref(), &filename) {
            return Err(DetectionEntry::NotAnImage);
        }
        let data = read_field(&mut field, max_upload_size).await?;
        return Ok(ImageFile {
            filename,
            data,
        });
    }
    Err(DetectionEntry::MissingImageField)
}

async fn read_encoded(payload: web::Payload, max_upload_size: usize) -> Result<EncodedUpload, DetectionEntry> {
    let body = read_limited(payload, payload_limit(max_upload_size)).await
        .map_err(|entry| match entry {
            DetectionEntry::UploadTooLarge(_) => DetectionEntry::UploadTooLarge(max_upload_size),
            entry => entry,
        })?;
    serde_json::from_slice(&body).map_err(|err| DetectionEntry::InvalidUpload(err.to_string()))
}

fn decode_upload(encoded: EncodedUpload, max_upload_size: usize) -> Result<ImageFile, DetectionEntry> {
    let filename = sanitized_filename(encoded.filename.as_deref());
    if !is_image(data_url_mime(&encoded.image), &filename) {
        return Err(DetectionEntry::NotAnImage);
    }
    let data = decode_image(&encoded.image)?;
    if data.len() > max_upload_size {
        return Err(DetectionEntry::UploadTooLarge(max_upload_size));
    }
    Ok(ImageFile {
        filename,
        data,
    })
}

async fn read_field(field: &mut Field, max_upload_size: usize) -> Result<Vec<u8>, DetectionEntry> {
    let mut data = Vec::new();
    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(|err| DetectionEntry::InvalidUpload(err.to_string()))?;
        if data.len() + chunk.len() > max_upload_size {
            return Err(DetectionEntry::UploadTooLarge(max_upload_size));
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

async fn drain_field(field: &mut Field) -> Result<(), DetectionEntry> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(|err| DetectionEntry::InvalidUpload(err.to_string()))?;
    }
    Ok(())
}

fn sanitized_filename(filename: Option<&str>) -> String {
    filename.map(sanitize)
        .filter(|filename| !filename.is_empty())
        .unwrap_or_else(|| DEFAULT_FILENAME.to_string())
}

/// Trusts a declared media type unless it is the generic octet-stream, in
/// which case the file extension decides.
fn is_image(content_type: Option<&str>, filename: &str) -> bool {
    match content_type {
        Some(content_type) if content_type != mime::APPLICATION_OCTET_STREAM.essence_str() => {
            content_type.starts_with("image/")
        }
        _ => mime_guess::from_path(filename).first()
            .is_some_and(|guess| guess.type_() == mime::IMAGE),
    }
}
