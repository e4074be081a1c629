use crate::detection::proxy::{Proxy, ProxyReply};
use crate::utils::config::Config;
use crate::utils::logging::*;
use crate::web::utils::payload::{payload_limit, read_limited};
use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse, Responder, Scope};
use serde_json::Value;

pub fn initialize() -> Scope {
    web::scope("/api/detect")
        .service(detect)
        .service(health)
        .service(info)
}

#[post("")]
async fn detect(proxy: web::Data<Proxy>, payload: web::Payload) -> impl Responder {
    let limit = payload_limit(Config::now().await.max_upload_size);
    let body = match read_limited(payload, limit).await {
        Ok(body) => body,
        Err(entry @ DetectionEntry::UploadTooLarge(_)) => {
            logging_warning!(entry.clone());
            return relay(ProxyReply::error(413, entry.to_string()));
        }
        Err(entry) => {
            logging_error!(entry);
            return relay(ProxyReply::internal_error());
        }
    };
    match serde_json::from_slice::<Value>(&body) {
        Ok(body) => relay(proxy.forward_detect(&body).await),
        Err(err) => {
            logging_error!(NetworkEntry::InvalidClientBody, format!("Err: {err}"));
            relay(ProxyReply::internal_error())
        }
    }
}

#[get("")]
async fn health(proxy: web::Data<Proxy>) -> impl Responder {
    relay(proxy.forward_health().await)
}

#[get("/info")]
async fn info(proxy: web::Data<Proxy>) -> impl Responder {
    relay(proxy.forward_info().await)
}

fn relay(reply: ProxyReply) -> HttpResponse {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(reply.body)
}
