//! In-process stand-in for the inference service, bound to an ephemeral port.

use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct BackendReply {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl BackendReply {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }

    fn respond(&self) -> HttpResponse {
        let status = StatusCode::from_u16(self.status).expect("valid status code");
        HttpResponse::build(status).content_type(self.content_type).body(self.body.clone())
    }
}

#[derive(Clone)]
struct Routes {
    detect: BackendReply,
    health: BackendReply,
    info: BackendReply,
    received: Arc<Mutex<Vec<Value>>>,
}

pub struct TestBackendBuilder {
    routes: Routes,
}

impl TestBackendBuilder {
    pub fn detect(mut self, reply: BackendReply) -> Self {
        self.routes.detect = reply;
        self
    }

    pub fn health(mut self, reply: BackendReply) -> Self {
        self.routes.health = reply;
        self
    }

    pub fn info(mut self, reply: BackendReply) -> Self {
        self.routes.info = reply;
        self
    }

    pub fn spawn(self) -> TestBackend {
        let routes = self.routes.clone();
        let server = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(routes.clone()))
                .app_data(web::PayloadConfig::new(64 * 1024 * 1024))
                .route("/detect", web::post().to(detect))
                .route("/health", web::get().to(health))
                .route("/info", web::get().to(info))
        })
            .workers(1)
            .disable_signals()
            .bind(("127.0.0.1", 0))
            .expect("bind test backend");
        let address = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        TestBackend {
            address,
            received: self.routes.received,
        }
    }
}

pub struct TestBackend {
    address: SocketAddr,
    received: Arc<Mutex<Vec<Value>>>,
}

impl TestBackend {
    pub fn builder() -> TestBackendBuilder {
        let missing = BackendReply::text(404, "Not Found");
        TestBackendBuilder {
            routes: Routes {
                detect: missing.clone(),
                health: missing.clone(),
                info: missing,
                received: Arc::new(Mutex::new(Vec::new())),
            },
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.address)
    }

    /// JSON bodies posted to `/detect`, in arrival order.
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().expect("received lock").clone()
    }
}

async fn detect(routes: web::Data<Routes>, body: web::Bytes) -> HttpResponse {
    if let Ok(value) = serde_json::from_slice(&body) {
        routes.received.lock().expect("received lock").push(value);
    }
    routes.detect.respond()
}

async fn health(routes: web::Data<Routes>) -> HttpResponse {
    routes.health.respond()
}

async fn info(routes: web::Data<Routes>) -> HttpResponse {
    routes.info.respond()
}
