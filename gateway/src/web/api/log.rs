use crate::utils::logging::{LogEntry, Logger};
use actix_web::{get, web, HttpResponse, Responder, Scope};
use chrono::{DateTime, Local};
use uuid::Uuid;

pub fn initialize() -> Scope {
    web::scope("/log")
        .service(system_log)
        .service(system_log_since)
        .service(request_log)
        .service(request_log_since)
}

#[get("/system_log")]
async fn system_log() -> impl Responder {
    let system_log = render(Logger::get_system_logs().await);
    HttpResponse::Ok().json(web::Json(system_log))
}

#[get("/system_log/since/{since}")]
async fn system_log_since(since: web::Path<String>) -> impl Responder {
    match parse_datetime(&since.into_inner()) {
        Ok(since_time) => {
            let logs = render(Logger::get_system_logs_since(since_time).await);
            HttpResponse::Ok().json(web::Json(logs))
        }
        Err(_) => HttpResponse::BadRequest().body("Invalid datetime format."),
    }
}

#[get("/{request_id}")]
async fn request_log(request_id: web::Path<Uuid>) -> impl Responder {
    match Logger::get_request_logs(request_id.into_inner()).await {
        Some(logs) => HttpResponse::Ok().json(web::Json(render(logs))),
        None => HttpResponse::NotFound().body("Request not found."),
    }
}

#[get("/{request_id}/since/{since}")]
async fn request_log_since(argument: web::Path<(Uuid, String)>) -> impl Responder {
    let (request_id, since_str) = argument.into_inner();
    match parse_datetime(&since_str) {
        Ok(since_time) => match Logger::get_request_logs_since(request_id, since_time).await {
            Some(logs) => HttpResponse::Ok().json(web::Json(render(logs))),
            None => HttpResponse::NotFound().body("Request not found."),
        },
        Err(_) => HttpResponse::BadRequest().body("Invalid datetime format."),
    }
}

fn render(logs: Vec<LogEntry>) -> Vec<String> {
    logs.iter().map(LogEntry::to_plain_string).collect()
}

fn parse_datetime(datetime_str: &str) -> Result<DateTime<Local>, String> {
    DateTime::parse_from_rfc3339(datetime_str)
        .map_err(|_| "Invalid datetime format".to_string())
        .map(|dt| dt.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::logging::*;
    use actix_web::http::StatusCode;
    use actix_web::{test as actix_test, App};

    #[actix_web::test]
    async fn request_log_is_served_by_id() {
        let request_id = Uuid::new_v4();
        logging_information!(request_id, DetectionEntry::DetectionComplete(2), "");
        let app = actix_test::init_service(App::new().service(initialize())).await;
        let response = actix_test::call_service(&app, actix_test::TestRequest::get().uri(&format!("/log/{request_id}")).to_request()).await;
        assert_eq!(response.status(), StatusCode::OK);
        let logs: Vec<String> = actix_test::read_body_json(response).await;
        assert_eq!(logs.len(), 1);
        assert!(logs[0].contains("Detection complete, found 2 components"));
    }

    #[actix_web::test]
    async fn unknown_request_is_not_found() {
        let app = actix_test::init_service(App::new().service(initialize())).await;
        let response = actix_test::call_service(&app, actix_test::TestRequest::get().uri(&format!("/log/{}", Uuid::new_v4())).to_request()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn rfc3339_timestamps_are_accepted() {
        assert!(parse_datetime("2026-10-18T08:30:00+00:00").is_ok());
        assert!(parse_datetime("2026-10-18 08:30").is_err());
    }
}
