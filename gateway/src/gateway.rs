use crate::detection::fallback::FallbackGenerator;
use crate::detection::normalizer::Normalizer;
use crate::detection::proxy::Proxy;
use crate::utils::config::Config;
use crate::utils::logging::*;
use crate::web::api::{config, detect, log, upload};
use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

pub struct Gateway;

impl Gateway {
    pub async fn run() {
        logging_information!(SystemEntry::Initializing);
        let config = Config::now().await;
        let proxy = match Proxy::from_config(&config) {
            Ok(proxy) => Arc::new(proxy),
            Err(entry) => {
                logging_emergency!(entry);
                return;
            }
        };
        let fallback = FallbackGenerator::new(Duration::from_millis(config.fallback_delay));
        let normalizer = Arc::new(Normalizer::new(proxy.clone(), fallback));
        logging_information!(SystemEntry::BackendTarget(proxy.backend_base().to_string()));
        let http_server = loop {
            let config = Config::now().await;
            let (proxy, normalizer) = (proxy.clone(), normalizer.clone());
            let http_server = HttpServer::new(move || {
                let cors = actix_cors::Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600);
                App::new()
                    .wrap(cors)
                    .app_data(web::Data::from(proxy.clone()))
                    .app_data(web::Data::from(normalizer.clone()))
                    .service(config::initialize())
                    .service(detect::initialize())
                    .service(log::initialize())
                    .service(upload::initialize())
            })
            .bind(format!("0.0.0.0:{}", config.http_server_bind_port));
            match http_server {
                Ok(http_server) => break http_server,
                Err(err) => {
                    logging_error!(NetworkEntry::BindPortError(err));
                    sleep(Duration::from_secs(config.bind_retry_duration)).await;
                    continue;
                }
            }
        };
        logging_information!(SystemEntry::WebReady);
        logging_information!(SystemEntry::InitializeComplete);
        logging_information!(SystemEntry::Online);
        if let Err(err) = http_server.run().await {
            logging_emergency!(SystemEntry::WebPanic(err));
        }
    }

    pub async fn terminate() {
        logging_information!(SystemEntry::Terminating);
        logging_information!(SystemEntry::TerminateComplete);
    }
}
