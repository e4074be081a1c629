use crate::gateway::Gateway;

pub mod detection;
pub mod gateway;
pub mod utils;
pub mod web;

#[actix_web::main]
async fn main() {
    Gateway::run().await;
    Gateway::terminate().await;
}
