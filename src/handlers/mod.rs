pub mod course;
pub mod user;

use actix_web::{Responder, get};

#[get("/health")]
pub async fn health() -> impl Responder{
    "ok"
}
