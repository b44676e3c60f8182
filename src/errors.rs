use actix_web::{http::StatusCode, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use derive_more::derive::{Display, Error as DeriveMoreError};

#[derive(Debug, Error)]
pub enum AppError{
    #[error("Cant bind to the Socket")]
    SocketBind,
    #[error("Cant connect to the DB")]
    DbConnect,
    #[error("Cant start the server")]
    ServerStart,
}

/// Generic JSON error body, `{"error": "..."}`.
#[derive(Debug, Display, DeriveMoreError, Serialize, Deserialize)]
#[display("error :{}", error)]
pub struct CustomError{
    pub error:String
}

impl ResponseError for CustomError{}

impl ResponseError for AppError {
    fn error_response(&self) -> actix_web::HttpResponse<actix_web::body::BoxBody> {
        actix_web::HttpResponse::build(self.status_code()).body(self.to_string())
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        match *self {
            AppError::DbConnect => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ServerStart => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SocketBind => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Failures raised by the authentication middleware. All of them map to 401,
/// the Display text becomes the error body.
#[derive(Debug, Error)]
pub enum AuthError{
    #[error("Authentication credentials were not provided")]
    MissingCredentials,
    #[error("Invalid token")]
    InvalidToken,
    #[error("Invalid email or password")]
    InvalidBasicCredentials,
    #[error("Malformed Authorization header")]
    MalformedHeader,
}

impl ResponseError for AuthError {
    fn error_response(&self) -> actix_web::HttpResponse<actix_web::body::BoxBody> {
        actix_web::HttpResponse::build(self.status_code())
            .json(CustomError{error: self.to_string()})
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }
}
