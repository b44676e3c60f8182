use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod course;
pub mod user;

/// Body of every 404 on the course detail routes.
#[derive(Serialize, Deserialize, Debug)]
pub struct NotFoundMsg{
    pub msg: String,
}

impl NotFoundMsg{
    pub fn course() -> Self{
        NotFoundMsg{msg: String::from("no such course")}
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SignupResponse{
    pub message: String,
    pub id: String,
    pub token: String,
}

#[derive(Deserialize, Serialize)]
pub struct EmailAndPassword{
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct TokenResponse{
    pub token: String,
}

/// Identity resolved by the auth middleware, stored in the request extensions.
#[derive(Debug, Clone)]
pub struct AuthedUser{
    pub id: Uuid,
    pub email: String,
}
