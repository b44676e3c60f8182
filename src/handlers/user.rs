use actix_web::{post, web::{self, Json}, HttpResponse, Responder};
use chrono::Utc;
use uuid::Uuid;

use crate::{errors::CustomError, models::user::{AuthToken, NewUser}, repository::{Repository, StoreError}, schema::{user::CreateUser, EmailAndPassword, SignupResponse, TokenResponse}, utils::{generate_token_key, hash_password, verify_password}, GlobalState};

/// Post-creation hook: mints and persists the account's one-and-only token.
/// Called from the signup path exactly once per created user, nothing else
/// ever writes to the token store.
pub async fn issue_token(repo: &dyn Repository, user_id: Uuid) -> Result<AuthToken, StoreError>{
    let token = AuthToken{
        key: generate_token_key(),
        user_id,
        created: Utc::now(),
    };
    repo.insert_token(token.clone()).await?;
    Ok(token)
}

#[post("/signup")]
pub async fn signup_user(data:web::Data<GlobalState>, user:Json<CreateUser>) -> impl Responder{
    let repo = &data.repo;

    let existing = match repo.find_user_by_email(&user.email).await {
        Ok(existing) => existing,
        Err(e) => {
            tracing::error!("signup lookup failed: {e}");
            return HttpResponse::InternalServerError().json(CustomError{error:"Internal Error".to_string()});
        }
    };

    if existing.is_some(){
        return HttpResponse::BadRequest().json(CustomError{error:"User exists already with this email".to_string()});
    }

    let password_hash = match hash_password(&user.password) {
        Ok(hash) => hash,
        Err(_e) => return HttpResponse::InternalServerError().json(CustomError{error:"Something went wrong !".to_string()}),
    };

    let created = match repo.create_user(NewUser{
        name: user.name.clone(),
        email: user.email.clone(),
        password: password_hash,
    }).await {
        Ok(created) => created,
        Err(e) => {
            tracing::error!("user creation failed: {e}");
            return HttpResponse::InternalServerError().json(CustomError{error:"Internal Error".to_string()});
        }
    };

    match issue_token(repo.as_ref(), created.id).await {
        Ok(token) => HttpResponse::Created().json(SignupResponse{
            message: String::from("Signed up successfully"),
            id: created.id.to_string(),
            token: token.key,
        }),
        Err(e) => {
            tracing::error!("token issuance failed: {e}");
            HttpResponse::InternalServerError().json(CustomError{error:"Internal Error".to_string()})
        }
    }
}

#[post("/token")]
pub async fn obtain_token(data:web::Data<GlobalState>, creds:Json<EmailAndPassword>) -> impl Responder{
    let repo = &data.repo;

    let user = match repo.find_user_by_email(&creds.email).await {
        Ok(Some(user)) => user,
        Ok(None) => return HttpResponse::BadRequest().json(CustomError{error:"Signup first".to_string()}),
        Err(e) => {
            tracing::error!("user lookup failed: {e}");
            return HttpResponse::InternalServerError().json(CustomError{error:"Internal Error".to_string()});
        }
    };

    if verify_password(&creds.password, &user.password).is_err(){
        return HttpResponse::BadRequest().json(CustomError{error:"Enter Valid Password".to_string()});
    }

    // tokens are minted at signup only, this endpoint hands back the existing one
    match repo.find_token_for_user(user.id).await {
        Ok(Some(token)) => HttpResponse::Ok().json(TokenResponse{token: token.key}),
        Ok(None) => {
            tracing::error!("account {} has no token", user.id);
            HttpResponse::InternalServerError().json(CustomError{error:"Internal Error".to_string()})
        }
        Err(e) => {
            tracing::error!("token lookup failed: {e}");
            HttpResponse::InternalServerError().json(CustomError{error:"Internal Error".to_string()})
        }
    }
}
