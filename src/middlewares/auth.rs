use actix_web::{body::MessageBody, dev::{ServiceRequest, ServiceResponse}, error::ErrorInternalServerError, middleware::Next, web, Error, HttpMessage};
use base64::Engine;

use crate::{errors::AuthError, models::user::User, schema::AuthedUser, utils::verify_password, GlobalState};

/// Resolves the acting user from the Authorization header and stores an
/// [`AuthedUser`] in the request extensions. Accepts `Token <key>` (or the
/// `Bearer` prefix) and `Basic <base64(email:password)>`.
pub async fn auth_middleware(
    req:ServiceRequest,
    next: Next<impl MessageBody>) -> Result<ServiceResponse<impl MessageBody>, Error>
{

    let authorization = match req.headers().get("Authorization") {
        Some(value) => value.to_str().map_err(|_| AuthError::MalformedHeader)?.to_owned(),
        None => return Err(AuthError::MissingCredentials.into()),
    };

    let repo = req
        .app_data::<web::Data<GlobalState>>()
        .ok_or_else(|| ErrorInternalServerError("application state missing"))?
        .repo
        .clone();

    let user: User = match authorization.split_once(' ') {
        Some(("Token", key)) | Some(("Bearer", key)) => {
            repo.find_user_by_token(key.trim())
                .await
                .map_err(|e| {
                    tracing::error!("token lookup failed: {e}");
                    ErrorInternalServerError("token lookup failed")
                })?
                .ok_or(AuthError::InvalidToken)?
        }
        Some(("Basic", encoded)) => {
            let decoded = base64::engine::general_purpose::STANDARD
                .decode(encoded.trim())
                .map_err(|_| AuthError::MalformedHeader)?;
            let credentials = String::from_utf8(decoded).map_err(|_| AuthError::MalformedHeader)?;
            let (email, password) = credentials.split_once(':').ok_or(AuthError::MalformedHeader)?;

            let user = repo
                .find_user_by_email(email)
                .await
                .map_err(|e| {
                    tracing::error!("user lookup failed: {e}");
                    ErrorInternalServerError("user lookup failed")
                })?
                .ok_or(AuthError::InvalidBasicCredentials)?;

            if verify_password(password, &user.password).is_err() {
                return Err(AuthError::InvalidBasicCredentials.into());
            }

            user
        }
        _ => return Err(AuthError::MalformedHeader.into()),
    };

    req.extensions_mut().insert(AuthedUser{id: user.id, email: user.email});
    next.call(req).await

}
