use actix_web::{middleware::from_fn, web::{self, scope}, App, HttpServer};
use dotenv::dotenv;
use errors::AppError;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::repository::{PgRepository, RepositoryState};

mod errors;
mod handlers;
mod middlewares;
mod models;
mod permissions;
mod repository;
mod schema;
#[cfg(test)]
mod test_init_app;
mod utils;

pub struct GlobalState{
    pub repo: RepositoryState,
}

#[actix_web::main]
async fn main() -> Result<(), AppError> {

    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "course_catalog=debug,actix_web=info".into()),
        )
        .init();

    let address = std::env::var("BIND_ADDR").unwrap_or_else(|_| String::from("127.0.0.1:8080"));
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
    .max_connections(5)
    .connect(&database_url)
    .await
    .map_err(|_e| AppError::DbConnect)?;

    let repo: RepositoryState = Arc::new(PgRepository::new(pool));
    let app_data = web::Data::new(GlobalState{repo});

    tracing::info!("listening on {address}");

    HttpServer::new(
        move||{
            App::new()
            .service(
                scope("/api/v1")
                .app_data(app_data.clone())
                .service(handlers::health)
                .service(
                    scope("/auth")
                    .service(handlers::user::signup_user)
                    .service(handlers::user::obtain_token)
                )
                .service(
                    scope("/courses")
                    .wrap(from_fn(middlewares::auth::auth_middleware))
                    .service(handlers::course::list_courses_handler)
                    .service(handlers::course::create_course_handler)
                    .service(handlers::course::retrieve_course_handler)
                    .service(handlers::course::update_course_handler)
                    .service(handlers::course::delete_course_handler)
                )
            )
        }
    ).bind(&address)
    .map_err(|_e|AppError::SocketBind)?
    .run()
    .await
    .map_err(|_e|AppError::ServerStart)?;

    Ok(())

}
