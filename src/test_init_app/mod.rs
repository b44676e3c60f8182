use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use actix_web::{test, App, web, dev::ServiceResponse, Error};
use actix_web::{middleware::from_fn, web::scope};
use actix_service::Service;
use actix_http::Request;

use crate::{handlers, middlewares, repository::memory::MemRepository, GlobalState};

/// Renders service-level `Err`s into HTTP responses, the way the real
/// dispatcher does, so tests can assert on the status the client would see.
pub struct TestApp<S>(S);

impl<S> Service<Request> for TestApp<S>
where
    S: Service<Request, Response = ServiceResponse, Error = Error>,
    S::Future: 'static,
{
    type Response = ServiceResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<ServiceResponse, Error>>>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.0.poll_ready(ctx)
    }

    fn call(&self, req: Request) -> Self::Future {
        let fut = self.0.call(req);
        Box::pin(async move {
            match fut.await {
                Ok(res) => Ok(res),
                Err(err) => {
                    let http_req = test::TestRequest::default().to_http_request();
                    Ok(ServiceResponse::new(http_req, err.error_response()))
                }
            }
        })
    }
}

/// Builds the full route tree over a fresh in-memory repository, so every
/// test starts from an empty catalog.
pub async fn init() -> impl Service<Request, Response = ServiceResponse, Error = Error> {

    let repo = Arc::new(MemRepository::default());
    let app_data = web::Data::new(GlobalState{repo});

    TestApp(test::init_service(
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
                    // the whole catalog sits behind the auth middleware
                    scope("/courses")
                    .wrap(from_fn(middlewares::auth::auth_middleware))
                    .service(handlers::course::list_courses_handler)
                    .service(handlers::course::create_course_handler)
                    .service(handlers::course::retrieve_course_handler)
                    .service(handlers::course::update_course_handler)
                    .service(handlers::course::delete_course_handler)
                )
            )
    ).await)
}
