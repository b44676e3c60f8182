use actix_web::{delete, get, post, put, web::{self, Json}, HttpMessage, HttpRequest, HttpResponse, Responder};
use uuid::Uuid;

use crate::{errors::CustomError, models::course::{CourseUpdate, NewCourse}, permissions::{allows, Action}, schema::{course::{CourseInput, CourseResponse}, AuthedUser, NotFoundMsg}, GlobalState};

fn internal_error() -> HttpResponse{
    HttpResponse::InternalServerError().json(CustomError{error:"Internal Error".to_string()})
}

fn authed_user(req: &HttpRequest) -> Option<AuthedUser>{
    req.extensions().get::<AuthedUser>().cloned()
}

#[get("")]
pub async fn list_courses_handler(data:web::Data<GlobalState>) -> impl Responder{
    match data.repo.list_courses().await {
        Ok(courses) => {
            let parsed_courses = courses
                .into_iter()
                .map(CourseResponse::from)
                .collect::<Vec<CourseResponse>>();

            HttpResponse::Ok().json(parsed_courses)
        }
        Err(e) => {
            tracing::error!("course listing failed: {e}");
            internal_error()
        }
    }
}

#[post("")]
pub async fn create_course_handler(data:web::Data<GlobalState>, course:Json<CourseInput>, req:HttpRequest) -> impl Responder{
    let user = match authed_user(&req) {
        Some(user) => user,
        None => return HttpResponse::Forbidden().json(CustomError{error:"user missing".to_string()}),
    };

    let fields = match course.validate() {
        Ok(fields) => fields,
        Err(errors) => return HttpResponse::BadRequest().json(errors),
    };

    // the owner is always the authenticated requester, never request input
    let new_course = NewCourse{
        name: fields.name,
        introduction: fields.introduction,
        price: fields.price,
        teacher_id: user.id,
    };

    match data.repo.insert_course(new_course).await {
        Ok(created) => HttpResponse::Created().json(CourseResponse::from(created)),
        Err(e) => {
            tracing::error!("course creation failed: {e}");
            internal_error()
        }
    }
}

#[get("/{id}")]
pub async fn retrieve_course_handler(data:web::Data<GlobalState>, path:web::Path<Uuid>) -> impl Responder{
    let id = path.into_inner();

    match data.repo.get_course(id).await {
        Ok(Some(course)) => HttpResponse::Ok().json(CourseResponse::from(course)),
        Ok(None) => HttpResponse::NotFound().json(NotFoundMsg::course()),
        Err(e) => {
            tracing::error!("course lookup failed: {e}");
            internal_error()
        }
    }
}

#[put("/{id}")]
pub async fn update_course_handler(data:web::Data<GlobalState>, course:Json<CourseInput>, req:HttpRequest, path:web::Path<Uuid>) -> impl Responder{
    let id = path.into_inner();

    let user = match authed_user(&req) {
        Some(user) => user,
        None => return HttpResponse::Forbidden().json(CustomError{error:"user missing".to_string()}),
    };

    // 404 before the ownership check, denial reveals existence
    let existing = match data.repo.get_course(id).await {
        Ok(Some(existing)) => existing,
        Ok(None) => return HttpResponse::NotFound().json(NotFoundMsg::course()),
        Err(e) => {
            tracing::error!("course lookup failed: {e}");
            return internal_error();
        }
    };

    if !allows(user.id, &existing, Action::Write){
        return HttpResponse::Forbidden().json(CustomError{error:"You are not the teacher of this course".to_string()});
    }

    let fields = match course.validate() {
        Ok(fields) => fields,
        Err(errors) => return HttpResponse::BadRequest().json(errors),
    };

    let update = CourseUpdate{
        name: fields.name,
        introduction: fields.introduction,
        price: fields.price,
    };

    match data.repo.update_course(id, update).await {
        Ok(Some(updated)) => HttpResponse::Ok().json(CourseResponse::from(updated)),
        Ok(None) => HttpResponse::NotFound().json(NotFoundMsg::course()),
        Err(e) => {
            tracing::error!("course update failed: {e}");
            internal_error()
        }
    }
}

#[delete("/{id}")]
pub async fn delete_course_handler(data:web::Data<GlobalState>, req:HttpRequest, path:web::Path<Uuid>) -> impl Responder{
    let id = path.into_inner();

    let user = match authed_user(&req) {
        Some(user) => user,
        None => return HttpResponse::Forbidden().json(CustomError{error:"user missing".to_string()}),
    };

    let existing = match data.repo.get_course(id).await {
        Ok(Some(existing)) => existing,
        Ok(None) => return HttpResponse::NotFound().json(NotFoundMsg::course()),
        Err(e) => {
            tracing::error!("course lookup failed: {e}");
            return internal_error();
        }
    };

    if !allows(user.id, &existing, Action::Write){
        return HttpResponse::Forbidden().json(CustomError{error:"You are not the teacher of this course".to_string()});
    }

    match data.repo.delete_course(id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().json(NotFoundMsg::course()),
        Err(e) => {
            tracing::error!("course deletion failed: {e}");
            internal_error()
        }
    }
}
