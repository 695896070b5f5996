//! User endpoints: signup, login, and user CRUD.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use chirp_core::domain::NewUser;
use chirp_core::service::LoginOutcome;
use chirp_shared::dto::{LoginRequest, LoginResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /signup
pub async fn signup(
    state: web::Data<AppState>,
    body: web::Json<NewUser>,
) -> AppResult<HttpResponse> {
    let user = state.users.sign_up(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(user))
}

/// POST /login
///
/// Always answers 200; the body message alone distinguishes the outcomes.
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let response = match state.users.login(&req.email, &req.password).await? {
        LoginOutcome::Accepted => LoginResponse::accepted(req.email),
        LoginOutcome::Rejected => LoginResponse::rejected(req.email),
    };
    Ok(HttpResponse::Ok().json(response))
}

/// GET /users
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.users.list().await?))
}

/// GET /users/{id}
pub async fn get(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.users.get(*id).await?))
}

/// DELETE /users/{id}/delete
pub async fn delete(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.users.delete(*id).await?))
}

/// PUT /users/{id}/update
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<NewUser>,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.users.update(*id, body.into_inner()).await?))
}
