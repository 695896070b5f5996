//! Post endpoints. Reads live under `/tweets`, creation on `/post`, the
//! full listing on `/`.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use chirp_core::domain::NewPost;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.posts.list().await?))
}

/// POST /post
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<NewPost>,
) -> AppResult<HttpResponse> {
    let post = state.posts.create(body.into_inner()).await?;
    Ok(HttpResponse::Created().json(post))
}

/// GET /tweets/{id}
pub async fn get(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.posts.get(*id).await?))
}

/// DELETE /tweets/{id}/delete
pub async fn delete(state: web::Data<AppState>, id: web::Path<Uuid>) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.posts.delete(*id).await?))
}

/// PUT /tweets/{id}/update
pub async fn update(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    body: web::Json<NewPost>,
) -> AppResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(state.posts.update(*id, body.into_inner()).await?))
}
