//! Post handlers.

use actix_web::{HttpResponse, web};

use feed_core::domain::PostId;
use feed_shared::dto::{CreatePostRequest, PostResponse, UpdateContentRequest};

use super::post_not_found;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;

    Ok(HttpResponse::Ok().json(
        posts
            .into_iter()
            .map(PostResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let post = state.posts.create(req.user_name, req.content).await?;

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// GET /api/posts/{post_id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let post = state
        .posts
        .get(post_id)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// PATCH /api/posts/{post_id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<UpdateContentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let post = state
        .posts
        .update(post_id, body.into_inner().content)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}

/// DELETE /api/posts/{post_id}
///
/// Comments and likes of the post are deleted with it.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    if !state.posts.delete(post_id).await? {
        return Err(post_not_found(post_id));
    }

    Ok(HttpResponse::NoContent().finish())
}
