//! Like handlers, nested under a post.

use actix_web::{HttpResponse, web};

use feed_core::domain::PostId;
use feed_shared::dto::{LikeRequest, LikeResponse, LikeSummaryResponse, UserQuery};

use super::post_not_found;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts/{post_id}/likes?userName=
///
/// Counts the like rows directly; `liked` is filled in when a user is named.
pub async fn like_summary(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    query: web::Query<UserQuery>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let like_count = state.likes.count_by_post(post_id).await?;
    let user_names = state
        .likes
        .list_by_post(post_id)
        .await?
        .into_iter()
        .map(|like| like.user_name)
        .collect();
    let liked = match query.into_inner().user_name {
        Some(user_name) => Some(state.likes.has_liked(post_id, &user_name).await?),
        None => None,
    };

    Ok(HttpResponse::Ok().json(LikeSummaryResponse {
        post_id,
        like_count,
        user_names,
        liked,
    }))
}

/// POST /api/posts/{post_id}/likes
///
/// Liking twice returns the existing like.
pub async fn add_like(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<LikeRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let like = state
        .likes
        .add(post_id, body.into_inner().user_name)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;

    Ok(HttpResponse::Created().json(LikeResponse::from(like)))
}

/// DELETE /api/posts/{post_id}/likes?userName=
pub async fn remove_like(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    query: web::Query<UserQuery>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let user_name = query
        .into_inner()
        .user_name
        .ok_or_else(|| AppError::BadRequest("userName query parameter is required".to_string()))?;

    if !state.likes.remove(post_id, &user_name).await? {
        return Err(AppError::NotFound(format!(
            "Like by {} on post {} not found",
            user_name, post_id
        )));
    }

    Ok(HttpResponse::NoContent().finish())
}
