//! Comment handlers, nested under a post.

use actix_web::{HttpResponse, web};

use feed_core::domain::{Comment, CommentId, PostId};
use feed_shared::dto::{CommentResponse, CreateCommentRequest, UpdateContentRequest};

use super::post_not_found;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Load a comment, treating a comment of another post as missing.
async fn find_on_post(
    state: &AppState,
    post_id: PostId,
    comment_id: CommentId,
) -> AppResult<Comment> {
    state
        .comments
        .get(comment_id)
        .await?
        .filter(|c| c.post_id == post_id)
        .ok_or_else(|| comment_not_found(comment_id))
}

fn comment_not_found(comment_id: CommentId) -> AppError {
    AppError::NotFound(format!("Comment with id {} not found", comment_id))
}

/// GET /api/posts/{post_id}/comments
pub async fn list_comments(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let comments = state.comments.list_by_post(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(
        comments
            .into_iter()
            .map(CommentResponse::from)
            .collect::<Vec<_>>(),
    ))
}

/// POST /api/posts/{post_id}/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let req = body.into_inner();

    let comment = state
        .comments
        .create(post_id, req.user_name, req.content)
        .await?
        .ok_or_else(|| post_not_found(post_id))?;

    Ok(HttpResponse::Created().json(CommentResponse::from(comment)))
}

/// GET /api/posts/{post_id}/comments/{comment_id}
pub async fn get_comment(
    state: web::Data<AppState>,
    path: web::Path<(PostId, CommentId)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    let comment = find_on_post(&state, post_id, comment_id).await?;

    Ok(HttpResponse::Ok().json(CommentResponse::from(comment)))
}

/// PATCH /api/posts/{post_id}/comments/{comment_id}
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<(PostId, CommentId)>,
    body: web::Json<UpdateContentRequest>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    find_on_post(&state, post_id, comment_id).await?;

    // Checked again inside the service; a comment deleted meanwhile is a 404.
    let comment = state
        .comments
        .update(comment_id, body.into_inner().content)
        .await?
        .ok_or_else(|| comment_not_found(comment_id))?;

    Ok(HttpResponse::Ok().json(CommentResponse::from(comment)))
}

/// DELETE /api/posts/{post_id}/comments/{comment_id}
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<(PostId, CommentId)>,
) -> AppResult<HttpResponse> {
    let (post_id, comment_id) = path.into_inner();
    find_on_post(&state, post_id, comment_id).await?;

    // The service reports a comment deleted since the lookup as absent.
    if !state.comments.delete(comment_id).await? {
        return Err(comment_not_found(comment_id));
    }

    Ok(HttpResponse::NoContent().finish())
}
