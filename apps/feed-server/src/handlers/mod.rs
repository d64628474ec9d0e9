//! HTTP handlers and route configuration.

mod comments;
mod health;
mod likes;
mod posts;

use actix_web::web;

use feed_core::domain::PostId;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{post_id}", web::get().to(posts::get_post))
                    .route("/{post_id}", web::patch().to(posts::update_post))
                    .route("/{post_id}", web::delete().to(posts::delete_post))
                    // Comments
                    .route("/{post_id}/comments", web::get().to(comments::list_comments))
                    .route("/{post_id}/comments", web::post().to(comments::create_comment))
                    .route(
                        "/{post_id}/comments/{comment_id}",
                        web::get().to(comments::get_comment),
                    )
                    .route(
                        "/{post_id}/comments/{comment_id}",
                        web::patch().to(comments::update_comment),
                    )
                    .route(
                        "/{post_id}/comments/{comment_id}",
                        web::delete().to(comments::delete_comment),
                    )
                    // Likes
                    .route("/{post_id}/likes", web::get().to(likes::like_summary))
                    .route("/{post_id}/likes", web::post().to(likes::add_like))
                    .route("/{post_id}/likes", web::delete().to(likes::remove_like)),
            ),
    );
}

fn post_not_found(post_id: PostId) -> AppError {
    AppError::NotFound(format!("Post with id {} not found", post_id))
}
