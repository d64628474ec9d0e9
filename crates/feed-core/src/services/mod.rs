//! Services - the operations exposed to the HTTP layer.
//!
//! Every write that touches a child row and a post counter runs inside one
//! transaction, so counters always match the live child rows.

mod comment;
mod like;
mod post;

pub use comment::CommentService;
pub use like::LikeService;
pub use post::PostService;

use crate::error::{DomainError, DomainResult};

/// Reject blank user names and contents.
fn require_text(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be blank")));
    }
    Ok(())
}
