//! # Feed Core
//!
//! The domain layer of the feed backend: posts, comments and likes.
//! This crate contains pure business logic with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::{DomainError, DomainResult};
pub use services::{CommentService, LikeService, PostService};
