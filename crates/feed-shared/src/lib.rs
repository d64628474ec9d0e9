//! # Feed Shared
//!
//! Request and response types of the HTTP API.
//! JSON field names are camelCase (`userName`, `likeCount`, ...).

pub mod dto;
pub mod response;

pub use response::{ErrorResponse, Problem};
