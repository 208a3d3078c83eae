//! Core types for the comment relay.
//!
//! This crate holds the request-scoped domain types shared by the upstream
//! client and the HTTP gateway:
//!
//! - **Identifiers**: the `PostId` taken from the request path
//! - **Comments**: the inbound body, its validation, and the outbound payload
//! - **Error types**: validation failures
//!
//! # Example
//!
//! ```
//! use comment_relay_core::{CommentInput, PostId};
//!
//! let post_id = PostId::new("123");
//! let input: CommentInput = serde_json::from_str(
//!     r#"{"id":1,"name":"Test User","email":"test@test.com","body":"Test comment"}"#,
//! ).unwrap();
//!
//! let comment = input.validate(&post_id).unwrap();
//! assert_eq!(comment.post_id, Some(123));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod comment;
pub mod error;
pub mod ids;

pub use comment::{is_truthy, CommentInput, NewComment};
pub use error::{Result, ValidationError};
pub use ids::PostId;
