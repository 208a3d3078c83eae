//! Comment relay endpoints.
//!
//! Each handler performs exactly one upstream call and maps the outcome to a
//! response. Upstream bodies are passed through unchanged.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

use comment_relay_core::{CommentInput, PostId};
use comment_relay_upstream::CommentsApi;

use crate::error::{ApiError, MISSING_POST_ID};
use crate::state::GatewayState;

/// Root route: the caller forgot the post ID.
///
/// Answers 500 rather than 400; existing clients depend on this.
pub async fn missing_post_id() -> ApiError {
    ApiError::Internal(MISSING_POST_ID.to_string())
}

/// List the comments of a post.
///
/// ```text
/// GET /18525/comments
///
/// Response: 200 OK
/// [ { "id": 24500, "post_id": 18525, ... }, ... ]
/// ```
///
/// # Errors
///
/// 404 `Post not found.` when the upstream reports the post as missing, 500
/// `Error fetching data from <origin>` for any other failure.
pub async fn list_comments<A>(
    State(state): State<Arc<GatewayState<A>>>,
    Path(post_id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
    A: CommentsApi + 'static,
{
    let post_id = PostId::new(post_id);

    let comments = state
        .api
        .list_comments(&post_id)
        .await
        .map_err(|e| ApiError::list_failure(&e, &state.upstream_origin))?;

    Ok(Json(comments))
}

/// Add a comment to a post.
///
/// A body that is absent or not valid JSON counts as empty and fails
/// validation.
///
/// ```text
/// POST /123/comments
/// { "id": 1, "name": "Test User", "email": "test@test.com", "body": "Test comment" }
///
/// Response: 200 OK
/// <upstream body>
/// ```
///
/// # Errors
///
/// 400 `{"error":"Missing required fields"}` before any upstream call, or 500
/// with the upstream error message.
pub async fn add_comment<A>(
    State(state): State<Arc<GatewayState<A>>>,
    Path(post_id): Path<String>,
    body: Option<Json<CommentInput>>,
) -> Result<Json<Value>, ApiError>
where
    A: CommentsApi + 'static,
{
    let post_id = PostId::new(post_id);
    let input = body.map(|Json(input)| input).unwrap_or_default();

    let comment = input.validate(&post_id)?;

    let created = state
        .api
        .create_comment(&post_id, &comment)
        .await
        .map_err(ApiError::create_failure)?;

    tracing::debug!(post_id = %post_id, "Comment relayed");
    Ok(Json(created))
}
