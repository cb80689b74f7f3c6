use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, Result},
    message::{
        message_dto::{PaginatedResponse, PostMessageRequest, PostMessageResponse},
        message_models::MessageResponse,
    },
    middleware::AuthUser,
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    page: Option<u32>,
    limit: Option<u32>,
}

/// Post a message to another user
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = "messages",
    request_body = PostMessageRequest,
    responses(
        (status = 200, description = "Message stored", body = PostMessageResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized, or conversation id mismatch")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn post_message(
    State(state): State<AppState>,
    AuthUser(sender_id): AuthUser,
    Json(payload): Json<PostMessageRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let posted = state
        .message_service
        .post_message(sender_id, &payload)
        .await?;

    // Echo the client's sender object back. Only when this call created the
    // conversation is the online flag attached, keyed off the id inside
    // that object.
    let mut sender = payload.sender;
    if posted.conversation_created && state.online_users.is_online(&sender.id) {
        sender.online = Some(true);
    }

    Ok(Json(PostMessageResponse {
        message: MessageResponse::from(posted.message),
        sender,
    }))
}

/// Paginated history of one conversation, oldest first. Callers that are
/// not a participant are turned away.
pub async fn get_conversation_messages(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(conversation_id): Path<Uuid>,
    Query(query): Query<MessageQuery>,
) -> Result<impl IntoResponse> {
    let conversation = state
        .conversation_repository
        .find_by_id(conversation_id)
        .await?
        .ok_or(AppError::NotFound("Conversation not found".to_string()))?;

    if !conversation.includes(user_id) {
        return Err(AppError::Unauthorized(
            "unauthorized access to the conversation".to_string(),
        ));
    }

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(50);
    let offset = ((page - 1) * limit) as i64;

    let messages = state
        .message_repository
        .list_for_conversation(conversation_id, limit as i64, offset)
        .await?;

    let total = state
        .message_repository
        .count_for_conversation(conversation_id)
        .await?;

    let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;

    let data: Vec<MessageResponse> = messages.into_iter().map(MessageResponse::from).collect();

    Ok(Json(PaginatedResponse {
        data,
        total,
        page,
        limit,
        total_pages,
    }))
}
