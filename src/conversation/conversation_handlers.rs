use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    conversation::conversation_dto::{ConversationSummary, OtherUser},
    error::Result,
    middleware::AuthUser,
    state::AppState,
};

/// List the caller's conversations, newest activity first
#[utoipa::path(
    get,
    path = "/api/conversations",
    tag = "conversations",
    responses(
        (status = 200, description = "Conversations with their latest message", body = [ConversationSummary]),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_conversations(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<impl IntoResponse> {
    let listings = state.conversation_repository.list_for_user(user_id).await?;

    let summaries: Vec<ConversationSummary> = listings
        .into_iter()
        .map(|listing| {
            let online = state.online_users.is_online(&listing.other_user_id);
            ConversationSummary {
                id: listing.id,
                other_user: OtherUser {
                    id: listing.other_user_id,
                    username: listing.other_username,
                    online,
                },
                latest_message_text: listing.latest_message_text,
                created_at: listing.created_at,
            }
        })
        .collect();

    Ok(Json(summaries))
}
