use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Row shape produced by the conversations-listing query.
#[derive(Debug, FromRow)]
pub struct ConversationListing {
    pub id: Uuid,
    pub other_user_id: Uuid,
    pub other_username: String,
    pub latest_message_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One entry of `GET /api/conversations`: the conversation, the other
/// participant, and the text of the most recent message (null until the
/// first message lands).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    pub id: Uuid,
    pub other_user: OtherUser,
    pub latest_message_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OtherUser {
    pub id: Uuid,
    pub username: String,
    pub online: bool,
}
