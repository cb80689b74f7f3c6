use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::message::message_models::MessageResponse;

/// Body of `POST /api/messages`. `conversationId` stays null until the
/// client has seen the conversation; `sender` is the client's copy of its
/// own user object and is echoed back in the response.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostMessageRequest {
    pub recipient_id: Uuid,
    #[validate(length(min = 1))]
    pub text: String,
    pub conversation_id: Option<Uuid>,
    pub sender: SenderPayload,
}

/// Client-supplied sender object. Only `id` is interpreted; every other
/// field is carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SenderPayload {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online: Option<bool>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PostMessageResponse {
    pub message: MessageResponse,
    pub sender: SenderPayload,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}
