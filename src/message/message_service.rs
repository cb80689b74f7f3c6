use crate::{
    conversation::{
        conversation_models::Conversation, conversation_repository::ConversationRepository,
    },
    error::{AppError, Result},
    message::{
        message_dto::PostMessageRequest, message_models::Message,
        message_repository::MessageRepository,
    },
};
use uuid::Uuid;

/// Outcome of posting a message: the stored row, the conversation it landed
/// in, and whether that conversation was created by this call.
pub struct PostedMessage {
    pub message: Message,
    pub conversation: Conversation,
    pub conversation_created: bool,
}

#[derive(Clone)]
pub struct MessageService {
    conversations: ConversationRepository,
    messages: MessageRepository,
}

impl MessageService {
    pub fn new(conversations: ConversationRepository, messages: MessageRepository) -> Self {
        Self {
            conversations,
            messages,
        }
    }

    /// Post a message from `sender_id` to the recipient named in the payload.
    ///
    /// Resolves the conversation between the two users, creating it on first
    /// contact. A client-supplied conversation id that does not match the
    /// resolved conversation is rejected before anything is written.
    pub async fn post_message(
        &self,
        sender_id: Uuid,
        payload: &PostMessageRequest,
    ) -> Result<PostedMessage> {
        // Check if the conversation already exists.
        let existing = self
            .conversations
            .find_between(sender_id, payload.recipient_id)
            .await?;

        // A claimed conversation id must equal the resolved one, including
        // the case where nothing resolved yet.
        if let Some(claimed) = payload.conversation_id {
            if existing.as_ref().map(|c| c.id) != Some(claimed) {
                return Err(AppError::Unauthorized(
                    "unauthorized access to the conversation".to_string(),
                ));
            }
        }

        let (conversation, conversation_created) = match existing {
            Some(conversation) => (conversation, false),
            None => (
                self.conversations
                    .create(sender_id, payload.recipient_id)
                    .await?,
                true,
            ),
        };

        let message = self
            .messages
            .create(conversation.id, sender_id, &payload.text)
            .await?;

        Ok(PostedMessage {
            message,
            conversation,
            conversation_created,
        })
    }
}
