use crate::{
    conversation::{conversation_dto::ConversationListing, conversation_models::Conversation},
    error::Result,
};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ConversationRepository {
    pool: PgPool,
}

impl ConversationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the conversation between two users, matching either column order.
    pub async fn find_between(
        &self,
        user_id: Uuid,
        other_user_id: Uuid,
    ) -> Result<Option<Conversation>> {
        let conversation = sqlx::query_as::<_, Conversation>(
            "SELECT * FROM conversations
             WHERE (user1_id = $1 AND user2_id = $2)
                OR (user1_id = $2 AND user2_id = $1)
             LIMIT 1",
        )
        .bind(user_id)
        .bind(other_user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(conversation)
    }

    pub async fn create(&self, user1_id: Uuid, user2_id: Uuid) -> Result<Conversation> {
        let conversation = sqlx::query_as::<_, Conversation>(
            "INSERT INTO conversations (user1_id, user2_id)
             VALUES ($1, $2)
             RETURNING *",
        )
        .bind(user1_id)
        .bind(user2_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(conversation)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Conversation>> {
        let conversation =
            sqlx::query_as::<_, Conversation>("SELECT * FROM conversations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(conversation)
    }

    /// All conversations a user participates in, newest activity first.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<ConversationListing>> {
        let listings = sqlx::query_as::<_, ConversationListing>(
            "SELECT c.id,
                    u.id AS other_user_id,
                    u.username AS other_username,
                    m.text AS latest_message_text,
                    c.created_at
             FROM conversations c
             JOIN users u
               ON u.id = CASE WHEN c.user1_id = $1 THEN c.user2_id ELSE c.user1_id END
             LEFT JOIN LATERAL (
                 SELECT text, created_at
                 FROM messages
                 WHERE conversation_id = c.id
                 ORDER BY created_at DESC
                 LIMIT 1
             ) m ON TRUE
             WHERE c.user1_id = $1 OR c.user2_id = $1
             ORDER BY m.created_at DESC NULLS LAST, c.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(listings)
    }
}
