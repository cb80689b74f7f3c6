use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// A persisted pairing of two users under which messages are grouped.
///
/// Created lazily on first contact. The columns hold whichever order the
/// first sender and recipient arrived in; lookups match both orders.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Conversation {
    pub id: Uuid,
    pub user1_id: Uuid,
    pub user2_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Whether a user is one of the two participants.
    pub fn includes(&self, user_id: Uuid) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conversation(user1_id: Uuid, user2_id: Uuid) -> Conversation {
        let now = Utc::now();
        Conversation {
            id: Uuid::new_v4(),
            user1_id,
            user2_id,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn includes_both_participants() {
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();
        let convo = conversation(alice, bob);

        assert!(convo.includes(alice));
        assert!(convo.includes(bob));
        assert!(!convo.includes(Uuid::new_v4()));
    }
}
