use dashmap::DashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Process-wide set of user ids that currently hold an active connection.
///
/// The transport that feeds this set lives outside this service; request
/// handlers only ever ask membership questions.
#[derive(Clone)]
pub struct OnlineUsers {
    users: Arc<DashSet<Uuid>>,
}

impl OnlineUsers {
    pub fn new() -> Self {
        Self {
            users: Arc::new(DashSet::new()),
        }
    }

    /// Record that a user now holds an active connection.
    pub fn mark_online(&self, user_id: Uuid) {
        self.users.insert(user_id);
        tracing::info!("User {} is online", user_id);
    }

    /// Record that a user dropped their connection.
    pub fn mark_offline(&self, user_id: &Uuid) {
        self.users.remove(user_id);
        tracing::info!("User {} went offline", user_id);
    }

    /// Check if a user is online.
    pub fn is_online(&self, user_id: &Uuid) -> bool {
        self.users.contains(user_id)
    }

    /// Get count of online users.
    pub fn online_count(&self) -> usize {
        self.users.len()
    }
}

impl Default for OnlineUsers {
    fn default() -> Self {
        Self::new()
    }
}
