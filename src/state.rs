use std::sync::Arc;

use crate::{
    conversation::conversation_repository::ConversationRepository,
    db::DbPool,
    message::{message_repository::MessageRepository, message_service::MessageService},
    presence::OnlineUsers,
};

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: Arc<Config>,
    pub online_users: OnlineUsers,
    pub conversation_repository: ConversationRepository,
    pub message_repository: MessageRepository,
    pub message_service: MessageService,
}

impl AppState {
    pub fn new(db: DbPool, config: Config) -> Self {
        let conversation_repository = ConversationRepository::new(db.clone());
        let message_repository = MessageRepository::new(db.clone());
        let message_service = MessageService::new(
            conversation_repository.clone(),
            message_repository.clone(),
        );

        Self {
            db,
            config: Arc::new(config),
            online_users: OnlineUsers::new(),
            conversation_repository,
            message_repository,
            message_service,
        }
    }
}

#[derive(Clone)]
pub struct Config {
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            jwt_expiration_hours: std::env::var("JWT_EXPIRATION_HOURS")
                .unwrap_or_else(|_| "24".to_string())
                .parse()
                .expect("JWT_EXPIRATION_HOURS must be a number"),
        }
    }
}
