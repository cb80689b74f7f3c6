pub mod conversation_dto;
pub mod conversation_handlers;
pub mod conversation_models;
pub mod conversation_repository;

pub use conversation_dto::{ConversationSummary, OtherUser};
pub use conversation_handlers::get_conversations;
pub use conversation_models::Conversation;
pub use conversation_repository::ConversationRepository;
