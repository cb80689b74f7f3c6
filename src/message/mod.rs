pub mod message_dto;
pub mod message_handlers;
pub mod message_models;
pub mod message_repository;
pub mod message_service;

pub use message_dto::{PaginatedResponse, PostMessageRequest, PostMessageResponse, SenderPayload};
pub use message_handlers::{get_conversation_messages, post_message};
pub use message_models::{Message, MessageResponse};
pub use message_repository::MessageRepository;
pub use message_service::MessageService;
