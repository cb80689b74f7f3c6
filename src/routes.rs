use crate::{
    conversation::{self, ConversationSummary, OtherUser},
    message::{
        self, Message, MessageResponse, PostMessageRequest, PostMessageResponse, SenderPayload,
    },
    middleware::auth_middleware,
    state::AppState,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        message::message_handlers::post_message,
        conversation::conversation_handlers::get_conversations,
    ),
    components(
        schemas(
            PostMessageRequest,
            PostMessageResponse,
            SenderPayload,
            Message,
            MessageResponse,
            ConversationSummary,
            OtherUser,
        )
    ),
    tags(
        (name = "messages", description = "Message posting endpoints"),
        (name = "conversations", description = "Conversation listing endpoints")
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::Http::new(
                        utoipa::openapi::security::HttpAuthScheme::Bearer,
                    ),
                ),
            )
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Protected routes (auth required)
    let message_routes = Router::new()
        .route("/", post(message::post_message))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let conversation_routes = Router::new()
        .route("/", get(conversation::get_conversations))
        .route("/:id/messages", get(message::get_conversation_messages))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api_routes = Router::new()
        .nest("/messages", message_routes)
        .nest("/conversations", conversation_routes);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
