use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};

use crate::{
    dto::chat::{ChatReply, ChatRequest, Welcome},
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    services::{
        chat_service::{QUICK_ACTIONS, WELCOME_MESSAGE},
        delivery::Delivered,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(send_message))
        .route("/welcome", get(welcome))
}

#[utoipa::path(
    post,
    path = "/api/chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply, possibly with product suggestions", body = ApiResponse<ChatReply>),
        (status = 400, description = "Empty message"),
    ),
    tag = "Chat"
)]
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequest>,
) -> AppResult<Json<ApiResponse<ChatReply>>> {
    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest("message must not be empty".into()));
    }

    let response = state.responder.respond(&payload.message);
    let reply = match state.delivery.deliver(response).await {
        Delivered::Reply(response) => ChatReply::from(response),
        Delivered::Fault => ChatReply::fault(),
    };

    Ok(Json(ApiResponse::success("OK", reply, Some(Meta::empty()))))
}

#[utoipa::path(
    get,
    path = "/api/chat/welcome",
    responses(
        (status = 200, description = "Opening assistant message and quick actions", body = ApiResponse<Welcome>)
    ),
    tag = "Chat"
)]
pub async fn welcome() -> Json<ApiResponse<Welcome>> {
    let data = Welcome {
        greeting: ChatReply::text(WELCOME_MESSAGE),
        quick_actions: QUICK_ACTIONS.iter().map(|s| s.to_string()).collect(),
    };
    Json(ApiResponse::success("Welcome", data, Some(Meta::empty())))
}
