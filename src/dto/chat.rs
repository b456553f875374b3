use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    models::Product,
    services::{
        chat_service::{ChatResponse, Intent},
        delivery::FAULT_MESSAGE,
    },
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatRequest {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Text,
    ProductSuggestion,
    Error,
}

/// One assistant message, shaped for a chat transcript the caller keeps.
#[derive(Debug, Serialize, ToSchema)]
pub struct ChatReply {
    pub id: Uuid,
    pub content: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
    pub kind: MessageKind,
    pub intent: Option<Intent>,
    pub products: Vec<Product>,
}

impl ChatReply {
    fn bot(
        content: String,
        kind: MessageKind,
        intent: Option<Intent>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            is_bot: true,
            timestamp: Utc::now(),
            kind,
            intent,
            products,
        }
    }

    pub fn fault() -> Self {
        Self::bot(FAULT_MESSAGE.to_string(), MessageKind::Error, None, Vec::new())
    }

    pub fn text(content: &str) -> Self {
        Self::bot(content.to_string(), MessageKind::Text, None, Vec::new())
    }
}

impl From<ChatResponse> for ChatReply {
    fn from(response: ChatResponse) -> Self {
        let kind = if response.products.is_empty() {
            MessageKind::Text
        } else {
            MessageKind::ProductSuggestion
        };
        Self::bot(response.message, kind, Some(response.intent), response.products)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Welcome {
    pub greeting: ChatReply,
    pub quick_actions: Vec<String>,
}
