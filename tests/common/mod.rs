//! A local stand-in for the Telegram Bot API. Answers `getMe`, records
//! every `sendMessage` body and fails every other method.

use std::sync::{Arc, Mutex};

use axum::{body::Bytes, extract::State, http::Uri, Json, Router};
use serde_json::{json, Value};
use teloxide::prelude::*;
use teloxide::types::{Me, Update};

pub const BOT_USERNAME: &str = "supalinkbot";
pub const CHAT_ID: i64 = 42;

#[derive(Clone)]
struct StubState {
    sent: Arc<Mutex<Vec<Value>>>,
    reject_token: bool,
}

pub struct TelegramStub {
    pub bot: Bot,
    sent: Arc<Mutex<Vec<Value>>>,
}

impl TelegramStub {
    pub async fn start() -> Self {
        Self::start_with(false).await
    }

    /// Answers every call with `401 Unauthorized`.
    pub async fn rejecting_token() -> Self {
        Self::start_with(true).await
    }

    async fn start_with(reject_token: bool) -> Self {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let state = StubState { sent: sent.clone(), reject_token };
        let app = Router::new().fallback(answer).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let bot = Bot::new("123456:TEST").set_api_url(format!("http://{addr}/").parse().unwrap());
        Self { bot, sent }
    }

    pub async fn me(&self) -> Me {
        self.bot.get_me().await.unwrap()
    }

    /// `sendMessage` bodies received so far.
    pub fn sent(&self) -> Vec<Value> {
        self.sent.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

fn bot_user() -> Value {
    json!({
        "id": 777,
        "is_bot": true,
        "first_name": "Supa",
        "username": BOT_USERNAME,
    })
}

async fn answer(State(state): State<StubState>, uri: Uri, body: Bytes) -> Json<Value> {
    if state.reject_token {
        return Json(json!({ "ok": false, "error_code": 401, "description": "Unauthorized" }));
    }

    let method = uri.path().rsplit('/').next().unwrap_or_default().to_lowercase();
    match method.as_str() {
        "getme" => {
            let mut me = bot_user();
            me["can_join_groups"] = json!(true);
            me["can_read_all_group_messages"] = json!(false);
            me["supports_inline_queries"] = json!(false);
            Json(json!({ "ok": true, "result": me }))
        }
        "sendmessage" => {
            let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
            state.sent.lock().unwrap().push(request.clone());
            Json(json!({
                "ok": true,
                "result": {
                    "message_id": 100,
                    "date": 1_700_000_000,
                    "chat": { "id": request["chat_id"], "type": "private", "first_name": "Alice" },
                    "from": bot_user(),
                    "text": request["text"],
                }
            }))
        }
        _ => Json(json!({ "ok": false, "error_code": 400, "description": "Bad Request: not stubbed" })),
    }
}

fn message_update(content: Value) -> Update {
    let mut message = json!({
        "message_id": 10,
        "date": 1_700_000_000,
        "chat": { "id": CHAT_ID, "type": "private", "first_name": "Alice" },
        "from": { "id": CHAT_ID, "is_bot": false, "first_name": "Alice", "username": "alice" },
    });
    if let (Some(message), Some(content)) = (message.as_object_mut(), content.as_object()) {
        message.extend(content.clone());
    }
    // teloxide 0.12 cannot deserialize `Update` via `from_value`, go through a string
    serde_json::from_str(&json!({ "update_id": 1, "message": message }).to_string()).unwrap()
}

/// A private text message from Alice.
pub fn text_update(text: &str) -> Update {
    message_update(json!({ "text": text }))
}

/// A private location message from Alice, which carries no text.
pub fn location_update() -> Update {
    message_update(json!({ "location": { "latitude": 48.85, "longitude": 2.35 } }))
}
