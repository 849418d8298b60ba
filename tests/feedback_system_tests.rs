use async_trait::async_trait;
use std::sync::Mutex;
use supa_link_bot::bot::commands::{dispatch, Command};
use supa_link_bot::bot::reply::{Formatting, Reply, APOLOGY_TEXT};
use supa_link_bot::utils::feedback::{deliver, DeliveryOutcome, ReplySink};
use teloxide::types::ChatId;
use teloxide::{ApiError, RequestError};

/// Records every send attempt and fails the first `failures` of them.
struct RecordingSink {
    failures: usize,
    attempts: Mutex<Vec<(ChatId, Reply)>>,
}

impl RecordingSink {
    fn failing(failures: usize) -> Self {
        Self {
            failures,
            attempts: Mutex::new(Vec::new()),
        }
    }

    fn attempts(&self) -> Vec<(ChatId, Reply)> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplySink for RecordingSink {
    async fn send_reply(&self, chat_id: ChatId, reply: &Reply) -> Result<(), RequestError> {
        let mut attempts = self.attempts.lock().unwrap();
        attempts.push((chat_id, reply.clone()));
        if attempts.len() <= self.failures {
            Err(RequestError::Api(ApiError::BotBlocked))
        } else {
            Ok(())
        }
    }
}

const CHAT: ChatId = ChatId(42);

#[tokio::test]
async fn test_successful_delivery_sends_once() {
    let sink = RecordingSink::failing(0);
    let reply = dispatch(Command::Buy, None);

    let outcome = deliver(&sink, CHAT, &reply).await;

    assert_eq!(outcome, DeliveryOutcome::Delivered);
    assert_eq!(sink.attempts(), vec![(CHAT, reply)]);
}

#[tokio::test]
async fn test_failed_delivery_sends_apology() {
    let sink = RecordingSink::failing(1);
    let reply = dispatch(Command::Help, None);

    let outcome = deliver(&sink, CHAT, &reply).await;

    assert_eq!(outcome, DeliveryOutcome::Apologized);
    let attempts = sink.attempts();
    assert_eq!(attempts.len(), 2);
    assert_eq!(attempts[0].1, reply);
    assert_eq!(attempts[1].0, CHAT);
    assert_eq!(attempts[1].1.text, APOLOGY_TEXT);
    assert_eq!(attempts[1].1.formatting, Formatting::PlainText);
}

#[tokio::test]
async fn test_apology_failure_is_swallowed() {
    let sink = RecordingSink::failing(2);

    let outcome = deliver(&sink, CHAT, &Reply::fallback()).await;

    assert_eq!(outcome, DeliveryOutcome::Undeliverable);
    assert_eq!(sink.attempts().len(), 2);
}

#[tokio::test]
async fn test_delivery_through_trait_object() {
    let sink = RecordingSink::failing(0);
    let dyn_sink: &dyn ReplySink = &sink;

    let outcome = deliver(dyn_sink, CHAT, &Reply::fallback()).await;

    assert_eq!(outcome, DeliveryOutcome::Delivered);
    assert_eq!(sink.attempts()[0].1, Reply::fallback());
}
