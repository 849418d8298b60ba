use async_trait::async_trait;
use teloxide::prelude::*;
use crate::bot::reply::Reply;
use crate::utils::logging::log_transport_error;

/// Something that can put a [`Reply`] into a chat.
///
/// Implemented for [`Bot`]; tests swap in their own sink.
#[async_trait]
pub trait ReplySink: Send + Sync {
    /// Send one reply to `chat_id`.
    async fn send_reply(&self, chat_id: ChatId, reply: &Reply) -> ResponseResult<()>;
}

#[async_trait]
impl ReplySink for Bot {
    async fn send_reply(&self, chat_id: ChatId, reply: &Reply) -> ResponseResult<()> {
        let request = self.send_message(chat_id, reply.text.as_str());
        match reply.formatting.parse_mode() {
            Some(mode) => request.parse_mode(mode).await?,
            None => request.await?,
        };
        Ok(())
    }
}

/// What happened to a reply handed to [`deliver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The reply reached the chat
    Delivered,
    /// The reply failed, the apology went out instead
    Apologized,
    /// Neither the reply nor the apology could be sent
    Undeliverable,
}

/// Sends `reply`, falling back to the generic apology when that fails.
///
/// Errors are logged here and never returned, so one bad update cannot stop
/// the dispatcher.
pub async fn deliver<S>(sink: &S, chat_id: ChatId, reply: &Reply) -> DeliveryOutcome
where
    S: ReplySink + ?Sized,
{
    let err = match sink.send_reply(chat_id, reply).await {
        Ok(()) => return DeliveryOutcome::Delivered,
        Err(err) => err,
    };
    log_transport_error("send reply", chat_id.0, &err);

    match sink.send_reply(chat_id, &Reply::apology()).await {
        Ok(()) => DeliveryOutcome::Apologized,
        Err(err) => {
            log_transport_error("send apology", chat_id.0, &err);
            DeliveryOutcome::Undeliverable
        }
    }
}
