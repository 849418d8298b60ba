use teloxide::prelude::*;
use crate::bot::reply::Reply;
use crate::utils::{feedback::deliver, logging::log_non_command};

/// Answers any text that is not one of our commands, unknown slash commands
/// included, with a pointer to `/help`.
pub async fn handle_general_message(
    bot: Bot,
    msg: Message,
) -> ResponseResult<()> {
    let (user, user_id) = super::sender(&msg);
    log_non_command(&user, user_id, msg.chat.id.0, msg.text().unwrap_or_default());

    deliver(&bot, msg.chat.id, &Reply::fallback()).await;
    Ok(())
}
