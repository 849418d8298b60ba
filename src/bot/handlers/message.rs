use teloxide::prelude::*;
use crate::bot::commands::{route, ParsedCommand};
use crate::utils::{
    feedback::{deliver, DeliveryOutcome},
    logging::{log_command_error, log_command_start, log_command_success, log_validation_error},
};

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: ParsedCommand,
) -> ResponseResult<()> {
    let chat_id = msg.chat.id.0;
    let (user, user_id) = super::sender(&msg);
    let name = cmd.command.name();
    let argument = cmd.argument.as_deref().map(str::trim).filter(|a| !a.is_empty());

    log_command_start(name, &user, user_id, chat_id, argument);

    let outcome = route(cmd.command, cmd.argument.as_deref());
    if let (Some(reason), Some(value)) = (&outcome.rejected, argument) {
        log_validation_error(name, "token_address", value, &reason.to_string(), &user, user_id, chat_id);
    }

    match deliver(&bot, msg.chat.id, &outcome.reply).await {
        DeliveryOutcome::Delivered => log_command_success(name, &user, user_id, chat_id, None),
        DeliveryOutcome::Apologized => {
            log_command_error(name, &user, user_id, chat_id, "reply failed, apology sent")
        }
        DeliveryOutcome::Undeliverable => {
            log_command_error(name, &user, user_id, chat_id, "reply and apology both failed")
        }
    }

    Ok(())
}
