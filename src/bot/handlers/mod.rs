pub mod general_message;
pub mod message;

use teloxide::{
    dispatching::UpdateHandler,
    prelude::*,
    types::Me,
    RequestError,
};
use crate::bot::commands::{parse_command, ParsedCommand};

/// Update routing: commands for this bot go to the command handler, any
/// other text gets the fallback reply. Non-text messages are dropped.
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .branch(dptree::filter_map(command_for_me).endpoint(message::command_handler))
        .branch(
            dptree::filter(|msg: Message| msg.text().is_some())
                .endpoint(general_message::handle_general_message),
        )
}

fn command_for_me(msg: Message, me: Me) -> Option<ParsedCommand> {
    parse_command(msg.text()?, me.username())
}

/// Display name and id of whoever sent `msg`, for log lines.
pub(crate) fn sender(msg: &Message) -> (String, i64) {
    match msg.from() {
        Some(user) => (
            user.username.clone().unwrap_or_else(|| user.first_name.clone()),
            user.id.0 as i64,
        ),
        None => ("unknown".to_string(), 0),
    }
}
