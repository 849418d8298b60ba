use teloxide::RequestError;
use tracing::{error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: i64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_START: {} by {}({}) in chat {} - {}",
            command, user, user_id, chat_id, d
        ),
        None => info!(
            "CMD_START: {} by {}({}) in chat {}",
            command, user, user_id, chat_id
        ),
    }
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user: &str, user_id: i64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {} - {}",
            command, user, user_id, chat_id, d
        ),
        None => info!(
            "CMD_SUCCESS: {} by {}({}) in chat {}",
            command, user, user_id, chat_id
        ),
    }
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user: &str, user_id: i64, chat_id: i64, error: &str) {
    error!(
        "CMD_ERROR: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, error
    );
}

/// Logs validation errors with consistent format
pub fn log_validation_error(command: &str, field: &str, value: &str, error: &str, user: &str, user_id: i64, chat_id: i64) {
    warn!(
        "VALIDATION_ERROR: {} - {} field '{}' invalid: {} - user {}({}) in chat {}",
        command, field, value, error, user, user_id, chat_id
    );
}

/// Logs text that is not a command for this bot
pub fn log_non_command(user: &str, user_id: i64, chat_id: i64, text: &str) {
    info!(
        "NON_COMMAND: from {}({}) in chat {}: {}",
        user, user_id, chat_id, text
    );
}

/// Logs a failed Telegram request, telling API rejections apart from
/// connectivity problems
pub fn log_transport_error(operation: &str, chat_id: i64, err: &RequestError) {
    match err {
        RequestError::Api(api) => error!(
            "TRANSPORT_ERROR: {} in chat {} - error in request: {}",
            operation, chat_id, api
        ),
        RequestError::Network(net) => error!(
            "TRANSPORT_ERROR: {} in chat {} - could not contact Telegram: {}",
            operation, chat_id, net
        ),
        other => error!(
            "TRANSPORT_ERROR: {} in chat {} - unknown error: {}",
            operation, chat_id, other
        ),
    }
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
