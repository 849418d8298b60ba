use anyhow::anyhow;
use teloxide::prelude::*;
use teloxide::types::Me;

use crate::services::health::Readiness;
use crate::utils::logging::log_system_event;

/// Confirms the token with `getMe` and only then marks the service ready.
///
/// The dispatcher asks for `getMe` itself and panics if it fails, so this
/// runs first and turns a bad token or an unreachable API into an error.
pub async fn connect(bot: &Bot, readiness: &Readiness) -> anyhow::Result<Me> {
    let me = bot
        .get_me()
        .await
        .map_err(|e| anyhow!("Failed to start bot: {}", e))?;

    log_system_event("Connected to Telegram", Some(&format!("@{}", me.username())));
    readiness.mark_ready();
    Ok(me)
}
