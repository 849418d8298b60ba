use super::Outcome;
use crate::bot::reply::Reply;
use crate::links::scan_url;
use crate::utils::markdown::{code, escape_markdown, url_link};
use crate::utils::validation::validate_token_address;

const USAGE: &str = "/scan <token_address>";

/// Handles `/scan`. The argument is trimmed first; blank counts as absent.
/// A rejected address comes back with its reason next to the warning reply.
pub fn scan(argument: Option<&str>) -> Outcome {
    let address = match argument.map(str::trim).filter(|a| !a.is_empty()) {
        Some(address) => address,
        None => return Outcome::reply(usage_prompt()),
    };

    match validate_token_address(address) {
        Ok(()) => Outcome::reply(Reply::rich(format!(
            "🔍 *SupaScan for* {}:\n{}",
            code(address),
            url_link(&scan_url(address))
        ))),
        Err(reason) => Outcome {
            reply: Reply::rich(format!(
                "⚠️ {} {}\n{}\n\nUsage: {}",
                escape_markdown("That doesn't look like a valid Solana address:"),
                code(address),
                escape_markdown("Please check and try again."),
                code(USAGE)
            )),
            rejected: Some(reason),
        },
    }
}

fn usage_prompt() -> Reply {
    Reply::rich(format!(
        "{}\n\nUsage: {}",
        escape_markdown("Please provide a token address after the command."),
        code(USAGE)
    ))
}
