use crate::bot::reply::Reply;
use crate::links::Action;
use crate::utils::markdown::{bold, url_link};

/// Presentation of a link-only command: which table entry it points at and
/// how the reply is labelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkCommand {
    /// Link table entry
    pub action: Action,
    /// Emoji shown before the label
    pub emoji: &'static str,
    /// Bold label, unescaped
    pub label: &'static str,
}

pub const BUY: LinkCommand = LinkCommand { action: Action::Buy, emoji: "🛒", label: "Buy $SUPA:" };
pub const SAVE: LinkCommand = LinkCommand { action: Action::Save, emoji: "💰", label: "Supa Save (Earn Yield):" };
pub const SEEK: LinkCommand = LinkCommand { action: Action::Seek, emoji: "🔎", label: "Supa Seek (Block Explorer):" };
pub const SECRET: LinkCommand = LinkCommand { action: Action::Secret, emoji: "🤫", label: "Supa Secret (Encrypted Memos):" };
pub const STAKE: LinkCommand = LinkCommand { action: Action::Stake, emoji: "🔒", label: "Stake $SUPA:" };
pub const REGISTER: LinkCommand = LinkCommand { action: Action::Register, emoji: "🏷️", label: "Register .supa Subdomain:" };

/// Reply for `/buy`, `/save`, `/seek`, `/secret`, `/stake` and `/register`.
pub fn link_reply(link: &LinkCommand) -> Reply {
    Reply::rich(format!(
        "{} {}\n{}",
        link.emoji,
        bold(link.label),
        url_link(link.action.url())
    ))
}
