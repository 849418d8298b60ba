use teloxide::types::ParseMode;

/// Reply sent to any text that is not one of our commands
pub const FALLBACK_TEXT: &str = "I only understand commands listed in the menu. Try /help";

/// Reply sent when delivering the real answer failed
pub const APOLOGY_TEXT: &str = "Sorry, something went wrong processing your request.";

/// How the platform should render a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatting {
    /// Sent as-is, no parse mode
    PlainText,
    /// Telegram MarkdownV2
    RichText,
}

impl Formatting {
    /// Parse mode to attach to the outgoing message, if any.
    pub fn parse_mode(self) -> Option<ParseMode> {
        match self {
            Formatting::PlainText => None,
            Formatting::RichText => Some(ParseMode::MarkdownV2),
        }
    }
}

/// A reply payload, built by the dispatcher and handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Message body, already escaped when `formatting` is rich
    pub text: String,
    /// Rendering mode
    pub formatting: Formatting,
}

impl Reply {
    /// Unformatted reply.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            formatting: Formatting::PlainText,
        }
    }

    /// MarkdownV2 reply. The caller is responsible for escaping.
    pub fn rich(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            formatting: Formatting::RichText,
        }
    }

    /// The fixed answer for non-command text.
    pub fn fallback() -> Self {
        Self::plain(FALLBACK_TEXT)
    }

    /// The generic apology sent after a failed delivery.
    pub fn apology() -> Self {
        Self::plain(APOLOGY_TEXT)
    }
}
