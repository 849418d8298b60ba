//! Static link table for the Supa Pump tool family.
//!
//! Every link-producing command resolves through [`Action::url`]. The table is
//! fixed at compile time and shared by all handlers.

/// A link-producing action. `ScanBase` is a prefix that needs a token
/// address appended, see [`scan_url`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// SupaSwap, where $SUPA is bought
    Buy,
    /// SupaScan token page prefix
    ScanBase,
    /// Supa Save yield vaults
    Save,
    /// Supa Seek block explorer
    Seek,
    /// Supa Secret encrypted memos
    Secret,
    /// $SUPA staking
    Stake,
    /// `.supa` subdomain registrar
    Register,
}

/// One row of the link table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkEntry {
    /// The action this row belongs to
    pub action: Action,
    /// Destination URL, or URL prefix for [`Action::ScanBase`]
    pub url: &'static str,
}

impl Action {
    /// All actions, in table order.
    pub const ALL: [Action; 7] = [
        Action::Buy,
        Action::ScanBase,
        Action::Save,
        Action::Seek,
        Action::Secret,
        Action::Stake,
        Action::Register,
    ];

    /// Destination for this action.
    pub const fn url(self) -> &'static str {
        match self {
            Action::Buy => "https://swap.supapump.fun/",
            Action::ScanBase => "https://scan.supapump.fun/token/",
            Action::Save => "https://save.supapump.fun/",
            Action::Seek => "https://seek.supapump.fun/",
            Action::Secret => "https://secret.supapump.fun/",
            Action::Stake => "https://stake.smithii.io/supa",
            Action::Register => "https://www.sns.id/sub-registrar/supapump",
        }
    }

    /// The table row for this action.
    pub const fn entry(self) -> LinkEntry {
        LinkEntry {
            action: self,
            url: self.url(),
        }
    }
}

/// Iterates over the whole link table.
pub fn link_table() -> impl Iterator<Item = LinkEntry> {
    Action::ALL.into_iter().map(Action::entry)
}

/// Builds the SupaScan page for an address. The address is appended as-is;
/// callers validate it first.
pub fn scan_url(address: &str) -> String {
    format!("{}{}", Action::ScanBase.url(), address)
}
