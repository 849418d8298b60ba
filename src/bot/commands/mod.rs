pub mod help;
pub mod links;
pub mod scan;

use teloxide::prelude::*;
use teloxide::types::BotCommand;
use crate::bot::reply::Reply;

/// Every command the bot answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Welcome message, same text as help
    Start,
    /// List of commands
    Help,
    /// SupaSwap link
    Buy,
    /// SupaScan page for a token address
    Scan,
    /// Supa Save link
    Save,
    /// Supa Seek link
    Seek,
    /// Supa Secret link
    Secret,
    /// Staking link
    Stake,
    /// Subdomain registrar link
    Register,
}

impl Command {
    /// All commands, in menu order.
    pub const ALL: [Command; 9] = [
        Command::Start,
        Command::Help,
        Command::Buy,
        Command::Scan,
        Command::Save,
        Command::Seek,
        Command::Secret,
        Command::Stake,
        Command::Register,
    ];

    /// Name as typed after the slash.
    pub const fn name(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::Buy => "buy",
            Command::Scan => "scan",
            Command::Save => "save",
            Command::Seek => "seek",
            Command::Secret => "secret",
            Command::Stake => "stake",
            Command::Register => "register",
        }
    }

    /// Short description shown in the Telegram command menu.
    pub const fn description(self) -> &'static str {
        match self {
            Command::Start => "Show welcome",
            Command::Help => "help message",
            Command::Buy => "Get link to buy $SUPA",
            Command::Scan => "Scan token (needs address)",
            Command::Save => "Get Supa Save link",
            Command::Seek => "Get Supa Seek link",
            Command::Secret => "Get Supa Secret link",
            Command::Stake => "Get link to stake $SUPA",
            Command::Register => "Get link to register .supa subdomain",
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// A command addressed to this bot, with whatever followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Which command
    pub command: Command,
    /// Text after the command, untrimmed. `None` when nothing followed.
    pub argument: Option<String>,
}

/// Splits `/name[@bot] rest` into a [`ParsedCommand`].
///
/// Returns `None` for text that is not a slash command, names an unknown
/// command, or is addressed to a different bot.
pub fn parse_command(text: &str, bot_username: &str) -> Option<ParsedCommand> {
    let body = text.strip_prefix('/')?;
    let (head, rest) = match body.find(char::is_whitespace) {
        Some(idx) => {
            let ws_len = body[idx..].chars().next().map_or(1, char::len_utf8);
            (&body[..idx], &body[idx + ws_len..])
        }
        None => (body, ""),
    };

    let name = match head.split_once('@') {
        Some((name, mention)) => {
            if !mention.eq_ignore_ascii_case(bot_username) {
                return None;
            }
            name
        }
        None => head,
    };

    let command = Command::from_name(name)?;
    let argument = (!rest.is_empty()).then(|| rest.to_string());
    Some(ParsedCommand { command, argument })
}

/// Entries for `setMyCommands`.
pub fn menu() -> Vec<BotCommand> {
    Command::ALL
        .into_iter()
        .map(|c| BotCommand::new(c.name(), c.description()))
        .collect()
}

/// Publishes the command menu shown by Telegram clients.
pub async fn register_command_menu(bot: &Bot) -> ResponseResult<()> {
    bot.set_my_commands(menu()).await?;
    Ok(())
}

/// Reply for a command plus, for a rejected `/scan` address, the reason it
/// was rejected.
#[derive(Debug)]
pub struct Outcome {
    /// What gets sent back
    pub reply: Reply,
    /// Validation error behind a warning reply
    pub rejected: Option<anyhow::Error>,
}

impl Outcome {
    fn reply(reply: Reply) -> Self {
        Self { reply, rejected: None }
    }
}

/// Routes a command to its reply. Total and pure: the same input always
/// gives the same outcome, and every command gets one.
pub fn route(command: Command, argument: Option<&str>) -> Outcome {
    match command {
        Command::Start | Command::Help => Outcome::reply(help::help_reply()),
        Command::Scan => scan::scan(argument),
        Command::Buy => Outcome::reply(links::link_reply(&links::BUY)),
        Command::Save => Outcome::reply(links::link_reply(&links::SAVE)),
        Command::Seek => Outcome::reply(links::link_reply(&links::SEEK)),
        Command::Secret => Outcome::reply(links::link_reply(&links::SECRET)),
        Command::Stake => Outcome::reply(links::link_reply(&links::STAKE)),
        Command::Register => Outcome::reply(links::link_reply(&links::REGISTER)),
    }
}

/// Builds the reply for a command; see [`route`].
pub fn dispatch(command: Command, argument: Option<&str>) -> Reply {
    route(command, argument).reply
}
