use super::Command;
use crate::bot::reply::Reply;
use crate::utils::markdown::{bold, escape_markdown};

/// Help sections, each a heading and the commands listed under it.
const SECTIONS: &[(&str, &[(Command, &str)])] = &[
    (
        "Trading & Earning:",
        &[
            (Command::Buy, "🛒 Get $SUPA on SupaSwap"),
            (Command::Stake, "💰 Stake your $SUPA tokens"),
            (Command::Save, "🏦 Earn yield with Supa Save"),
        ],
    ),
    (
        "Exploring & Info:",
        &[
            (Command::Scan, "🔍 Look up token details on SupaScan"),
            (Command::Seek, "🧭 Explore transactions with Supa Seek"),
        ],
    ),
    (
        "Utilities:",
        &[
            (Command::Secret, "🤫 Create encrypted memos with Supa Secret"),
            (Command::Register, "🌐 Register your '.supa' subdomain"),
        ],
    ),
    (
        "Help:",
        &[
            (Command::Start, "👋 Show this welcome message"),
            (Command::Help, "❓ Show this list of commands again"),
        ],
    ),
];

fn usage(command: Command) -> String {
    match command {
        Command::Scan => format!("/{} <token address>", command.name()),
        _ => format!("/{}", command.name()),
    }
}

/// Text for `/start` and `/help`, MarkdownV2.
pub fn help_text() -> String {
    let mut text = format!(
        "🕵️ {} 🕵️‍♀️\n\n{}\n",
        bold("Supa Sleuth Link Helper"),
        escape_markdown("Use these commands to get quick links to Supa Pump tools:")
    );

    for (heading, entries) in SECTIONS {
        text.push('\n');
        text.push_str(&bold(heading));
        text.push('\n');
        for (command, description) in entries.iter() {
            text.push_str(&format!(
                "{} \\- {}\n",
                escape_markdown(&usage(*command)),
                escape_markdown(description)
            ));
        }
    }

    text.push_str(&format!("\n{}", escape_markdown("Happy sleuthing! ✨")));
    text
}

pub fn help_reply() -> Reply {
    Reply::rich(help_text())
}
