//! Utility functions for handling Telegram MarkdownV2 formatting
//!
//! MarkdownV2 requires escaping of special characters to prevent formatting issues.
//! Each entity type has its own escaping rules, so there is one function per context.

/// Escapes markdown special characters for MarkdownV2 parsing mode
///
/// This function escapes all characters that have special meaning in Telegram's
/// MarkdownV2 format to ensure they are displayed as literal text.
///
/// # Arguments
/// * `text` - The text to escape
///
/// # Returns
/// A string with all markdown special characters escaped with backslashes
///
/// # Example
/// ```
/// use supa_link_bot::utils::markdown::escape_markdown;
///
/// let text = "Stake $SUPA (now!)";
/// let escaped = escape_markdown(text);
/// assert_eq!(escaped, "Stake $SUPA \\(now\\!\\)");
/// ```
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(
            c,
            '\\' | '_' | '*' | '[' | ']' | '(' | ')' | '~' | '`' | '>' | '#' | '+' | '-' | '='
                | '|' | '{' | '}' | '.' | '!'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Escapes text placed inside a `` `code` `` span, where only `` ` `` and `\`
/// are special.
pub fn escape_code(text: &str) -> String {
    text.replace('\\', "\\\\").replace('`', "\\`")
}

/// Escapes a URL placed inside the `(...)` part of an inline link, where only
/// `)` and `\` are special.
pub fn escape_link_url(url: &str) -> String {
    url.replace('\\', "\\\\").replace(')', "\\)")
}

/// Bold text, escaped.
pub fn bold(text: &str) -> String {
    format!("*{}*", escape_markdown(text))
}

/// Inline code span, escaped.
pub fn code(text: &str) -> String {
    format!("`{}`", escape_code(text))
}

/// Inline link showing the URL itself as the link text.
pub fn url_link(url: &str) -> String {
    format!("[{}]({})", escape_markdown(url), escape_link_url(url))
}
