/// Reply delivery with apology fallback
pub mod feedback;
/// Structured log lines
pub mod logging;
/// MarkdownV2 escaping
pub mod markdown;
/// Token address validation
pub mod validation;
