/// Command model, parsing and reply building
pub mod commands;
/// Telegram update routing
pub mod handlers;
/// Reply payloads handed to the transport
pub mod reply;
/// Startup checks run before polling
pub mod startup;
