//! # Supa Link Bot
//!
//! A Telegram bot that answers a fixed set of commands with links to the
//! Supa Pump tools.
//!
//! ## Features
//! - Quick links for buying, staking, saving, exploring and more
//! - `/scan <address>` with Solana address shape validation
//! - Command menu registration at startup
//! - Health endpoints for container supervisors

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// The static link table
pub mod links;
/// Background services like the health server
pub mod services;
/// Utility functions for validation, formatting, logging and delivery
pub mod utils;
