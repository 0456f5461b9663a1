//! Subcommand implementations.

/// Document analysis command handler.
pub mod analyze;

/// Chat mode command handler.
pub mod chat;

/// Configure command handler.
pub mod configure;

/// Provider listing command handler.
pub mod providers;

/// Translation command handler.
pub mod translate;
