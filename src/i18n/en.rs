//! English messages

use super::messages::*;

/// Get English message
pub fn get(key: &str) -> &'static str {
    match key {
        // Lexical errors
        ERR_LEX_UNTERMINATED_STRING => "Unterminated string",
        ERR_LEX_UNEXPECTED_CHARACTER => "Unexpected character '{}'",

        // Source errors
        ERR_SOURCE_READ => "Cannot read file {}: {}",

        // CLI messages
        MSG_CLI_SOURCE_HEADER => "Source:",
        MSG_CLI_TOKENS_HEADER => "Tokens:",
        MSG_CLI_LEX_ERROR => "[Lexical Error]",
        MSG_CLI_SUMMARY => "{}: {} token(s), {} error(s)",
        MSG_CLI_FAILED => "{} of {} file(s) failed",

        // Unknown message key
        _ => "Unknown message key",
    }
}
