//! 消息键定义
//!
//! 所有可本地化的消息都通过这里的常量引用

// 词法错误
pub const ERR_LEX_UNTERMINATED_STRING: &str = "err.lex.unterminated_string";
pub const ERR_LEX_UNEXPECTED_CHARACTER: &str = "err.lex.unexpected_character";

// 源文件错误
pub const ERR_SOURCE_READ: &str = "err.source.read";

// CLI 消息
pub const MSG_CLI_SOURCE_HEADER: &str = "msg.cli.source_header";
pub const MSG_CLI_TOKENS_HEADER: &str = "msg.cli.tokens_header";
pub const MSG_CLI_LEX_ERROR: &str = "msg.cli.lex_error";
pub const MSG_CLI_SUMMARY: &str = "msg.cli.summary";
pub const MSG_CLI_FAILED: &str = "msg.cli.failed";
