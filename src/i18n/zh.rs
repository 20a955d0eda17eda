//! 中文消息

use super::messages::*;

/// 获取中文消息
pub fn get(key: &str) -> &'static str {
    match key {
        // 词法错误
        ERR_LEX_UNTERMINATED_STRING => "未闭合的字符串",
        ERR_LEX_UNEXPECTED_CHARACTER => "意外的字符 '{}'",

        // 源文件错误
        ERR_SOURCE_READ => "无法读取文件 {}: {}",

        // CLI 消息
        MSG_CLI_SOURCE_HEADER => "源代码:",
        MSG_CLI_TOKENS_HEADER => "标记:",
        MSG_CLI_LEX_ERROR => "[词法错误]",
        MSG_CLI_SUMMARY => "{}: {} 个标记, {} 个错误",
        MSG_CLI_FAILED => "{} 个文件失败（共 {} 个）",

        // 未知消息键
        _ => "未知的消息键",
    }
}
