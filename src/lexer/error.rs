//! 词法错误定义
//!
//! 扫描器遇到错误时记录下来并继续扫描，不会中断

use std::fmt;

use super::token::Span;
use crate::i18n::{format_message, messages, Locale};

/// 词法错误种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// 字符串到输入末尾仍未闭合
    UnterminatedString,
    /// 无法识别的字符
    UnexpectedCharacter(char),
}

/// 词法错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// 错误种类
    pub kind: LexErrorKind,
    /// 错误位置（失败词素的起点）
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn unterminated_string(span: Span) -> Self {
        Self::new(LexErrorKind::UnterminatedString, span)
    }

    pub fn unexpected_character(c: char, span: Span) -> Self {
        Self::new(LexErrorKind::UnexpectedCharacter(c), span)
    }

    /// 按指定语言生成消息（不含位置）
    pub fn message(&self, locale: Locale) -> String {
        match self.kind {
            LexErrorKind::UnterminatedString => {
                format_message(messages::ERR_LEX_UNTERMINATED_STRING, locale, &[])
            }
            LexErrorKind::UnexpectedCharacter(c) => {
                let shown = display_char(c);
                format_message(messages::ERR_LEX_UNEXPECTED_CHARACTER, locale, &[&shown])
            }
        }
    }

    /// 带位置的本地化消息，格式为 `[行:列] 消息`
    pub fn localized(&self, locale: Locale) -> String {
        format!("[{}:{}] {}", self.span.line, self.span.column, self.message(locale))
    }
}

/// 不可见字符以 Unicode 码点显示
fn display_char(c: char) -> String {
    if c.is_control() || c.is_whitespace() {
        format!("U+{:04X}", c as u32)
    } else {
        c.to_string()
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.localized(Locale::En))
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_position() {
        let err = LexError::unterminated_string(Span::new(4, 9, 2, 5));
        assert_eq!(err.to_string(), "[2:5] Unterminated string");
    }

    #[test]
    fn test_unexpected_character_message() {
        let err = LexError::unexpected_character('@', Span::new(0, 1, 1, 1));
        assert_eq!(err.to_string(), "[1:1] Unexpected character '@'");
        assert_eq!(err.localized(Locale::Zh), "[1:1] 意外的字符 '@'");
    }

    #[test]
    fn test_control_character_shown_as_code_point() {
        let err = LexError::unexpected_character('\u{7}', Span::new(0, 1, 1, 1));
        assert_eq!(err.message(Locale::En), "Unexpected character 'U+0007'");
    }
}
