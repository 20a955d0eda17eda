//! 关键字表
//!
//! 关键字文本到 TokenKind 的映射，由调用方显式构造并传给扫描器

use std::collections::HashMap;

use super::token::TokenKind;

/// 标准关键字集合
const STANDARD_KEYWORDS: &[(&str, TokenKind)] = &[
    ("and", TokenKind::And),
    ("or", TokenKind::Or),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("while", TokenKind::While),
    ("let", TokenKind::Let),
    ("nil", TokenKind::Nil),
    ("function", TokenKind::Function),
    ("return", TokenKind::Return),
];

/// 关键字表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keywords {
    table: HashMap<String, TokenKind>,
}

impl Keywords {
    /// 创建包含标准关键字的表
    pub fn new() -> Self {
        let mut keywords = Self::empty();
        for &(text, kind) in STANDARD_KEYWORDS {
            keywords.insert(text, kind);
        }
        keywords
    }

    /// 创建空表，所有单词都会被识别为标识符
    pub fn empty() -> Self {
        Self { table: HashMap::new() }
    }

    /// 注册关键字，返回被覆盖的旧类型
    pub fn insert(&mut self, text: impl Into<String>, kind: TokenKind) -> Option<TokenKind> {
        debug_assert!(kind.is_keyword(), "{:?} is not a keyword kind", kind);
        self.table.insert(text.into(), kind)
    }

    /// 精确匹配查找
    pub fn get(&self, text: &str) -> Option<TokenKind> {
        self.table.get(text).copied()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.table.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// 遍历所有关键字（无序）
    pub fn iter(&self) -> impl Iterator<Item = (&str, TokenKind)> {
        self.table.iter().map(|(text, kind)| (text.as_str(), *kind))
    }
}

impl Default for Keywords {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let keywords = Keywords::new();
        assert_eq!(keywords.len(), 12);
        assert_eq!(keywords.get("return"), Some(TokenKind::Return));
        assert_eq!(keywords.get("function"), Some(TokenKind::Function));
        assert_eq!(keywords.get("nil"), Some(TokenKind::Nil));
        assert!(keywords.iter().all(|(_, kind)| kind.is_keyword()));
    }

    #[test]
    fn test_exact_match_only() {
        let keywords = Keywords::new();
        assert_eq!(keywords.get("Return"), None);
        assert_eq!(keywords.get("returns"), None);
        assert_eq!(keywords.get("ret"), None);
    }

    #[test]
    fn test_empty_and_insert() {
        let mut keywords = Keywords::empty();
        assert!(keywords.is_empty());
        assert_eq!(keywords.insert("fn", TokenKind::Function), None);
        assert_eq!(keywords.insert("fn", TokenKind::Return), Some(TokenKind::Function));
        assert!(keywords.contains("fn"));
        assert_eq!(keywords.len(), 1);
    }

    #[test]
    #[should_panic(expected = "is not a keyword kind")]
    #[cfg(debug_assertions)]
    fn test_insert_rejects_non_keyword_kind() {
        Keywords::empty().insert("plus", TokenKind::Plus);
    }
}
