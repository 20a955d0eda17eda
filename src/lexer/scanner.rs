//! 词法扫描器
//!
//! 将源代码字符串转换为 Token 流。单遍扫描，只向前看一个字符。
//! 出错时记录错误并继续扫描，失败的词素不产生 token。

use tracing::{debug, trace};

use super::error::LexError;
use super::keywords::Keywords;
use super::token::{Span, Token, TokenKind};

/// 一次扫描的结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scanned {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl Scanned {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// 扫描整段源码
pub fn scan(source: &str, keywords: &Keywords) -> Scanned {
    let mut scanner = Scanner::new(source, keywords);
    let tokens = scanner.scan_tokens();
    Scanned {
        tokens,
        errors: scanner.take_errors(),
    }
}

/// 词法扫描器
pub struct Scanner<'k> {
    /// 源代码字符
    source: Vec<char>,
    /// 关键字表
    keywords: &'k Keywords,
    /// 当前位置
    current: usize,
    /// 当前 token 起始位置
    start: usize,
    /// 当前行号
    line: usize,
    /// 当前列号
    column: usize,
    /// token 起始行号
    start_line: usize,
    /// token 起始列号
    start_column: usize,
    /// 已记录的错误
    errors: Vec<LexError>,
}

impl<'k> Scanner<'k> {
    /// 创建新的扫描器
    pub fn new(source: &str, keywords: &'k Keywords) -> Self {
        Self {
            source: source.chars().collect(),
            keywords,
            current: 0,
            start: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            errors: Vec::new(),
        }
    }

    /// 扫描所有 token
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.scan_token() {
            tokens.push(token);
        }
        debug!(
            tokens = tokens.len(),
            errors = self.errors.len(),
            lines = self.line(),
            "scan finished"
        );
        tokens
    }

    /// 扫描下一个 token，到达末尾时返回 None
    ///
    /// 空白、注释以及出错的词素都会被跳过。
    pub fn scan_token(&mut self) -> Option<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;

            if let Some(token) = self.scan_lexeme() {
                trace!(kind = token.kind.name(), line = token.line(), "token");
                return Some(token);
            }
        }
        None
    }

    /// 已记录的错误
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// 取出已记录的错误
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 当前行号
    pub fn line(&self) -> usize {
        self.line
    }

    /// 从 start 开始识别一个词素
    fn scan_lexeme(&mut self) -> Option<Token> {
        let c = self.advance();

        match c {
            // 分隔符
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            '{' => self.make_token(TokenKind::LeftBrace),
            '}' => self.make_token(TokenKind::RightBrace),
            ',' => self.make_token(TokenKind::Comma),
            '.' => self.make_token(TokenKind::Dot),
            ';' => self.make_token(TokenKind::Semicolon),

            // 算术运算符
            '+' => self.make_token(TokenKind::Plus),
            '-' => self.make_token(TokenKind::Minus),
            '*' => self.make_token(TokenKind::Star),

            // ! 和 !=
            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.make_token(kind)
            }
            // = 和 ==
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.make_token(kind)
            }
            // > 和 >=
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.make_token(kind)
            }
            // < 和 <=
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.make_token(kind)
            }

            // / 和 // 注释
            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                    None
                } else {
                    self.make_token(TokenKind::Slash)
                }
            }

            // 空白（换行在 advance 中计数）
            ' ' | '\r' | '\t' | '\n' => None,

            // 字符串
            '"' => self.scan_string(),

            // 数字
            '0'..='9' => self.scan_number(),

            // 标识符或关键字
            c if c.is_ascii_alphabetic() => self.scan_identifier(),

            _ => {
                self.report(LexError::unexpected_character(c, self.start_span()));
                None
            }
        }
    }

    /// 跳过单行注释，不消费换行
    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    /// 扫描字符串（双引号，不处理转义）
    fn scan_string(&mut self) -> Option<Token> {
        while !self.is_at_end() && self.peek() != '"' {
            self.advance();
        }

        if self.is_at_end() {
            self.report(LexError::unterminated_string(self.start_span()));
            return None;
        }

        // 消费闭合的引号
        self.advance();

        let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
        self.make_literal(TokenKind::String, value)
    }

    /// 扫描数字：整数部分，可选一个小数点及其后的数字
    ///
    /// `12.` 会连同小数点一起成为一个数字，符号留给语法分析阶段处理。
    fn scan_number(&mut self) -> Option<Token> {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let value = self.lexeme();
        self.make_literal(TokenKind::Number, value)
    }

    /// 扫描标识符或关键字
    fn scan_identifier(&mut self) -> Option<Token> {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let lexeme = self.lexeme();
        let kind = self.keywords.get(&lexeme).unwrap_or(TokenKind::Identifier);
        Some(Token::new(kind, lexeme, None, self.token_span()))
    }

    /// 判断是否到达源码末尾
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// 前进一个字符并返回
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        c
    }

    /// 查看当前字符，末尾返回 '\0'
    fn peek(&self) -> char {
        self.source.get(self.current).copied().unwrap_or('\0')
    }

    /// 如果当前字符匹配，则前进
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    /// token 的位置：行号取完成时所在的行
    fn token_span(&self) -> Span {
        Span::new(self.start, self.current, self.line, self.start_column)
    }

    /// 错误的位置：指向失败词素的起点
    fn start_span(&self) -> Span {
        Span::new(self.start, self.current, self.start_line, self.start_column)
    }

    /// 创建 token
    fn make_token(&self, kind: TokenKind) -> Option<Token> {
        Some(Token::new(kind, self.lexeme(), None, self.token_span()))
    }

    /// 创建带字面值的 token
    fn make_literal(&self, kind: TokenKind, value: String) -> Option<Token> {
        debug_assert!(kind.is_literal());
        Some(Token::new(kind, self.lexeme(), Some(value), self.token_span()))
    }

    /// 记录错误并继续扫描
    fn report(&mut self, error: LexError) {
        debug!(line = error.span.line, column = error.span.column, "{}", error);
        self.errors.push(error);
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.scan_token()
    }
}
