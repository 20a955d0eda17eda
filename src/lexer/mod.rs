//! 词法分析模块
//!
//! 将源代码转换为 Token 流

pub mod error;
pub mod keywords;
pub mod scanner;
pub mod token;

pub use error::{LexError, LexErrorKind};
pub use keywords::Keywords;
pub use scanner::{scan, Scanned, Scanner};
pub use token::{Span, Token, TokenKind};
