//! Radiance 语言前端
//!
//! 词法分析器、多文件扫描以及命令行输出

pub mod batch;
pub mod config;
pub mod i18n;
pub mod lexer;
pub mod report;
pub mod source;

pub use batch::{scan_file, scan_files, FileReport, ScannedFile};
pub use i18n::Locale;
pub use lexer::{scan, Keywords, LexError, LexErrorKind, Scanned, Scanner, Span, Token, TokenKind};
pub use source::{load_source, SourceError};
