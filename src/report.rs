//! 扫描结果输出
//!
//! 正常输出（源码回显、token 列表、汇总）写入 `out`，诊断信息写入 `diag`

use std::io::{self, Write};

use crate::batch::FileReport;
use crate::config::RunOptions;
use crate::i18n::{format_message, get_message, messages, Locale};

const GREEN_BOLD: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

fn header(text: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", GREEN_BOLD, text, RESET)
    } else {
        text.to_string()
    }
}

/// 输出单个文件的结果
pub fn write_report<W: Write, D: Write>(
    out: &mut W,
    diag: &mut D,
    report: &FileReport,
    options: &RunOptions,
) -> io::Result<()> {
    let locale = options.locale;
    let path = report.path.display().to_string();

    let file = match &report.outcome {
        Ok(file) => file,
        Err(e) => {
            writeln!(diag, "{}", e.localized(locale))?;
            return Ok(());
        }
    };

    if options.echo_source {
        let title = get_message(messages::MSG_CLI_SOURCE_HEADER, locale);
        writeln!(out, "{} {}", header(title, options.color), path)?;
        writeln!(out, "{}", file.source)?;
        writeln!(out)?;
    }

    if options.dump_tokens {
        let title = get_message(messages::MSG_CLI_TOKENS_HEADER, locale);
        writeln!(out, "{}", header(title, options.color))?;
        for token in &file.scanned.tokens {
            writeln!(out, "  {}", token)?;
        }
    }

    let label = get_message(messages::MSG_CLI_LEX_ERROR, locale);
    for error in &file.scanned.errors {
        writeln!(diag, "{} {} {}", label, path, error.localized(locale))?;
    }

    let tokens = file.scanned.tokens.len().to_string();
    let errors = file.scanned.errors.len().to_string();
    writeln!(
        out,
        "{}",
        format_message(messages::MSG_CLI_SUMMARY, locale, &[&path, &tokens, &errors])
    )
}

/// 输出失败文件数，全部成功时不输出
pub fn write_failures<D: Write>(
    diag: &mut D,
    failed: usize,
    total: usize,
    locale: Locale,
) -> io::Result<()> {
    if failed == 0 {
        return Ok(());
    }
    let failed = failed.to_string();
    let total = total.to_string();
    writeln!(diag, "{}", format_message(messages::MSG_CLI_FAILED, locale, &[&failed, &total]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::ScannedFile;
    use crate::lexer::{scan, Keywords};
    use crate::source::SourceError;
    use std::path::PathBuf;

    fn report_for(source: &str) -> FileReport {
        let keywords = Keywords::new();
        FileReport {
            path: PathBuf::from("main.rad"),
            outcome: Ok(ScannedFile {
                source: source.to_string(),
                scanned: scan(source, &keywords),
            }),
        }
    }

    fn render(report: &FileReport, options: &RunOptions) -> (String, String) {
        let mut out = Vec::new();
        let mut diag = Vec::new();
        write_report(&mut out, &mut diag, report, options).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(diag).unwrap())
    }

    #[test]
    fn test_echo_source_with_colored_header() {
        let report = report_for("let x;");
        let (out, diag) = render(&report, &RunOptions::default());
        assert!(out.starts_with("\x1b[1;32mSource:\x1b[0m main.rad\nlet x;\n\n"));
        assert!(out.ends_with("main.rad: 3 token(s), 0 error(s)\n"));
        assert!(diag.is_empty());
    }

    #[test]
    fn test_quiet_with_tokens() {
        let report = report_for("return 1;");
        let options = RunOptions {
            echo_source: false,
            dump_tokens: true,
            color: false,
            ..RunOptions::default()
        };
        let (out, _) = render(&report, &options);
        assert_eq!(
            out,
            "Tokens:\n\
             \x20 RETURN 'return' at 1:1\n\
             \x20 NUMBER '1' (1) at 1:8\n\
             \x20 SEMICOLON ';' at 1:9\n\
             main.rad: 3 token(s), 0 error(s)\n"
        );
    }

    #[test]
    fn test_lexical_errors_go_to_diagnostics() {
        let report = report_for("let s = \"open");
        let options = RunOptions {
            echo_source: false,
            locale: Locale::Zh,
            ..RunOptions::default()
        };
        let (out, diag) = render(&report, &options);
        assert_eq!(diag, "[词法错误] main.rad [1:9] 未闭合的字符串\n");
        assert_eq!(out, "main.rad: 3 个标记, 1 个错误\n");
    }

    #[test]
    fn test_read_failure() {
        let report = FileReport {
            path: PathBuf::from("gone.rad"),
            outcome: Err(SourceError::Read {
                path: PathBuf::from("gone.rad"),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            }),
        };
        let (out, diag) = render(&report, &RunOptions::default());
        assert!(out.is_empty());
        assert_eq!(diag, "Cannot read file gone.rad: not found\n");
    }

    #[test]
    fn test_failures_summary() {
        let mut diag = Vec::new();
        write_failures(&mut diag, 0, 3, Locale::En).unwrap();
        assert!(diag.is_empty());
        write_failures(&mut diag, 2, 3, Locale::En).unwrap();
        assert_eq!(String::from_utf8(diag).unwrap(), "2 of 3 file(s) failed\n");
    }
}
