//! 国际化模块
//!
//! 提供多语言消息支持，目前支持英文和中文

pub mod messages;
pub mod en;
pub mod zh;

use std::str::FromStr;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 英文（默认）
    #[default]
    En,
    /// 中文
    Zh,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "zh" | "cn" | "chinese" => Ok(Locale::Zh),
            other => Err(format!("unsupported language '{}' (expected en or zh)", other)),
        }
    }
}

/// 获取指定语言的消息
pub fn get_message(key: &str, locale: Locale) -> &'static str {
    match locale {
        Locale::En => en::get(key),
        Locale::Zh => zh::get(key),
    }
}

/// 获取带参数的消息（使用 {} 占位符）
pub fn format_message(key: &str, locale: Locale, args: &[&str]) -> String {
    let template = get_message(key, locale);
    let mut msg = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();
    // 逐个替换，已替换的参数内容不会再被当作占位符
    while let Some(pos) = rest.find("{}") {
        let Some(arg) = args.next() else { break };
        msg.push_str(&rest[..pos]);
        msg.push_str(arg);
        rest = &rest[pos + 2..];
    }
    msg.push_str(rest);
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parse() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("ZH".parse::<Locale>(), Ok(Locale::Zh));
        assert_eq!("chinese".parse::<Locale>(), Ok(Locale::Zh));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_format_in_order() {
        let msg = format_message(messages::MSG_CLI_SUMMARY, Locale::En, &["a.rad", "3", "1"]);
        assert_eq!(msg, "a.rad: 3 token(s), 1 error(s)");
    }

    #[test]
    fn test_format_argument_containing_placeholder() {
        let msg = format_message(messages::ERR_SOURCE_READ, Locale::En, &["{}", "denied"]);
        assert_eq!(msg, "Cannot read file {}: denied");
    }

    #[test]
    fn test_format_missing_arguments_keeps_placeholder() {
        let msg = format_message(messages::ERR_SOURCE_READ, Locale::En, &["x"]);
        assert_eq!(msg, "Cannot read file x: {}");
    }

    #[test]
    fn test_every_key_has_both_translations() {
        let keys = [
            messages::ERR_LEX_UNTERMINATED_STRING,
            messages::ERR_LEX_UNEXPECTED_CHARACTER,
            messages::ERR_SOURCE_READ,
            messages::MSG_CLI_SOURCE_HEADER,
            messages::MSG_CLI_TOKENS_HEADER,
            messages::MSG_CLI_LEX_ERROR,
            messages::MSG_CLI_SUMMARY,
            messages::MSG_CLI_FAILED,
        ];
        for key in keys {
            assert_ne!(get_message(key, Locale::En), en::get("missing"));
            assert_ne!(get_message(key, Locale::Zh), zh::get("missing"));
        }
    }
}
