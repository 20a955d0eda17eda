//! 源文件读取

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::i18n::{format_message, messages, Locale};

/// 源文件错误
#[derive(Debug)]
pub enum SourceError {
    /// 文件无法读取（不存在、无权限或不是 UTF-8）
    Read { path: PathBuf, source: io::Error },
}

impl SourceError {
    pub fn path(&self) -> &Path {
        match self {
            SourceError::Read { path, .. } => path,
        }
    }

    /// 按指定语言生成消息
    pub fn localized(&self, locale: Locale) -> String {
        match self {
            SourceError::Read { path, source } => {
                let path = path.display().to_string();
                let reason = source.to_string();
                format_message(messages::ERR_SOURCE_READ, locale, &[&path, &reason])
            }
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.localized(Locale::En))
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Read { source, .. } => Some(source),
        }
    }
}

/// 读取整个源文件
pub fn load_source(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("radiance-missing-source-file.rad");
        let err = load_source(&path).unwrap_err();
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().starts_with("Cannot read file "));
        assert!(err.localized(Locale::Zh).starts_with("无法读取文件 "));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_reads_whole_file() {
        let path = std::env::temp_dir().join(format!("radiance-load-{}.rad", std::process::id()));
        fs::write(&path, "let x = 1;\nreturn x;\n").unwrap();
        let source = load_source(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(source, "let x = 1;\nreturn x;\n");
    }

    #[test]
    fn test_invalid_utf8_is_rejected_whole() {
        let name = format!("radiance-bad-utf8-{}.rad", std::process::id());
        let path = std::env::temp_dir().join(name);
        fs::write(&path, [b'l', b'e', b't', b' ', 0xff, 0xfe, b';']).unwrap();
        let result = load_source(&path);
        fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(matches!(
            &err,
            SourceError::Read { source, .. } if source.kind() == io::ErrorKind::InvalidData
        ));
    }
}
