//! 配置常量模块
//!
//! 所有可配置的语言相关常量都在这里定义，便于后期修改

use crate::i18n::Locale;

/// 语言名称
pub const LANG_NAME: &str = "Radiance";

/// 可执行文件名
pub const BIN_NAME: &str = "radiance";

/// 日志过滤器使用的环境变量
pub const LOG_ENV: &str = "RADIANCE_LOG";

/// 未设置环境变量时的日志级别
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 一次运行的选项，由命令行参数解析得到
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// 消息语言
    pub locale: Locale,
    /// 是否回显源代码
    pub echo_source: bool,
    /// 是否打印 token
    pub dump_tokens: bool,
    /// 标题是否使用 ANSI 颜色
    pub color: bool,
    /// 并发扫描的线程数，0 表示使用 CPU 核数
    pub jobs: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            echo_source: true,
            dump_tokens: false,
            color: true,
            jobs: 0,
        }
    }
}

impl RunOptions {
    /// 实际使用的线程数，不超过文件数
    pub fn worker_count(&self, files: usize) -> usize {
        let jobs = if self.jobs == 0 { num_cpus::get() } else { self.jobs };
        jobs.min(files).max(1)
    }
}
