//! Radiance 词法扫描器
//!
//! 主入口点

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use radiance::config::{RunOptions, BIN_NAME, DEFAULT_LOG_FILTER, LANG_NAME, LOG_ENV, VERSION};
use radiance::report::{write_failures, write_report};
use radiance::{scan_files, Keywords, Locale};

/// Scan Radiance source files into tokens
#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version = VERSION)]
struct Cli {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Message language (en or zh)
    #[arg(long, default_value = "en")]
    lang: Locale,

    /// Do not echo the source text
    #[arg(short, long)]
    quiet: bool,

    /// Print every token
    #[arg(short, long)]
    tokens: bool,

    /// Worker threads for multiple files (0 = number of CPUs)
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,
}

impl Cli {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            locale: self.lang,
            echo_source: !self.quiet,
            dump_tokens: self.tokens,
            color: io::stdout().is_terminal(),
            jobs: self.jobs,
        }
    }
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// 扫描所有文件并输出结果，返回是否全部成功
fn run(cli: &Cli) -> Result<bool> {
    let options = cli.run_options();
    let keywords = Keywords::new();
    let workers = options.worker_count(cli.files.len());
    info!(lang = LANG_NAME, files = cli.files.len(), workers, "starting scan");

    let reports = scan_files(&cli.files, &keywords, workers);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut diag = stderr.lock();

    for report in &reports {
        write_report(&mut out, &mut diag, report, &options)
            .with_context(|| format!("failed to write results for {}", report.path.display()))?;
    }
    out.flush().context("failed to flush stdout")?;

    let failed = reports.iter().filter(|r| !r.is_clean()).count();
    write_failures(&mut diag, failed, reports.len(), options.locale)
        .context("failed to write summary")?;

    Ok(failed == 0)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
