//! 多文件并发扫描
//!
//! 每个文件完整地在一个工作线程上扫描，关键字表在所有线程间只读共享。
//! 结果按输入顺序返回。

use std::any::Any;
use std::panic;
use std::path::{Path, PathBuf};

use crossbeam_channel::unbounded;
use crossbeam_utils::thread;
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::lexer::{scan, Keywords, Scanned};
use crate::source::{load_source, SourceError};

/// 读取成功的文件及其扫描结果
#[derive(Debug, Clone, PartialEq)]
pub struct ScannedFile {
    pub source: String,
    pub scanned: Scanned,
}

/// 单个文件的扫描结果
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Result<ScannedFile, SourceError>,
}

impl FileReport {
    /// 文件可读且没有词法错误
    pub fn is_clean(&self) -> bool {
        matches!(&self.outcome, Ok(file) if !file.scanned.has_errors())
    }
}

/// 读取并扫描一个文件
pub fn scan_file(path: &Path, keywords: &Keywords) -> FileReport {
    debug!(path = %path.display(), "scanning file");
    let outcome = load_source(path).map(|source| {
        let scanned = scan(&source, keywords);
        ScannedFile { source, scanned }
    });
    FileReport {
        path: path.to_path_buf(),
        outcome,
    }
}

/// 并发扫描多个文件，`workers` 为工作线程数（至少 1）
pub fn scan_files(paths: &[PathBuf], keywords: &Keywords, workers: usize) -> Vec<FileReport> {
    let workers = workers.max(1).min(paths.len());
    if workers <= 1 {
        return paths.iter().map(|path| scan_file(path, keywords)).collect();
    }
    run_pool(paths.len(), workers, |index| scan_file(&paths[index], keywords))
}

/// 在 `workers` 个线程上执行 `job(0..count)`，结果按下标排列
///
/// 工作线程 panic 时 panic 会传播给调用方。
fn run_pool<T, F>(count: usize, workers: usize, job: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize) -> T + Sync,
{
    let (sender, receiver) = unbounded::<usize>();
    for index in 0..count {
        if sender.send(index).is_err() {
            break;
        }
    }
    drop(sender);

    let slots: Mutex<Vec<Option<T>>> = Mutex::new((0..count).map(|_| None).collect());
    let job = &job;

    let result = thread::scope(|scope| {
        for id in 0..workers {
            let receiver = receiver.clone();
            let slots = &slots;
            let spawned = scope
                .builder()
                .name(format!("scan-worker-{}", id))
                .spawn(move |_| {
                    for index in receiver.iter() {
                        let value = job(index);
                        slots.lock()[index] = Some(value);
                    }
                });
            if let Err(e) = spawned {
                warn!(worker = id, error = %e, "failed to spawn scan worker");
            }
        }
    });
    if let Err(payload) = result {
        // crossbeam 把所有线程的 panic 收集在一个 Vec 中，这里重新抛出第一个
        let payload = match payload.downcast::<Vec<Box<dyn Any + Send>>>() {
            Ok(mut panics) if !panics.is_empty() => panics.swap_remove(0),
            Ok(panics) => panics as Box<dyn Any + Send>,
            Err(payload) => payload,
        };
        panic::resume_unwind(payload);
    }

    // 所有线程都启动失败时队列不会被消费，剩余的下标在当前线程执行
    slots
        .into_inner()
        .into_iter()
        .enumerate()
        .map(|(index, slot)| slot.unwrap_or_else(|| job(index)))
        .collect()
}
