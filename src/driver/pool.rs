//! 扫描线程池
//! 
//! 固定数量的工作线程共享一个任务队列，批量读取并扫描源文件，
//! 结果按提交顺序返回。

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use parking_lot::Mutex;

use crate::lexer::{ScanResult, Scanner};

type Task = Box<dyn FnOnce() + Send + 'static>;

/// 任务队列容量
const QUEUE_CAPACITY: usize = 1024;

/// 单个文件的扫描结果
#[derive(Debug)]
pub struct FileScan {
    pub path: PathBuf,
    /// 读取失败时为 IO 错误
    pub outcome: io::Result<ScanResult>,
}

/// 扫描线程池
pub struct ScanPool {
    workers: Vec<Worker>,
    sender: Option<Sender<Task>>,
}

impl ScanPool {
    /// 创建指定大小的线程池（至少一个线程）
    pub fn new(size: usize) -> io::Result<Self> {
        let (sender, receiver) = bounded(QUEUE_CAPACITY);
        let receiver = Arc::new(Mutex::new(receiver));

        let size = size.max(1);
        let mut workers = Vec::with_capacity(size);
        for id in 0..size {
            workers.push(Worker::spawn(id, Arc::clone(&receiver))?);
        }

        Ok(Self { workers, sender: Some(sender) })
    }

    /// 按 CPU 核数创建线程池
    pub fn with_default_size() -> io::Result<Self> {
        Self::new(num_cpus::get())
    }

    /// 工作线程数
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// 读取并扫描一批文件
    pub fn scan_files(&self, paths: Vec<PathBuf>) -> Vec<FileScan> {
        self.map_ordered(paths, |path| {
            let outcome = fs::read_to_string(&path).map(|source| Scanner::new(&source).scan_tokens());
            FileScan { path, outcome }
        })
    }

    /// 扫描一批内存中的源码
    pub fn scan_sources(&self, sources: Vec<String>) -> Vec<ScanResult> {
        self.map_ordered(sources, |source| Scanner::new(&source).scan_tokens())
    }

    /// 把每个任务交给工作线程，按提交顺序收集结果
    fn map_ordered<J, R, F>(&self, jobs: Vec<J>, work: F) -> Vec<R>
    where
        J: Send + 'static,
        R: Send + 'static,
        F: Fn(J) -> R + Send + Sync + 'static,
    {
        let work = Arc::new(work);
        let (tx, rx) = unbounded();
        let count = jobs.len();

        for (index, job) in jobs.into_iter().enumerate() {
            let tx = tx.clone();
            let work = Arc::clone(&work);
            self.execute(move || {
                let _ = tx.send((index, (*work)(job)));
            });
        }
        drop(tx);

        let mut slots: Vec<Option<R>> = (0..count).map(|_| None).collect();
        for (index, result) in rx {
            slots[index] = Some(result);
        }
        slots.into_iter().flatten().collect()
    }

    /// 提交任务；队列已关闭时在当前线程执行
    fn execute<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let task: Task = Box::new(f);
        match &self.sender {
            Some(sender) => {
                if let Err(err) = sender.send(task) {
                    (err.into_inner())();
                }
            }
            None => task(),
        }
    }
}

impl Drop for ScanPool {
    fn drop(&mut self) {
        // 关闭队列，工作线程取完剩余任务后退出
        self.sender.take();
        for worker in &mut self.workers {
            if let Some(thread) = worker.thread.take() {
                let _ = thread.join();
            }
        }
    }
}

struct Worker {
    thread: Option<JoinHandle<()>>,
}

impl Worker {
    fn spawn(id: usize, receiver: Arc<Mutex<Receiver<Task>>>) -> io::Result<Self> {
        let thread = std::thread::Builder::new()
            .name(format!("scan-worker-{}", id))
            .spawn(move || loop {
                let task = {
                    let receiver = receiver.lock();
                    receiver.recv()
                };
                match task {
                    Ok(task) => task(),
                    Err(_) => break,
                }
            })?;
        Ok(Self { thread: Some(thread) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{LexErrorKind, TokenKind};

    #[test]
    fn test_results_keep_submission_order() {
        let pool = ScanPool::new(3).unwrap();
        let sources: Vec<String> = (0..20).map(|n| format!("var x{} = {};", n, n)).collect();
        let results = pool.scan_sources(sources);

        assert_eq!(results.len(), 20);
        for (n, result) in results.iter().enumerate() {
            assert!(result.is_ok());
            assert_eq!(result.tokens[1].lexeme, format!("x{}", n));
            assert_eq!(result.tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
        }
    }

    #[test]
    fn test_errors_stay_with_their_source() {
        let pool = ScanPool::new(2).unwrap();
        let results = pool.scan_sources(vec!["1 + 2".to_string(), "\"open".to_string()]);
        assert!(results[0].is_ok());
        assert_eq!(results[1].errors[0].kind, LexErrorKind::UnterminatedString);
    }

    #[test]
    fn test_scan_files() {
        let dir = std::env::temp_dir();
        let good = dir.join(format!("typhoon-pool-{}.ty", std::process::id()));
        let missing = dir.join(format!("typhoon-pool-missing-{}.ty", std::process::id()));
        fs::write(&good, "print 'hi';\n").unwrap();
        let _ = fs::remove_file(&missing);

        let pool = ScanPool::new(2).unwrap();
        let scans = pool.scan_files(vec![good.clone(), missing.clone()]);

        assert_eq!(scans.len(), 2);
        assert_eq!(scans[0].path, good);
        let result = scans[0].outcome.as_ref().unwrap();
        assert_eq!(result.tokens[0].kind, TokenKind::Print);
        assert_eq!(scans[1].path, missing);
        assert!(scans[1].outcome.is_err());

        let _ = fs::remove_file(&good);
    }

    #[test]
    fn test_pool_size() {
        assert_eq!(ScanPool::new(0).unwrap().size(), 1);
        assert!(ScanPool::with_default_size().unwrap().size() >= 1);
        assert!(ScanPool::new(4).unwrap().scan_sources(Vec::new()).is_empty());
    }
}
