//! 构建日志
//! 
//! 错误总是输出到 stderr；配置了日志文件时，每条记录都带级别追加到文件

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use parking_lot::Mutex;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Info => write!(f, "INFO"),
            Level::Error => write!(f, "ERROR"),
        }
    }
}

/// 构建日志，可在扫描线程之间共享
pub struct BuildLog {
    file: Option<Mutex<File>>,
}

impl BuildLog {
    /// 只输出到 stderr
    pub fn stderr() -> Self {
        Self { file: None }
    }

    /// 同时追加到日志文件
    pub fn with_file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file: Some(Mutex::new(file)) })
    }

    pub fn info(&self, message: &str) {
        self.record(Level::Info, message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{}", message);
        self.record(Level::Error, message);
    }

    fn record(&self, level: Level, message: &str) {
        if let Some(file) = &self.file {
            let mut file = file.lock();
            // 日志写失败不影响构建结果
            let _ = writeln!(file, "[{}] {}", level, message);
        }
    }
}
