//! 驱动模块
//! 
//! 命令行使用的构建日志和并行扫描线程池

pub mod log;
pub mod pool;

pub use log::{BuildLog, Level};
pub use pool::{FileScan, ScanPool};
