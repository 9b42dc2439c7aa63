//! 配置常量模块
//! 
//! 所有可配置的语言相关常量都在这里定义，便于后期修改

/// 语言名称
pub const LANG_NAME: &str = "Typhoon";

/// 源码文件扩展名
pub const SOURCE_EXTENSION: &str = "ty";

/// 词法错误上下文窗口：错误行前后各显示的行数
pub const CONTEXT_RADIUS: usize = 2;

/// 词法错误上下文中每行最多显示的字符数
pub const CONTEXT_WIDTH: usize = 120;

/// generate-ast 默认输出文件名
pub const DEFAULT_AST_OUTPUT: &str = "expr.rs";

/// 版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
