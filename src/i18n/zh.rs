//! 中文消息

use super::messages::*;

/// 获取中文消息
pub fn get(key: &str) -> &'static str {
    match key {
        // 词法错误
        ERR_LEX_UNEXPECTED_CHARACTER => "意外的字符 '{}' (U+{})",
        ERR_LEX_UNTERMINATED_STRING => "未闭合的字符串",
        ERR_LEX_UNTERMINATED_COMMENT => "未闭合的注释",
        ERR_LEX_INVALID_NUMBER => "无效的数字: {}",
        ERR_LEX_AT => "[第 {} 行 {} 列] {}",

        // AST 模式错误
        ERR_SCHEMA_EMPTY => "AST 模式中没有声明任何节点",
        ERR_SCHEMA_INVALID_NAME => "AST 模式中的无效标识符: '{}'",
        ERR_SCHEMA_DUPLICATE_NODE => "节点 '{}' 重复声明",
        ERR_SCHEMA_DUPLICATE_FIELD => "节点 '{}' 重复声明字段 '{}'",
        ERR_SCHEMA_MALFORMED_FIELD => "节点 '{}' 的字段 '{}' 格式错误，应为 'name: Type'",
        ERR_SCHEMA_MALFORMED_NODE => "节点声明 '{}' 格式错误，应为 'Name : field: Type, ...'",

        // CLI 消息
        MSG_CLI_USAGE => "用法: {} [选项] <命令> [参数]",
        MSG_CLI_VERSION => "{} 版本 {}",
        MSG_CLI_COMMANDS => "命令:\n  tokens <文件>...             扫描源文件并打印 token\n  generate-ast [输出] [--schema <文件>]\n                               生成表达式节点定义\n  help                         显示帮助信息\n  version                      显示版本信息",
        MSG_CLI_OPTIONS => "选项:\n  --lang <en|zh>   设置语言（默认: en）\n  --log <文件>     将构建日志追加到文件\n  --jobs <n>       扫描线程数（默认: CPU 核数）",
        MSG_CLI_ERROR => "错误: {}",
        MSG_CLI_INVALID_EXTENSION => "无效的文件扩展名: '{}'。请使用 '.{}' 文件",
        MSG_CLI_CANNOT_READ_FILE => "无法读取文件 {}: {}",
        MSG_CLI_CANNOT_WRITE_FILE => "无法写入文件 {}: {}",
        MSG_CLI_CANNOT_OPEN_LOG => "无法打开日志文件 {}: {}",
        MSG_CLI_INVALID_JOBS => "无效的 --jobs 参数: '{}'",
        MSG_CLI_POOL_FAILED => "无法启动扫描线程: {}",
        MSG_CLI_LEX_ERROR => "[词法错误] {}",
        MSG_CLI_SCHEMA_ERROR => "[模式错误] {}",
        MSG_CLI_SCANNED => "已扫描 {}: {} 个 token，{} 个错误",
        MSG_CLI_GENERATED => "AST 定义已写入 {}",

        // 未知消息键
        _ => "未知的消息键",
    }
}
