//! 消息键定义

// 词法错误
pub const ERR_LEX_UNEXPECTED_CHARACTER: &str = "err.lex.unexpected_character";
pub const ERR_LEX_UNTERMINATED_STRING: &str = "err.lex.unterminated_string";
pub const ERR_LEX_UNTERMINATED_COMMENT: &str = "err.lex.unterminated_comment";
pub const ERR_LEX_INVALID_NUMBER: &str = "err.lex.invalid_number";
pub const ERR_LEX_AT: &str = "err.lex.at";

// AST 模式错误
pub const ERR_SCHEMA_EMPTY: &str = "err.schema.empty";
pub const ERR_SCHEMA_INVALID_NAME: &str = "err.schema.invalid_name";
pub const ERR_SCHEMA_DUPLICATE_NODE: &str = "err.schema.duplicate_node";
pub const ERR_SCHEMA_DUPLICATE_FIELD: &str = "err.schema.duplicate_field";
pub const ERR_SCHEMA_MALFORMED_FIELD: &str = "err.schema.malformed_field";
pub const ERR_SCHEMA_MALFORMED_NODE: &str = "err.schema.malformed_node";

// CLI 消息
pub const MSG_CLI_USAGE: &str = "msg.cli.usage";
pub const MSG_CLI_VERSION: &str = "msg.cli.version";
pub const MSG_CLI_COMMANDS: &str = "msg.cli.commands";
pub const MSG_CLI_OPTIONS: &str = "msg.cli.options";
pub const MSG_CLI_ERROR: &str = "msg.cli.error";
pub const MSG_CLI_INVALID_EXTENSION: &str = "msg.cli.invalid_extension";
pub const MSG_CLI_CANNOT_READ_FILE: &str = "msg.cli.cannot_read_file";
pub const MSG_CLI_CANNOT_WRITE_FILE: &str = "msg.cli.cannot_write_file";
pub const MSG_CLI_CANNOT_OPEN_LOG: &str = "msg.cli.cannot_open_log";
pub const MSG_CLI_INVALID_JOBS: &str = "msg.cli.invalid_jobs";
pub const MSG_CLI_POOL_FAILED: &str = "msg.cli.pool_failed";
pub const MSG_CLI_LEX_ERROR: &str = "msg.cli.lex_error";
pub const MSG_CLI_SCHEMA_ERROR: &str = "msg.cli.schema_error";
pub const MSG_CLI_SCANNED: &str = "msg.cli.scanned";
pub const MSG_CLI_GENERATED: &str = "msg.cli.generated";

/// 全部消息键（用于检查翻译完整性）
pub const ALL: &[&str] = &[
    ERR_LEX_UNEXPECTED_CHARACTER,
    ERR_LEX_UNTERMINATED_STRING,
    ERR_LEX_UNTERMINATED_COMMENT,
    ERR_LEX_INVALID_NUMBER,
    ERR_LEX_AT,
    ERR_SCHEMA_EMPTY,
    ERR_SCHEMA_INVALID_NAME,
    ERR_SCHEMA_DUPLICATE_NODE,
    ERR_SCHEMA_DUPLICATE_FIELD,
    ERR_SCHEMA_MALFORMED_FIELD,
    ERR_SCHEMA_MALFORMED_NODE,
    MSG_CLI_USAGE,
    MSG_CLI_VERSION,
    MSG_CLI_COMMANDS,
    MSG_CLI_OPTIONS,
    MSG_CLI_ERROR,
    MSG_CLI_INVALID_EXTENSION,
    MSG_CLI_CANNOT_READ_FILE,
    MSG_CLI_CANNOT_WRITE_FILE,
    MSG_CLI_CANNOT_OPEN_LOG,
    MSG_CLI_INVALID_JOBS,
    MSG_CLI_POOL_FAILED,
    MSG_CLI_LEX_ERROR,
    MSG_CLI_SCHEMA_ERROR,
    MSG_CLI_SCANNED,
    MSG_CLI_GENERATED,
];
