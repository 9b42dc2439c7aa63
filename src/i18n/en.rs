//! English messages

use super::messages::*;

/// Get English message
pub fn get(key: &str) -> &'static str {
    match key {
        // Lexical errors
        ERR_LEX_UNEXPECTED_CHARACTER => "Unexpected character '{}' (U+{})",
        ERR_LEX_UNTERMINATED_STRING => "Unterminated string",
        ERR_LEX_UNTERMINATED_COMMENT => "Unterminated comment",
        ERR_LEX_INVALID_NUMBER => "Invalid number: {}",
        ERR_LEX_AT => "[line {}:{}] {}",

        // Schema errors
        ERR_SCHEMA_EMPTY => "AST schema declares no nodes",
        ERR_SCHEMA_INVALID_NAME => "Invalid identifier in AST schema: '{}'",
        ERR_SCHEMA_DUPLICATE_NODE => "Node '{}' is declared more than once",
        ERR_SCHEMA_DUPLICATE_FIELD => "Node '{}' declares field '{}' more than once",
        ERR_SCHEMA_MALFORMED_FIELD => "Node '{}' has a malformed field '{}', expected 'name: Type'",
        ERR_SCHEMA_MALFORMED_NODE => "Malformed node declaration '{}', expected 'Name : field: Type, ...'",

        // CLI messages
        MSG_CLI_USAGE => "Usage: {} [options] <command> [args]",
        MSG_CLI_VERSION => "{} version {}",
        MSG_CLI_COMMANDS => "Commands:\n  tokens <file>...             Scan source files and print their tokens\n  generate-ast [out] [--schema <file>]\n                               Generate expression node definitions\n  help                         Show this help message\n  version                      Show version information",
        MSG_CLI_OPTIONS => "Options:\n  --lang <en|zh>   Set language (default: en)\n  --log <file>     Append build log records to a file\n  --jobs <n>       Number of scan workers (default: CPU count)",
        MSG_CLI_ERROR => "Error: {}",
        MSG_CLI_INVALID_EXTENSION => "Invalid file extension: '{}'. Expected '.{}' file",
        MSG_CLI_CANNOT_READ_FILE => "Cannot read file {}: {}",
        MSG_CLI_CANNOT_WRITE_FILE => "Cannot write file {}: {}",
        MSG_CLI_CANNOT_OPEN_LOG => "Cannot open log file {}: {}",
        MSG_CLI_INVALID_JOBS => "Invalid --jobs value: '{}'",
        MSG_CLI_POOL_FAILED => "Cannot start scan workers: {}",
        MSG_CLI_LEX_ERROR => "[Lexical Error] {}",
        MSG_CLI_SCHEMA_ERROR => "[Schema Error] {}",
        MSG_CLI_SCANNED => "Scanned {}: {} token(s), {} error(s)",
        MSG_CLI_GENERATED => "Wrote AST definitions to {}",

        // Unknown message key
        _ => "Unknown message key",
    }
}
