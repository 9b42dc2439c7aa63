//! Typhoon 命令行
//! 
//! 主入口点：扫描源文件并打印 token，或生成 AST 定义

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use typhoon::astgen::{expression_schema, generate, parse_schema, NodeSpec};
use typhoon::config::{DEFAULT_AST_OUTPUT, LANG_NAME, SOURCE_EXTENSION, VERSION};
use typhoon::driver::{BuildLog, ScanPool};
use typhoon::i18n::{format_message, get_message, messages, Locale};
use typhoon::lexer::ScanResult;

/// 全局选项
struct Options {
    locale: Locale,
    log_path: Option<String>,
    jobs: Option<usize>,
}

/// 打印一个文件的 token 和词法错误，返回是否没有错误
fn report_scan(path: &Path, result: &ScanResult, show_header: bool, log: &BuildLog, locale: Locale) -> bool {
    if show_header {
        println!("{}:", path.display());
    }
    for (i, token) in result.tokens.iter().enumerate() {
        println!("Token {}: {}", i, token);
    }
    for error in &result.errors {
        log.error(&format_message(messages::MSG_CLI_LEX_ERROR, locale, &[&error.render(locale)]));
    }
    log.info(&format_message(
        messages::MSG_CLI_SCANNED,
        locale,
        &[
            &path.display().to_string(),
            &result.tokens.len().to_string(),
            &result.errors.len().to_string(),
        ],
    ));
    result.is_ok()
}

/// 扫描文件并打印 token
fn run_tokens(files: &[&str], options: &Options, log: &BuildLog) -> i32 {
    let locale = options.locale;

    for &path in files {
        if Path::new(path).extension().map(|e| e != SOURCE_EXTENSION).unwrap_or(true) {
            let msg = format_message(messages::MSG_CLI_INVALID_EXTENSION, locale, &[path, SOURCE_EXTENSION]);
            log.error(&msg);
            return 1;
        }
    }

    let size = options.jobs.unwrap_or_else(num_cpus::get).min(files.len());
    let pool = match ScanPool::new(size) {
        Ok(pool) => pool,
        Err(e) => {
            log.error(&format_message(messages::MSG_CLI_POOL_FAILED, locale, &[&e.to_string()]));
            return 1;
        }
    };

    let paths: Vec<PathBuf> = files.iter().map(|path| PathBuf::from(*path)).collect();
    let show_header = paths.len() > 1;
    let mut ok = true;
    for scan in pool.scan_files(paths) {
        match &scan.outcome {
            Ok(result) => ok &= report_scan(&scan.path, result, show_header, log, locale),
            Err(e) => {
                let path = scan.path.display().to_string();
                log.error(&format_message(messages::MSG_CLI_CANNOT_READ_FILE, locale, &[&path, &e.to_string()]));
                ok = false;
            }
        }
    }

    if ok { 0 } else { 1 }
}

/// 生成 AST 定义：generate-ast [out] [--schema <file>]，out 为 - 时输出到 stdout
fn run_generate(args: &[&str], locale: Locale, log: &BuildLog) -> i32 {
    let mut output = DEFAULT_AST_OUTPUT;
    let mut schema_path = None;
    let mut i = 0;
    while i < args.len() {
        match args[i] {
            "--schema" if i + 1 < args.len() => {
                schema_path = Some(args[i + 1]);
                i += 2;
            }
            arg => {
                output = arg;
                i += 1;
            }
        }
    }

    let schema: Vec<NodeSpec> = match schema_path {
        Some(path) => {
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    log.error(&format_message(messages::MSG_CLI_CANNOT_READ_FILE, locale, &[path, &e.to_string()]));
                    return 1;
                }
            };
            match parse_schema(&text) {
                Ok(schema) => schema,
                Err(e) => {
                    log.error(&format_message(messages::MSG_CLI_SCHEMA_ERROR, locale, &[&e.message(locale)]));
                    return 1;
                }
            }
        }
        None => expression_schema(),
    };

    let source = match generate(&schema) {
        Ok(source) => source,
        Err(e) => {
            log.error(&format_message(messages::MSG_CLI_SCHEMA_ERROR, locale, &[&e.message(locale)]));
            return 1;
        }
    };

    if output == "-" {
        print!("{}", source);
        return 0;
    }

    if let Err(e) = fs::write(output, source) {
        log.error(&format_message(messages::MSG_CLI_CANNOT_WRITE_FILE, locale, &[output, &e.to_string()]));
        return 1;
    }
    log.info(&format_message(messages::MSG_CLI_GENERATED, locale, &[output]));
    0
}

/// 还没有构建日志时的致命错误
fn fatal(locale: Locale, detail: &str) -> ! {
    eprintln!("{}", error_line(locale, detail));
    process::exit(1);
}

fn error_line(locale: Locale, detail: &str) -> String {
    format_message(messages::MSG_CLI_ERROR, locale, &[detail])
}

/// 打印帮助信息
fn print_help(locale: Locale) {
    let usage = format_message(messages::MSG_CLI_USAGE, locale, &[LANG_NAME]);
    println!("{}", usage);
    println!();
    println!("{}", get_message(messages::MSG_CLI_COMMANDS, locale));
    println!();
    println!("{}", get_message(messages::MSG_CLI_OPTIONS, locale));
}

/// 打印版本信息
fn print_version(locale: Locale) {
    let msg = format_message(messages::MSG_CLI_VERSION, locale, &[LANG_NAME, VERSION]);
    println!("{}", msg);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut options = Options { locale: Locale::En, log_path: None, jobs: None };

    // 解析全局选项
    let mut i = 1;
    while i + 1 < args.len() {
        match args[i].as_str() {
            "--lang" => options.locale = Locale::from_arg(&args[i + 1]),
            "--log" => options.log_path = Some(args[i + 1].clone()),
            "--jobs" => match args[i + 1].parse::<usize>() {
                Ok(n) if n > 0 => options.jobs = Some(n),
                _ => {
                    let msg = format_message(messages::MSG_CLI_INVALID_JOBS, options.locale, &[&args[i + 1]]);
                    fatal(options.locale, &msg);
                }
            },
            _ => break,
        }
        i += 2;
    }

    let log = match &options.log_path {
        Some(path) => match BuildLog::with_file(Path::new(path)) {
            Ok(log) => log,
            Err(e) => {
                let msg = format_message(messages::MSG_CLI_CANNOT_OPEN_LOG, options.locale, &[path, &e.to_string()]);
                fatal(options.locale, &msg);
            }
        },
        None => BuildLog::stderr(),
    };

    // 剩余参数
    let remaining: Vec<&str> = args[i..].iter().map(|s| s.as_str()).collect();
    let source_suffix = format!(".{}", SOURCE_EXTENSION);

    let code = match remaining.as_slice() {
        ["help"] | ["--help"] | ["-h"] => {
            print_help(options.locale);
            0
        }
        ["version"] | ["--version"] | ["-v"] => {
            print_version(options.locale);
            0
        }
        ["tokens", files @ ..] if !files.is_empty() => run_tokens(files, &options, &log),
        ["generate-ast", rest @ ..] => run_generate(rest, options.locale, &log),
        [path] if path.ends_with(&source_suffix) => run_tokens(&[*path], &options, &log),
        _ => {
            print_help(options.locale);
            1
        }
    };

    process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_line() {
        let msg = format_message(messages::MSG_CLI_INVALID_JOBS, Locale::En, &["0"]);
        assert_eq!(error_line(Locale::En, &msg), "Error: Invalid --jobs value: '0'");
        assert!(error_line(Locale::Zh, "x").starts_with("错误: "));
    }
}
