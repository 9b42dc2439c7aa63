//! 国际化模块
//! 
//! 提供多语言消息支持，目前支持英文和中文

pub mod messages;
pub mod en;
pub mod zh;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// 英文（默认）
    #[default]
    En,
    /// 中文
    Zh,
}

impl Locale {
    /// 从命令行参数解析语言，无法识别时回退到英文
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "zh" | "cn" | "chinese" => Locale::Zh,
            _ => Locale::En,
        }
    }
}

/// 获取指定语言的消息
pub fn get_message(key: &str, locale: Locale) -> &'static str {
    match locale {
        Locale::En => en::get(key),
        Locale::Zh => zh::get(key),
    }
}

/// 获取带参数的消息（使用 {} 占位符，按顺序替换）
pub fn format_message(key: &str, locale: Locale, args: &[&str]) -> String {
    let mut msg = get_message(key, locale).to_string();
    let mut from = 0;
    for arg in args {
        match msg[from..].find("{}") {
            Some(pos) => {
                let at = from + pos;
                msg.replace_range(at..at + 2, arg);
                // 跳过已插入的参数，参数本身含有 {} 时不会被再次替换
                from = at + arg.len();
            }
            None => break,
        }
    }
    msg
}
