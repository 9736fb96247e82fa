// src/commands/args.rs
use crate::error::ShellError;

/// `No file specified. Usage: TYPE <file>`
pub fn missing(what: &str, usage: &str) -> ShellError {
    ShellError::invalid(format!("No {} specified. Usage: {}", what, usage))
}

/// Drop one pair of surrounding double quotes.
pub fn unquote(s: &str) -> &str {
    let s = s.trim();
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}

/// Text after the first whitespace-separated token of `raw`.
pub fn after_first_token(raw: &str) -> &str {
    let raw = raw.trim_start();
    match raw.find(char::is_whitespace) {
        Some(idx) => raw[idx..].trim_start(),
        None => "",
    }
}
