//! Log formatting and output with ANSI colors
//!
//! Errors and warnings go to stderr, everything else to stdout. Broken pipes
//! (e.g. `| head`) end the process quietly.

use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stderr, stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 10;
const LEVEL_WIDTH: usize = 7;

pub fn format_and_log(tag: &LogTag, level: LogLevel, message: &str) {
    let timestamp = Local::now().format("%H:%M:%S").to_string();

    let line = format!(
        "{} [{}] [{}] {}",
        timestamp.dimmed(),
        format_tag(tag),
        format_level(level),
        message
    );

    match level {
        LogLevel::Error | LogLevel::Warning => write_safe(&mut stderr(), &line),
        _ => write_safe(&mut stdout(), &line),
    }
}

fn format_tag(tag: &LogTag) -> ColoredString {
    let label = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => label.bright_yellow().bold(),
        LogTag::Config => label.bright_white().bold(),
        LogTag::Wallet => label.bright_magenta().bold(),
        LogTag::Rpc => label.bright_cyan().bold(),
        LogTag::Scanner => label.bright_blue().bold(),
        LogTag::Classifier => label.bright_green().bold(),
        LogTag::Pumpfun => label.bright_purple().bold(),
        LogTag::Seller => label.bright_red().bold(),
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let label = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => label.bright_red().bold(),
        LogLevel::Warning => label.bright_yellow().bold(),
        LogLevel::Info => label.white().bold(),
        LogLevel::Debug => label.dimmed(),
        LogLevel::Verbose => label.dimmed(),
    }
}

fn write_safe<W: Write>(out: &mut W, message: &str) {
    if let Err(e) = writeln!(out, "{}", message) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
    let _ = out.flush();
}
