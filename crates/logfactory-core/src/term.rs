//! Terminal detection and level colouring.

use colored::*;
use logfactory_types::LogLevel;
use std::io::{self, IsTerminal};

/// Check if stdout is attached to a terminal.
pub fn in_controlling_terminal() -> bool {
    io::stdout().is_terminal()
}

/// Level label, coloured when `color` is set.
pub fn paint_level(level: LogLevel, color: bool) -> String {
    let label = level.as_str();
    if !color {
        return label.to_string();
    }

    match level {
        LogLevel::Error => label.red().bold().to_string(),
        LogLevel::Warn => label.yellow().to_string(),
        LogLevel::Info => label.green().to_string(),
        LogLevel::Debug => label.blue().to_string(),
        LogLevel::Trace => label.magenta().to_string(),
        LogLevel::None => label.to_string(),
    }
}
