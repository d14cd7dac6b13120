use colored::*;
use std::fmt::Display;

use crate::utils::{command_error, exit_code::ExitCode};

/// Defines the type of log message to determine the icon and color scheme.
pub enum LogType {
    Success,
    Info,
    /// Rejected input, printed on stderr
    Warning,
}

/// A builder for creating structured, tree-like log messages.
pub struct LogBuilder<'a> {
    log_type: LogType,
    message: String,
    details: Vec<(&'a str, Box<dyn Display>)>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(log_type: LogType, message: impl Display) -> Self {
        Self {
            log_type,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    /// Adds a new detail line (a "branch") to the log message.
    pub fn with_branch(mut self, label: &'a str, value: impl Display + 'static) -> Self {
        self.details.push((label, Box::new(value)));
        self
    }

    pub fn with_optional_branch<T: Display + 'static>(
        self,
        label: &'a str,
        value: Option<T>,
    ) -> Self {
        if let Some(val) = value {
            self.with_branch(label, val)
        } else {
            self
        }
    }

    fn format(&self) -> String {
        let (symbol, color) = match self.log_type {
            LogType::Success => ("✔", "green"),
            LogType::Info => ("ℹ", "blue"),
            LogType::Warning => ("⚠", "yellow"),
        };

        let mut out = format!(
            "{} {}",
            symbol.color(color).bold(),
            self.message.color(color).bold()
        );

        let count = self.details.len();
        for (i, (label, value)) in self.details.iter().enumerate() {
            let prefix = if i == count - 1 { "  ╰─" } else { "  ├─" };
            let padded_label = format!("{label}:");
            out.push_str(&format!(
                "\n{} {:<11} {}",
                prefix.dimmed(),
                padded_label.bold(),
                value
            ));
        }
        out
    }

    /// Consumes the builder and prints the formatted message to the console.
    pub fn print(self) {
        match self.log_type {
            LogType::Warning => eprintln!("{}", self.format()),
            _ => println!("{}", self.format()),
        }
    }
}

/// Print a warning and stop with the usage exit code
pub fn usage_error<T>(message: impl Display) -> command_error::Result<T> {
    LogBuilder::new(LogType::Warning, message).print();
    Err(command_error::Error::Exit(ExitCode::Usage))
}
