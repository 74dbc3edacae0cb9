//! CLI command messaging system
//!
//! Consistent, coloured status lines for everything the CLI prints outside
//! the dashboard itself.

/// Severity of a CLI status line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
pub enum Tone {
    #[strum(to_string = "INFO")]
    Info,
    #[strum(to_string = "WARN")]
    Warn,
    #[strum(to_string = "ERROR")]
    Error,
    #[strum(to_string = "SUCCESS")]
    Success,
}

impl Tone {
    fn ansi(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[1;33m",
            Tone::Warn => "\x1b[1;91m",
            Tone::Error => "\x1b[1;31m",
            Tone::Success => "\x1b[1;32m",
        }
    }
}

/// `[TAG] title<TAB> details`, with the tag coloured.
pub fn format_line(tone: Tone, title: &str, details: &str) -> String {
    let tag = format!("{}[{}]\x1b[0m", tone.ansi(), tone);
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

pub fn print_line(tone: Tone, title: &str, details: &str) {
    match tone {
        Tone::Error => eprintln!("{}", format_line(tone, title, details)),
        _ => println!("{}", format_line(tone, title, details)),
    }
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line(
            $crate::cli_messages::Tone::Info,
            $title,
            &format!($($details)*),
        )
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line(
            $crate::cli_messages::Tone::Warn,
            $title,
            &format!($($details)*),
        )
    };
}

/// Errors go to stderr.
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Error, $title, "")
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_line($crate::cli_messages::Tone::Error, $title, $details)
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_line(
            $crate::cli_messages::Tone::Success,
            $title,
            &format!($($details)*),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_details() {
        assert_eq!(
            format_line(Tone::Success, "Dashboard unmounted", "load Ready"),
            "\x1b[1;32m[SUCCESS]\x1b[0m Dashboard unmounted\t load Ready"
        );
    }

    #[test]
    fn test_format_line_without_details() {
        assert_eq!(
            format_line(Tone::Warn, "Interrupted", ""),
            "\x1b[1;91m[WARN]\x1b[0m Interrupted"
        );
    }
}
