//! Terminal styling helpers shared by the CLI screens

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream};

/// Check mark used in status lines
pub const CHECK: &str = "✓";

/// Styling extension for anything displayable
///
/// All helpers respect terminal color support via owo-colors'
/// stream detection, so piped output stays plain.
pub trait Stylize: std::fmt::Display + Sized {
    /// De-emphasized text (hints, secondary info)
    fn muted(&self) -> String {
        format!("{}", self.if_supports_color(Stream::Stdout, |s| s.dimmed()))
    }

    /// Highlighted value (names, counts)
    fn accent(&self) -> String {
        format!("{}", self.if_supports_color(Stream::Stdout, |s| s.cyan()))
    }

    /// Emphasized text (headings, prompts)
    fn emphasis(&self) -> String {
        format!("{}", self.if_supports_color(Stream::Stdout, |s| s.bold()))
    }

    /// Success markers
    fn success(&self) -> String {
        format!("{}", self.if_supports_color(Stream::Stdout, |s| s.green()))
    }

    /// Warnings and validation messages
    fn warn(&self) -> String {
        format!("{}", self.if_supports_color(Stream::Stdout, |s| s.yellow()))
    }
}

impl<T: std::fmt::Display> Stylize for T {}

/// Green check mark
pub fn check() -> String {
    CHECK.success()
}

/// Spinner style for in-flight fetches
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
}
