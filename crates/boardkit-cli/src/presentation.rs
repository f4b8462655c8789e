//! Shared CLI presentation utilities.
//!
//! Format-only helpers; domain projections come from `boardkit-gui`.

use serde::Serialize;

use crate::error::CliError;

/// Truncates a string to at most `max_len` characters, adding "..." if
/// needed.
///
/// # Examples
///
/// ```rust
/// use boardkit_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), |v| v.to_string())
}

/// Print the panel's error banner to stderr.
pub fn print_banner(banner: Option<&str>) {
    if let Some(message) = banner {
        eprintln!("warning: {message}");
    }
}

/// Print `value` as pretty JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::Internal(format!("failed to encode JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_counts_characters() {
        assert_eq!(truncate_string("Zürich Board", 8), "Züric...");
        assert_eq!(truncate_string("abc", 3), "abc");
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some("x"), "--"), "x");
        assert_eq!(format_optional(None::<&str>, "--"), "--");
    }
}
