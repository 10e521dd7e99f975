//! Number and secret formatting helpers

use crate::constants::output::TOKEN_VISIBLE_CHARS;

const BINARY_UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];

/// Insert thousands separators: `1234567` -> `1,234,567`
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Byte count with a human readable binary size, e.g. `1,536 bytes (1.50 KiB)`
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }

    let mut size = bytes as f64;
    let mut unit = BINARY_UNITS[0];
    for candidate in BINARY_UNITS {
        size /= 1024.0;
        unit = candidate;
        if size < 1024.0 {
            break;
        }
    }

    format!("{} bytes ({:.2} {})", group_thousands(bytes), size, unit)
}

pub fn format_percentage(percentage: f64) -> String {
    format!("{:.2}%", percentage)
}

/// Hide all but the last few characters of a token
///
/// Tokens too short to keep a suffix hidden are masked entirely.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    if chars.len() <= TOKEN_VISIBLE_CHARS * 2 {
        return "*".repeat(chars.len());
    }

    let visible: String = chars[chars.len() - TOKEN_VISIBLE_CHARS..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - TOKEN_VISIBLE_CHARS), visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_bytes_small() {
        assert_eq!(format_bytes(0), "0 bytes");
        assert_eq!(format_bytes(1023), "1023 bytes");
    }

    #[test]
    fn test_format_bytes_units() {
        assert_eq!(format_bytes(1536), "1,536 bytes (1.50 KiB)");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3,145,728 bytes (3.00 MiB)");
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(50.0), "50.00%");
        assert_eq!(format_percentage(33.333333), "33.33%");
    }

    #[test]
    fn test_mask_token_keeps_suffix() {
        assert_eq!(mask_token("4134b116be73b40c"), "************b40c");
    }

    #[test]
    fn test_mask_token_short_is_fully_hidden() {
        assert_eq!(mask_token("abcd"), "****");
        assert_eq!(mask_token("abcdefgh"), "********");
        assert_eq!(mask_token(""), "");
    }
}
