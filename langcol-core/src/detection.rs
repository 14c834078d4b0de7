//! Per-row detection result

use std::fmt;

/// Sentinel written when no language was confidently detected
pub const UNDETERMINED_SENTINEL: &str = "NA";

/// Sentinel written when classification failed for a row
pub const FAILED_SENTINEL: &str = "ERROR";

/// Outcome of classifying one text cell.
///
/// Exactly one variant is produced per input row; callers must handle
/// all three.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// A language was identified; holds its uppercase ISO 639-1 code
    Detected(String),
    /// The engine declined to decide (short, ambiguous, or
    /// non-linguistic text)
    Undetermined,
    /// The engine returned an error; holds the reason
    Failed(String),
}

impl Detection {
    /// The value written into the output `language` column
    pub fn as_column_value(&self) -> &str {
        match self {
            Detection::Detected(code) => code,
            Detection::Undetermined => UNDETERMINED_SENTINEL,
            Detection::Failed(_) => FAILED_SENTINEL,
        }
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_column_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detected_column_value_is_code() {
        let detection = Detection::Detected("EN".to_string());
        assert_eq!(detection.as_column_value(), "EN");
    }

    #[test]
    fn test_undetermined_column_value_is_na() {
        assert_eq!(Detection::Undetermined.as_column_value(), "NA");
    }

    #[test]
    fn test_failed_column_value_is_error() {
        let detection = Detection::Failed("engine broke".to_string());
        assert_eq!(detection.as_column_value(), "ERROR");
    }

    #[test]
    fn test_display_matches_column_value() {
        assert_eq!(Detection::Detected("FR".to_string()).to_string(), "FR");
        assert_eq!(Detection::Undetermined.to_string(), "NA");
        assert_eq!(Detection::Failed(String::new()).to_string(), "ERROR");
    }

    #[test]
    fn test_column_value_never_empty() {
        let all = [
            Detection::Detected("DE".to_string()),
            Detection::Undetermined,
            Detection::Failed("reason".to_string()),
        ];
        for detection in &all {
            assert!(!detection.as_column_value().is_empty());
        }
    }
}
