use std::str::FromStr;

use validator::Validate;

use crate::errors::AppError;
use crate::models::department::CODE_MAX_LEN;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(AppError::from)
}

/// Reads a leading run of digits the way a numeric form input does.
/// Empty, negative, non-numeric or overflowing input yields zero.
pub fn parse_count<T: FromStr + Default>(raw: &str) -> T {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse().unwrap_or_default()
}

/// Upper-cases a department code as it is typed and cuts it at the input limit.
pub fn normalize_code_input(raw: &str) -> String {
    raw.to_uppercase().chars().take(CODE_MAX_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::department::DepartmentFields;

    #[test]
    fn parse_count_reads_integer_prefix() {
        assert_eq!(parse_count::<u32>("45"), 45);
        assert_eq!(parse_count::<u32>(" 12 "), 12);
        assert_eq!(parse_count::<u64>("12.75"), 12);
        assert_eq!(parse_count::<u64>("300abc"), 300);
        assert_eq!(parse_count::<u32>("+7"), 7);
    }

    #[test]
    fn parse_count_defaults_to_zero() {
        assert_eq!(parse_count::<u32>(""), 0);
        assert_eq!(parse_count::<u32>("abc"), 0);
        assert_eq!(parse_count::<u32>("-5"), 0);
        assert_eq!(parse_count::<u32>("99999999999"), 0);
    }

    #[test]
    fn code_input_is_uppercased_and_truncated() {
        assert_eq!(normalize_code_input("eng"), "ENG");
        assert_eq!(normalize_code_input("finance"), "FINAN");
    }

    #[test]
    fn validate_payload_reports_validation_error() {
        let err = validate_payload(&DepartmentFields::default()).unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
