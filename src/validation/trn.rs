//! UAE Tax Registration Number: 15 digits starting with `100`. There is no
//! check digit.

use crate::models::{BatchEntry, ErrorCode, Outcome, ValidationResult};
use crate::utils::text::{all_digits, non_blank, redact, strip};
use crate::validation::batch::{self, IdentifierValidator};
use log::debug;

pub const TRN_LENGTH: usize = 15;
pub const TRN_PREFIX: &str = "100";

pub struct TrnValidator;

impl IdentifierValidator for TrnValidator {
    type Info = ValidationResult;
    const NAME: &'static str = "TRN";

    fn validate(input: Option<&str>) -> ValidationResult {
        validate(input)
    }

    fn mask(input: Option<&str>) -> String {
        mask(input)
    }
}

pub fn validate(input: Option<&str>) -> ValidationResult {
    let result = parse(input);
    if let Some(code) = result.error_code() {
        debug!("TRN rejected: {}", code);
    }
    result
}

fn parse(input: Option<&str>) -> ValidationResult {
    let trn = match non_blank(input) {
        Some(s) => strip(s.trim(), &[' ', '-']),
        None => return ValidationResult::fail(ErrorCode::EmptyInput, "TRN cannot be empty."),
    };

    let len = trn.chars().count();
    if len != TRN_LENGTH {
        return ValidationResult::fail(
            ErrorCode::InvalidLength,
            format!("TRN must be {} digits, got {}.", TRN_LENGTH, len),
        );
    }
    if !all_digits(&trn) {
        return ValidationResult::fail(ErrorCode::InvalidCharacters, "TRN may only contain digits.");
    }
    if !trn.starts_with(TRN_PREFIX) {
        return ValidationResult::fail(
            ErrorCode::InvalidPrefix,
            format!("TRN must start with {}.", TRN_PREFIX),
        );
    }
    ValidationResult::success()
}

pub fn check(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

pub fn parse_many<I, S>(inputs: I) -> Vec<BatchEntry<ValidationResult>>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    batch::parse_many::<TrnValidator, I, S>(inputs)
}

/// `100*********003`. Anything other than 15 digits is returned trimmed.
pub fn mask(input: Option<&str>) -> String {
    let trimmed = match non_blank(input) {
        Some(s) => s.trim(),
        None => return String::new(),
    };
    if trimmed.len() != TRN_LENGTH || !all_digits(trimmed) {
        return trimmed.to_string();
    }
    redact(trimmed, 3, 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid() {
        for trn in ["100123456700003", "100000000000001", "100-1234-5670-0003", "100 123 456 700 003"] {
            assert!(check(Some(trn)), "{} should be valid", trn);
        }
    }

    #[test]
    fn test_rejects_invalid() {
        assert_eq!(validate(None).error_code(), Some(ErrorCode::EmptyInput));
        assert_eq!(validate(Some("")).error_code(), Some(ErrorCode::EmptyInput));
        assert_eq!(validate(Some("200123456700003")).error_code(), Some(ErrorCode::InvalidPrefix));
        assert_eq!(validate(Some("10012345670")).error_code(), Some(ErrorCode::InvalidLength));
        assert_eq!(
            validate(Some("10012345670000A")).error_code(),
            Some(ErrorCode::InvalidCharacters)
        );
    }

    #[test]
    fn test_mask() {
        let masked = mask(Some("100123456700003"));
        assert_eq!(masked, "100*********003");
        assert_eq!(masked.len(), 15);
        assert_eq!(mask(Some(" 12345 ")), "12345");
        assert_eq!(mask(None), "");
    }

    #[test]
    fn test_parse_many() {
        let results = parse_many(vec![Some("100123456700003"), Some("200123456700003")]);
        assert!(results[0].is_valid());
        assert!(!results[1].is_valid());
    }
}
