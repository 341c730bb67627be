//! UAE passport number: one letter followed by seven digits, e.g. `A1234567`.

use crate::models::{BatchEntry, ErrorCode, Outcome, ValidationResult};
use crate::utils::text::{non_blank, redact, strip};
use crate::validation::batch::{self, IdentifierValidator};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

pub const PASSPORT_LENGTH: usize = 8;

lazy_static! {
    static ref PASSPORT_NUMBER: Regex = Regex::new(r"^[A-Z][0-9]{7}$").unwrap();
}

pub struct PassportValidator;

impl IdentifierValidator for PassportValidator {
    type Info = ValidationResult;
    const NAME: &'static str = "Passport";

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
        debug!("Passport number rejected: {}", code);
    }
    result
}

fn parse(input: Option<&str>) -> ValidationResult {
    let number = match non_blank(input) {
        Some(s) => strip(s.trim(), &[' ']).to_uppercase(),
        None => {
            return ValidationResult::fail(ErrorCode::EmptyInput, "Passport number cannot be empty.")
        }
    };

    let len = number.chars().count();
    if len != PASSPORT_LENGTH {
        return ValidationResult::fail(
            ErrorCode::InvalidLength,
            format!("Passport number must be {} characters, got {}.", PASSPORT_LENGTH, len),
        );
    }
    if !PASSPORT_NUMBER.is_match(&number) {
        return ValidationResult::fail(
            ErrorCode::InvalidFormat,
            "Passport number must be one letter followed by 7 digits (A1234567).",
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
    batch::parse_many::<PassportValidator, I, S>(inputs)
}

/// `A****567`. Other shapes are returned trimmed and upper-cased.
pub fn mask(input: Option<&str>) -> String {
    let number = match non_blank(input) {
        Some(s) => s.trim().to_uppercase(),
        None => return String::new(),
    };
    if !PASSPORT_NUMBER.is_match(&number) {
        return number;
    }
    redact(&number, 1, 3)
}
