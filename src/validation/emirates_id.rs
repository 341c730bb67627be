//! Emirates ID (UAE national identity number).
//!
//! Layout: `784-YYYY-NNNNNNN-C`, 15 digits in total. `784` is the ISO 3166
//! numeric code of the UAE, `YYYY` the holder's birth year, `NNNNNNN` a
//! sequence number and `C` a Luhn mod-10 check digit over the whole number.
//! Input is accepted either as 15 raw digits or in the dashed form above.

use crate::models::{BatchEntry, EmiratesIdFields, EmiratesIdInfo, ErrorCode, Outcome};
use crate::utils::clock::current_year;
use crate::utils::text::{all_digits, non_blank, strip};
use crate::utils::KitError;
use crate::validation::batch::{self, IdentifierValidator};
use crate::validation::checksum::{luhn_check_digit, luhn_valid};
use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

pub const COUNTRY_CODE: &str = "784";
pub const TOTAL_DIGITS: usize = 15;
pub const MIN_BIRTH_YEAR: i32 = 1900;

lazy_static! {
    static ref FORMATTED: Regex = Regex::new(r"^784-[0-9]{4}-[0-9]{7}-[0-9]$").unwrap();
}

pub struct EmiratesIdValidator;

impl IdentifierValidator for EmiratesIdValidator {
    type Info = EmiratesIdInfo;
    const NAME: &'static str = "Emirates ID";

    fn validate(input: Option<&str>) -> EmiratesIdInfo {
        validate(input)
    }

    fn mask(input: Option<&str>) -> String {
        mask(input)
    }
}

pub fn validate(input: Option<&str>) -> EmiratesIdInfo {
    validate_in_year(input, current_year())
}

pub fn check(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

pub fn parse_many<I, S>(inputs: I) -> Vec<BatchEntry<EmiratesIdInfo>>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    batch::parse_many::<EmiratesIdValidator, I, S>(inputs)
}

/// Validates against a fixed reference year instead of the clock.
pub(crate) fn validate_in_year(input: Option<&str>, year: i32) -> EmiratesIdInfo {
    let info = parse(input, year);
    match info.error_code() {
        Some(code) => debug!("Emirates ID rejected: {}", code),
        None => trace!("Emirates ID accepted: {}", mask(input)),
    }
    info
}

fn parse(input: Option<&str>, year: i32) -> EmiratesIdInfo {
    let trimmed = match non_blank(input) {
        Some(s) => s.trim(),
        None => {
            return EmiratesIdInfo::fail(ErrorCode::EmptyInput, "Emirates ID cannot be empty.")
        }
    };

    let normalized = if trimmed.contains('-') {
        if !FORMATTED.is_match(trimmed) {
            return EmiratesIdInfo::fail(
                ErrorCode::InvalidFormat,
                "Emirates ID must be formatted as 784-YYYY-NNNNNNN-C.",
            );
        }
        trimmed.replace('-', "")
    } else {
        if trimmed.chars().count() != TOTAL_DIGITS {
            return EmiratesIdInfo::fail(
                ErrorCode::InvalidLength,
                format!(
                    "Emirates ID must have {} digits, got {}.",
                    TOTAL_DIGITS,
                    trimmed.chars().count()
                ),
            );
        }
        if !all_digits(trimmed) {
            return EmiratesIdInfo::fail(
                ErrorCode::InvalidCharacters,
                "Emirates ID may only contain digits, or use the 784-YYYY-NNNNNNN-C form.",
            );
        }
        if !trimmed.starts_with(COUNTRY_CODE) {
            return EmiratesIdInfo::fail(
                ErrorCode::InvalidCountryCode,
                format!("Emirates ID must start with {}.", COUNTRY_CODE),
            );
        }
        trimmed.to_string()
    };

    // 15 ASCII digits from here on.
    let birth_year: i32 = match normalized[3..7].parse() {
        Ok(y) => y,
        Err(_) => {
            return EmiratesIdInfo::fail(
                ErrorCode::InvalidBirthYear,
                "Emirates ID birth year is not a number.",
            )
        }
    };
    if birth_year < MIN_BIRTH_YEAR || birth_year > year {
        return EmiratesIdInfo::fail(
            ErrorCode::InvalidBirthYearRange,
            format!(
                "Birth year {} is outside {}-{}.",
                birth_year, MIN_BIRTH_YEAR, year
            ),
        );
    }

    if !luhn_valid(&normalized) {
        return EmiratesIdInfo::fail(
            ErrorCode::InvalidChecksum,
            "Emirates ID check digit does not match (Luhn).",
        );
    }

    EmiratesIdInfo::success(EmiratesIdFields {
        country_code: normalized[..3].to_string(),
        birth_year,
        sequence_number: normalized[7..14].to_string(),
        check_digit: normalized.as_bytes()[14] - b'0',
        approximate_age: year - birth_year,
        raw_id: normalized,
    })
}

/// Computes the Luhn check digit for the first 14 digits of an Emirates ID.
///
/// # Errors
///
/// Returns [`KitError::InvalidArgument`] unless `prefix` is exactly 14 ASCII
/// digits.
pub fn compute_check_digit(prefix: &str) -> Result<u8, KitError> {
    let check = if prefix.len() == TOTAL_DIGITS - 1 {
        luhn_check_digit(prefix)
    } else {
        None
    };
    check.ok_or_else(|| {
        KitError::invalid_argument(
            "prefix",
            format!("expected exactly {} digits", TOTAL_DIGITS - 1),
        )
    })
}

/// Whether the holder is at least `minimum_age` years old.
///
/// Only the birth year is encoded, so the answer is `Some(true)` or
/// `Some(false)` when the year alone decides it, and `None` when the holder
/// reaches the age some time during the current year. An invalid ID also
/// yields `None`.
///
/// # Errors
///
/// Returns [`KitError::OutOfRange`] when `minimum_age` is negative.
pub fn meets_minimum_age(input: Option<&str>, minimum_age: i32) -> Result<Option<bool>, KitError> {
    meets_minimum_age_in_year(input, minimum_age, current_year())
}

pub(crate) fn meets_minimum_age_in_year(
    input: Option<&str>,
    minimum_age: i32,
    year: i32,
) -> Result<Option<bool>, KitError> {
    if minimum_age < 0 {
        return Err(KitError::OutOfRange {
            name: "minimum_age",
            value: i64::from(minimum_age),
        });
    }

    let birth_year = match validate_in_year(input, year).birth_year() {
        Some(y) => y,
        None => return Ok(None),
    };

    let threshold = year - minimum_age;
    Ok(match birth_year.cmp(&threshold) {
        std::cmp::Ordering::Less => Some(true),
        std::cmp::Ordering::Greater => Some(false),
        std::cmp::Ordering::Equal => None,
    })
}

// 15 digits once dashes and spaces are removed, or None.
fn digits_only(trimmed: &str) -> Option<String> {
    let digits = strip(trimmed, &['-', ' ']);
    if digits.len() == TOTAL_DIGITS && all_digits(&digits) {
        Some(digits)
    } else {
        None
    }
}

/// Reformats to `XXX-YYYY-NNNNNNN-C` without validating.
///
/// Input that does not reduce to 15 digits comes back trimmed but otherwise
/// unchanged; missing input gives an empty string.
pub fn sanitize(input: Option<&str>) -> String {
    let trimmed = match non_blank(input) {
        Some(s) => s.trim(),
        None => return String::new(),
    };
    match digits_only(trimmed) {
        Some(d) => format!("{}-{}-{}-{}", &d[..3], &d[3..7], &d[7..14], &d[14..]),
        None => trimmed.to_string(),
    }
}

/// Hides birth year and sequence number: `784-****-*******-C`.
pub fn mask(input: Option<&str>) -> String {
    let trimmed = match non_blank(input) {
        Some(s) => s.trim(),
        None => return String::new(),
    };
    match digits_only(trimmed) {
        Some(d) => format!("{}-****-*******-{}", COUNTRY_CODE, &d[14..]),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    fn make_id(birth_year: i32) -> String {
        let prefix = format!("784{}1234567", birth_year);
        let check = compute_check_digit(&prefix).unwrap();
        format!("784-{}-1234567-{}", birth_year, check)
    }

    #[test]
    fn test_formatted_id_parses_fields() {
        let info = validate(Some("784-1990-1234567-6"));
        assert!(info.is_valid());
        let fields = info.fields.unwrap();
        assert_eq!(fields.country_code, "784");
        assert_eq!(fields.birth_year, 1990);
        assert_eq!(fields.sequence_number, "1234567");
        assert_eq!(fields.check_digit, 6);
        assert_eq!(fields.raw_id, "784199012345676");
    }

    #[test]
    fn test_approximate_age_uses_reference_year() {
        let info = validate_in_year(Some("784199012345676"), YEAR);
        assert_eq!(info.approximate_age(), Some(36));
    }

    #[test]
    fn test_missing_or_blank_input() {
        assert_eq!(validate(None).error_code(), Some(ErrorCode::EmptyInput));
        assert_eq!(validate(Some("   ")).error_code(), Some(ErrorCode::EmptyInput));
    }

    #[test]
    fn test_wrong_dash_positions() {
        for input in ["7841-990-1234567-1", "784-19901234567-1", "784-1990-12345671"] {
            assert_eq!(validate(Some(input)).error_code(), Some(ErrorCode::InvalidFormat));
        }
    }

    #[test]
    fn test_raw_form_errors() {
        assert_eq!(validate(Some("78419901234")).error_code(), Some(ErrorCode::InvalidLength));
        assert_eq!(
            validate(Some("78419901234567X")).error_code(),
            Some(ErrorCode::InvalidCharacters)
        );
        assert_eq!(
            validate(Some("123199012345676")).error_code(),
            Some(ErrorCode::InvalidCountryCode)
        );
    }

    #[test]
    fn test_spaced_form_is_rejected_until_sanitized() {
        let spaced = "784 1990 1234567 6";
        assert_eq!(validate(Some(spaced)).error_code(), Some(ErrorCode::InvalidLength));
        assert!(check(Some(sanitize(Some(spaced)).as_str())));
    }

    #[test]
    fn test_birth_year_range() {
        let prefix = "78418991234567";
        let id = format!("{}{}", prefix, compute_check_digit(prefix).unwrap());
        assert_eq!(
            validate_in_year(Some(id.as_str()), YEAR).error_code(),
            Some(ErrorCode::InvalidBirthYearRange)
        );

        let future = make_id(YEAR + 1);
        assert_eq!(
            validate_in_year(Some(future.as_str()), YEAR).error_code(),
            Some(ErrorCode::InvalidBirthYearRange)
        );
        assert!(validate_in_year(Some(make_id(YEAR).as_str()), YEAR).is_valid());
    }

    #[test]
    fn test_bad_check_digit() {
        assert_eq!(
            validate(Some("784-1990-0000000-0")).error_code(),
            Some(ErrorCode::InvalidChecksum)
        );
    }

    #[test]
    fn test_compute_check_digit_produces_valid_id() {
        let prefix = "78419901234567";
        let id = format!("{}{}", prefix, compute_check_digit(prefix).unwrap());
        assert!(check(Some(id.as_str())));
        for year in [1955, 1985, 2000, 2010] {
            assert!(check(Some(make_id(year).as_str())));
        }
    }

    #[test]
    fn test_compute_check_digit_rejects_bad_prefix() {
        assert!(matches!(
            compute_check_digit("7841990123"),
            Err(KitError::InvalidArgument { .. })
        ));
        assert!(compute_check_digit("7841990123456X").is_err());
    }

    #[test]
    fn test_minimum_age() {
        let old = make_id(YEAR - 40);
        let young = make_id(YEAR - 10);
        let borderline = make_id(YEAR - 21);

        assert_eq!(meets_minimum_age_in_year(Some(old.as_str()), 21, YEAR), Ok(Some(true)));
        assert_eq!(meets_minimum_age_in_year(Some(young.as_str()), 21, YEAR), Ok(Some(false)));
        assert_eq!(meets_minimum_age_in_year(Some(borderline.as_str()), 21, YEAR), Ok(None));
        assert_eq!(meets_minimum_age_in_year(Some(make_id(YEAR - 5).as_str()), 0, YEAR), Ok(Some(true)));
    }

    #[test]
    fn test_minimum_age_invalid_input_is_indeterminate() {
        assert_eq!(meets_minimum_age(Some("invalid"), 21), Ok(None));
        assert_eq!(meets_minimum_age(None, 21), Ok(None));
    }

    #[test]
    fn test_minimum_age_rejects_negative() {
        let id = make_id(1990);
        assert_eq!(
            meets_minimum_age(Some(id.as_str()), -1),
            Err(KitError::OutOfRange {
                name: "minimum_age",
                value: -1
            })
        );
    }

    #[test]
    fn test_minimum_age_against_clock() {
        let year = current_year();
        let id = make_id(year - 21);
        assert_eq!(meets_minimum_age(Some(id.as_str()), 21), Ok(None));
    }

    #[test]
    fn test_sanitize() {
        for input in ["784199012345676", "784 1990 1234567 6", "784-1990-1234567-6"] {
            assert_eq!(sanitize(Some(input)), "784-1990-1234567-6");
        }
        assert_eq!(sanitize(None), "");
        assert_eq!(sanitize(Some("not-valid")), "not-valid");
    }

    #[test]
    fn test_mask_hides_birth_year_and_sequence() {
        let masked = mask(Some("784199012345676"));
        assert_eq!(masked, "784-****-*******-6");
        assert_eq!(masked.len(), sanitize(Some("784199012345676")).len());
        assert_eq!(mask(None), "");
        assert_eq!(mask(Some("not-an-id")), "not-an-id");
    }

    #[test]
    fn test_mask_always_prints_uae_country_code() {
        assert_eq!(mask(Some("123199012345676")), "784-****-*******-6");
        assert_eq!(mask(Some("000-1990-1234567-3")), "784-****-*******-3");
    }

    #[test]
    fn test_parse_many_keeps_order_and_count() {
        let valid = make_id(1990);
        let results = parse_many(vec![Some(valid.as_str()), Some("invalid"), None]);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_valid());
        assert_eq!(results[0].input.as_deref(), Some(valid.as_str()));
        assert!(!results[1].is_valid());
        assert_eq!(results[2].error_code(), Some(ErrorCode::EmptyInput));
        assert_eq!(results[2].input, None);
    }

    #[test]
    fn test_parse_many_does_not_stop_on_failure() {
        let results = parse_many(vec![Some("bad1"), Some("bad2"), Some("bad3")]);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| !r.is_valid()));

        let empty: Vec<Option<&str>> = Vec::new();
        assert!(parse_many(empty).is_empty());
    }
}
