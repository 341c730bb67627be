//! UAE mobile numbers.
//!
//! Accepted shapes: `+971XXXXXXXXX`, `00971XXXXXXXXX`, `971XXXXXXXXX`,
//! `05XXXXXXXX` and the bare 9-digit local number. Spaces, dashes and
//! parentheses are ignored. A valid local number starts with `5` and its
//! prefix (`0` + first two digits) must belong to a known carrier.

use crate::models::lookup::{carrier, is_valid_mobile_prefix};
use crate::models::{BatchEntry, ErrorCode, MobileFields, MobileInfo, Outcome};
use crate::utils::text::{all_digits, non_blank, redact, strip};
use crate::validation::batch::{self, IdentifierValidator};
use log::{debug, trace};

pub const COUNTRY_PREFIX: &str = "+971";
pub const LOCAL_LENGTH: usize = 9;

pub struct MobileValidator;

impl IdentifierValidator for MobileValidator {
    type Info = MobileInfo;
    const NAME: &'static str = "Mobile";

    fn validate(input: Option<&str>) -> MobileInfo {
        validate(input)
    }

    fn mask(input: Option<&str>) -> String {
        mask(input)
    }
}

// Drops the international or trunk prefix. Shapes that match none of the
// known prefixes are taken as already local.
fn local_part(number: &str) -> &str {
    let len = number.chars().count();
    if let Some(rest) = number.strip_prefix("+971") {
        rest
    } else if let Some(rest) = number.strip_prefix("00971") {
        rest
    } else if len == 12 && number.starts_with("971") {
        &number[3..]
    } else if len == 10 && number.starts_with('0') {
        &number[1..]
    } else {
        number
    }
}

pub fn validate(input: Option<&str>) -> MobileInfo {
    let info = parse(input);
    match info.error_code() {
        Some(code) => debug!("Mobile number rejected: {}", code),
        None => trace!("Mobile number accepted: {}", mask(input)),
    }
    info
}

fn parse(input: Option<&str>) -> MobileInfo {
    let number = match non_blank(input) {
        Some(s) => strip(s.trim(), &[' ', '-', '(', ')']),
        None => return MobileInfo::fail(ErrorCode::EmptyInput, "Mobile number cannot be empty."),
    };

    let local = local_part(&number);
    if local.chars().count() != LOCAL_LENGTH {
        return MobileInfo::fail(
            ErrorCode::InvalidLength,
            format!("Mobile number must have {} digits after the country code.", LOCAL_LENGTH),
        );
    }
    if !all_digits(local) {
        return MobileInfo::fail(
            ErrorCode::InvalidCharacters,
            "Mobile number may only contain digits.",
        );
    }
    if !local.starts_with('5') {
        return MobileInfo::fail(
            ErrorCode::InvalidPrefix,
            "UAE mobile numbers start with 5 after the country code.",
        );
    }

    let prefix = format!("0{}", &local[..2]);
    if !is_valid_mobile_prefix(&prefix) {
        return MobileInfo::fail(
            ErrorCode::InvalidMobilePrefix,
            format!("{} is not a UAE mobile prefix.", prefix),
        );
    }

    MobileInfo::success(MobileFields {
        normalized_number: format!("{}{}", COUNTRY_PREFIX, local),
        carrier: carrier(&prefix).unwrap_or_default().to_string(),
        prefix,
    })
}

pub fn check(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

pub fn parse_many<I, S>(inputs: I) -> Vec<BatchEntry<MobileInfo>>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    batch::parse_many::<MobileValidator, I, S>(inputs)
}

/// Rewrites a recognized shape to `+971XXXXXXXXX` without checking the
/// carrier prefix. Unrecognized input is returned trimmed.
pub fn sanitize(input: Option<&str>) -> String {
    let trimmed = match non_blank(input) {
        Some(s) => s.trim(),
        None => return String::new(),
    };
    let number = strip(trimmed, &[' ', '-']);
    let len = number.chars().count();

    if len == 13 && number.starts_with("+971") {
        number
    } else if len == 14 && number.starts_with("00971") {
        format!("+{}", &number[2..])
    } else if len == 12 && number.starts_with("971") {
        format!("+{}", number)
    } else if len == 10 && number.starts_with('0') {
        format!("{}{}", COUNTRY_PREFIX, &number[1..])
    } else if len == LOCAL_LENGTH && all_digits(&number) {
        format!("{}{}", COUNTRY_PREFIX, number)
    } else {
        trimmed.to_string()
    }
}

/// `+97150****567`: the country code and carrier digits plus the last three
/// digits stay visible. Numbers that do not validate are returned trimmed.
pub fn mask(input: Option<&str>) -> String {
    let trimmed = match non_blank(input) {
        Some(s) => s.trim(),
        None => return String::new(),
    };
    match parse(Some(trimmed)).fields {
        Some(fields) => redact(&fields.normalized_number, 6, 3),
        None => trimmed.to_string(),
    }
}
