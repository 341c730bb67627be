//! UAE IBAN: `AE` + 2 check digits + 3-digit bank code + 16-digit account
//! number, 23 characters in all, verified with ISO 13616 Mod-97.

use crate::models::lookup::{bank_name, is_known_bank};
use crate::models::{BatchEntry, ErrorCode, IbanFields, IbanInfo, Outcome};
use crate::utils::text::{all_digits, non_blank, redact, strip};
use crate::validation::batch::{self, IdentifierValidator};
use crate::validation::checksum::iban_mod97;
use log::{debug, trace};

pub const COUNTRY_CODE: &str = "AE";
pub const IBAN_LENGTH: usize = 23;

pub struct IbanValidator;

impl IdentifierValidator for IbanValidator {
    type Info = IbanInfo;
    const NAME: &'static str = "IBAN";

    fn validate(input: Option<&str>) -> IbanInfo {
        validate(input)
    }

    fn mask(input: Option<&str>) -> String {
        mask(input)
    }
}

fn normalize(input: &str) -> String {
    strip(input.trim(), &[' ']).to_uppercase()
}

pub fn validate(input: Option<&str>) -> IbanInfo {
    let info = parse(input);
    match info.error_code() {
        Some(code) => debug!("IBAN rejected: {}", code),
        None => trace!("IBAN accepted: {}", mask(input)),
    }
    info
}

fn parse(input: Option<&str>) -> IbanInfo {
    let iban = match non_blank(input) {
        Some(s) => normalize(s),
        None => return IbanInfo::fail(ErrorCode::EmptyInput, "IBAN cannot be empty."),
    };

    if !iban.starts_with(COUNTRY_CODE) {
        return IbanInfo::fail(
            ErrorCode::InvalidCountryCode,
            format!("IBAN must start with {}.", COUNTRY_CODE),
        );
    }
    let len = iban.chars().count();
    if len != IBAN_LENGTH {
        return IbanInfo::fail(
            ErrorCode::InvalidLength,
            format!("UAE IBAN must be {} characters, got {}.", IBAN_LENGTH, len),
        );
    }
    if !all_digits(&iban[2..]) {
        return IbanInfo::fail(
            ErrorCode::InvalidCharacters,
            "UAE IBAN may only contain digits after the country code.",
        );
    }
    if iban_mod97(&iban) != 1 {
        return IbanInfo::fail(ErrorCode::InvalidChecksum, "IBAN checksum is invalid (Mod-97).");
    }

    let bank_code = &iban[4..7];
    if !is_known_bank(bank_code) {
        debug!("IBAN bank code {} is not in the bank table", bank_code);
    }
    IbanInfo::success(IbanFields {
        country_code: COUNTRY_CODE.to_string(),
        check_digits: iban[2..4].to_string(),
        bank_code: bank_code.to_string(),
        bank_name: bank_name(bank_code).map(str::to_string),
        account_number: iban[7..].to_string(),
        raw_iban: iban,
    })
}

pub fn check(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

pub fn parse_many<I, S>(inputs: I) -> Vec<BatchEntry<IbanInfo>>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    batch::parse_many::<IbanValidator, I, S>(inputs)
}

/// Keeps country code, check digits, bank code and the last 5 account
/// digits: `AE07033***********23456`.
///
/// Anything that is not a 23-character `AE` string is returned normalized
/// (spaces removed, upper-cased) but not masked.
pub fn mask(input: Option<&str>) -> String {
    let iban = match non_blank(input) {
        Some(s) => normalize(s),
        None => return String::new(),
    };
    if iban.chars().count() != IBAN_LENGTH || !iban.starts_with(COUNTRY_CODE) {
        return iban;
    }
    redact(&iban, 7, 5)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "AE070331234567890123456";

    #[test]
    fn test_valid_iban_fields() {
        let info = validate(Some(VALID));
        assert!(info.is_valid());
        let fields = info.fields.unwrap();
        assert_eq!(fields.country_code, "AE");
        assert_eq!(fields.check_digits, "07");
        assert_eq!(fields.bank_code, "033");
        assert_eq!(fields.bank_name.as_deref(), Some("Emirates NBD"));
        assert_eq!(fields.account_number, "1234567890123456");
    }

    #[test]
    fn test_spaced_lowercase_input() {
        let info = validate(Some("ae07 0331 2345 6789 0123 456"));
        assert!(info.is_valid());
        assert_eq!(info.bank_code(), Some("033"));
    }

    #[test]
    fn test_unknown_bank_is_not_a_failure() {
        // Same account under bank code 999 with recomputed check digits.
        let info = validate(Some("AE109991234567890123456"));
        assert!(info.is_valid());
        assert_eq!(info.bank_code(), Some("999"));
        assert_eq!(info.bank_name(), None);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(validate(None).error_code(), Some(ErrorCode::EmptyInput));
        assert_eq!(
            validate(Some("AE0703312345")).error_code(),
            Some(ErrorCode::InvalidLength)
        );
        assert_eq!(
            validate(Some("GB07033123456789012345")).error_code(),
            Some(ErrorCode::InvalidCountryCode)
        );
        assert_eq!(
            validate(Some("AE07033123456789012345X")).error_code(),
            Some(ErrorCode::InvalidCharacters)
        );
        assert_eq!(
            validate(Some("AE990331234567890123456")).error_code(),
            Some(ErrorCode::InvalidChecksum)
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let accented = validate(Some("AE07033123456789012345é"));
        assert_eq!(accented.error_code(), Some(ErrorCode::InvalidCharacters));

        let short = validate(Some("AE07É"));
        assert_eq!(short.error_code(), Some(ErrorCode::InvalidLength));
        assert_eq!(short.error_message(), Some("UAE IBAN must be 23 characters, got 5."));
    }

    #[test]
    fn test_mask() {
        let masked = mask(Some(VALID));
        assert_eq!(masked, "AE07033***********23456");
        assert_eq!(masked.len(), VALID.len());
        assert_eq!(mask(None), "");
        assert_eq!(mask(Some("gb12 34")), "GB1234");
    }

    #[test]
    fn test_parse_many() {
        let results = parse_many(vec![Some(VALID), Some("AE000000000000000000000")]);
        assert_eq!(results.len(), 2);
        assert!(results[0].is_valid());
        assert!(!results[1].is_valid());
        assert_eq!(results[1].error_code(), Some(ErrorCode::InvalidChecksum));
    }
}
