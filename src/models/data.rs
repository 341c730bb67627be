use serde::Serialize;
use std::fmt;

/// Machine-readable reason a validation failed.
///
/// The token returned by [`ErrorCode::as_str`] is stable and locale
/// independent; the accompanying message is for humans only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EmptyInput,
    InvalidLength,
    InvalidFormat,
    InvalidCharacters,
    InvalidCountryCode,
    InvalidChecksum,
    InvalidPrefix,
    InvalidMobilePrefix,
    InvalidBirthYear,
    InvalidBirthYearRange,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EmptyInput => "EMPTY_INPUT",
            ErrorCode::InvalidLength => "INVALID_LENGTH",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::InvalidCharacters => "INVALID_CHARACTERS",
            ErrorCode::InvalidCountryCode => "INVALID_COUNTRY_CODE",
            ErrorCode::InvalidChecksum => "INVALID_CHECKSUM",
            ErrorCode::InvalidPrefix => "INVALID_PREFIX",
            ErrorCode::InvalidMobilePrefix => "INVALID_MOBILE_PREFIX",
            ErrorCode::InvalidBirthYear => "INVALID_BIRTH_YEAR",
            ErrorCode::InvalidBirthYearRange => "INVALID_BIRTH_YEAR_RANGE",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome shared by every validator.
///
/// A valid result never carries an error; an invalid one always carries a
/// code and a message. The only way to build one is through [`success`] and
/// [`fail`], which keeps that invariant.
///
/// [`success`]: ValidationResult::success
/// [`fail`]: ValidationResult::fail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<ErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_message: Option<String>,
}

impl ValidationResult {
    pub fn success() -> Self {
        ValidationResult {
            is_valid: true,
            error_code: None,
            error_message: None,
        }
    }

    pub fn fail(code: ErrorCode, message: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: false,
            error_code: Some(code),
            error_message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        self.error_code
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// Access to the shared outcome of any per-identifier result.
pub trait Outcome {
    fn outcome(&self) -> &ValidationResult;

    fn is_valid(&self) -> bool {
        self.outcome().is_valid()
    }

    fn error_code(&self) -> Option<ErrorCode> {
        self.outcome().error_code()
    }

    fn error_message(&self) -> Option<&str> {
        self.outcome().error_message()
    }
}

impl Outcome for ValidationResult {
    fn outcome(&self) -> &ValidationResult {
        self
    }
}

/// Fields parsed out of a valid Emirates ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmiratesIdFields {
    /// The 15 digits without separators.
    pub raw_id: String,
    pub country_code: String,
    pub birth_year: i32,
    pub sequence_number: String,
    pub check_digit: u8,
    /// Current year minus birth year. Year granularity only.
    pub approximate_age: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmiratesIdInfo {
    #[serde(flatten)]
    pub result: ValidationResult,
    #[serde(flatten)]
    pub fields: Option<EmiratesIdFields>,
}

impl EmiratesIdInfo {
    pub(crate) fn success(fields: EmiratesIdFields) -> Self {
        EmiratesIdInfo {
            result: ValidationResult::success(),
            fields: Some(fields),
        }
    }

    pub(crate) fn fail(code: ErrorCode, message: impl Into<String>) -> Self {
        EmiratesIdInfo {
            result: ValidationResult::fail(code, message),
            fields: None,
        }
    }

    pub fn birth_year(&self) -> Option<i32> {
        self.fields.as_ref().map(|f| f.birth_year)
    }

    pub fn sequence_number(&self) -> Option<&str> {
        self.fields.as_ref().map(|f| f.sequence_number.as_str())
    }

    pub fn check_digit(&self) -> Option<u8> {
        self.fields.as_ref().map(|f| f.check_digit)
    }

    pub fn approximate_age(&self) -> Option<i32> {
        self.fields.as_ref().map(|f| f.approximate_age)
    }
}

impl Outcome for EmiratesIdInfo {
    fn outcome(&self) -> &ValidationResult {
        &self.result
    }
}

/// Fields parsed out of a valid UAE IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IbanFields {
    pub raw_iban: String,
    pub country_code: String,
    pub check_digits: String,
    pub bank_code: String,
    /// Absent when the bank code is not in the lookup table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    pub account_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IbanInfo {
    #[serde(flatten)]
    pub result: ValidationResult,
    #[serde(flatten)]
    pub fields: Option<IbanFields>,
}

impl IbanInfo {
    pub(crate) fn success(fields: IbanFields) -> Self {
        IbanInfo {
            result: ValidationResult::success(),
            fields: Some(fields),
        }
    }

    pub(crate) fn fail(code: ErrorCode, message: impl Into<String>) -> Self {
        IbanInfo {
            result: ValidationResult::fail(code, message),
            fields: None,
        }
    }

    pub fn bank_code(&self) -> Option<&str> {
        self.fields.as_ref().map(|f| f.bank_code.as_str())
    }

    pub fn bank_name(&self) -> Option<&str> {
        self.fields.as_ref().and_then(|f| f.bank_name.as_deref())
    }

    pub fn account_number(&self) -> Option<&str> {
        self.fields.as_ref().map(|f| f.account_number.as_str())
    }
}

impl Outcome for IbanInfo {
    fn outcome(&self) -> &ValidationResult {
        &self.result
    }
}

/// Fields parsed out of a valid UAE mobile number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileFields {
    /// E.164 form, `+971` followed by the 9-digit local number.
    pub normalized_number: String,
    /// Dialling prefix with trunk zero, e.g. `050`.
    pub prefix: String,
    pub carrier: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileInfo {
    #[serde(flatten)]
    pub result: ValidationResult,
    #[serde(flatten)]
    pub fields: Option<MobileFields>,
}

impl MobileInfo {
    pub(crate) fn success(fields: MobileFields) -> Self {
        MobileInfo {
            result: ValidationResult::success(),
            fields: Some(fields),
        }
    }

    pub(crate) fn fail(code: ErrorCode, message: impl Into<String>) -> Self {
        MobileInfo {
            result: ValidationResult::fail(code, message),
            fields: None,
        }
    }

    pub fn normalized_number(&self) -> Option<&str> {
        self.fields.as_ref().map(|f| f.normalized_number.as_str())
    }

    pub fn prefix(&self) -> Option<&str> {
        self.fields.as_ref().map(|f| f.prefix.as_str())
    }

    pub fn carrier(&self) -> Option<&str> {
        self.fields.as_ref().map(|f| f.carrier.as_str())
    }
}

impl Outcome for MobileInfo {
    fn outcome(&self) -> &ValidationResult {
        &self.result
    }
}

/// One input of a batch run paired with its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry<T> {
    /// The input exactly as the caller supplied it.
    pub input: Option<String>,
    pub result: T,
}

impl<T: Outcome> BatchEntry<T> {
    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        self.result.error_code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result_always_carries_code() {
        let result = ValidationResult::fail(ErrorCode::InvalidLength, "too short");
        assert!(!result.is_valid());
        assert_eq!(result.error_code(), Some(ErrorCode::InvalidLength));
        assert_eq!(result.error_message(), Some("too short"));
    }

    #[test]
    fn test_success_has_no_error_fields() {
        let result = ValidationResult::success();
        assert!(result.is_valid());
        assert!(result.error_code().is_none());
        assert!(result.error_message().is_none());
    }

    #[test]
    fn test_error_code_tokens_match_serialized_form() {
        let codes = [
            ErrorCode::EmptyInput,
            ErrorCode::InvalidMobilePrefix,
            ErrorCode::InvalidBirthYearRange,
        ];
        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
        }
    }

    #[test]
    fn test_failed_info_serializes_without_fields() {
        let info = MobileInfo::fail(ErrorCode::EmptyInput, "Mobile cannot be empty.");
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["is_valid"], false);
        assert_eq!(value["error_code"], "EMPTY_INPUT");
        assert!(value.get("normalized_number").is_none());
    }
}
