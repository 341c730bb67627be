use crate::models::*;
use crate::utils::KitError;
use crate::validation::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The identifier classes this crate understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    EmiratesId,
    Iban,
    Trn,
    Mobile,
    Passport,
}

/// Result of validating any identifier, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum IdentifierResult {
    EmiratesId(EmiratesIdInfo),
    Iban(IbanInfo),
    Trn(ValidationResult),
    Mobile(MobileInfo),
    Passport(ValidationResult),
}

impl IdentifierResult {
    pub fn kind(&self) -> IdentifierKind {
        match self {
            IdentifierResult::EmiratesId(_) => IdentifierKind::EmiratesId,
            IdentifierResult::Iban(_) => IdentifierKind::Iban,
            IdentifierResult::Trn(_) => IdentifierKind::Trn,
            IdentifierResult::Mobile(_) => IdentifierKind::Mobile,
            IdentifierResult::Passport(_) => IdentifierKind::Passport,
        }
    }
}

impl Outcome for IdentifierResult {
    fn outcome(&self) -> &ValidationResult {
        match self {
            IdentifierResult::EmiratesId(info) => info.outcome(),
            IdentifierResult::Iban(info) => info.outcome(),
            IdentifierResult::Trn(result) | IdentifierResult::Passport(result) => result,
            IdentifierResult::Mobile(info) => info.outcome(),
        }
    }
}

impl IdentifierKind {
    pub const ALL: [IdentifierKind; 5] = [
        IdentifierKind::EmiratesId,
        IdentifierKind::Iban,
        IdentifierKind::Trn,
        IdentifierKind::Mobile,
        IdentifierKind::Passport,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::EmiratesId => "emirates-id",
            IdentifierKind::Iban => "iban",
            IdentifierKind::Trn => "trn",
            IdentifierKind::Mobile => "mobile",
            IdentifierKind::Passport => "passport",
        }
    }

    // Routes a single input to the matching validator
    pub fn validate(&self, input: Option<&str>) -> IdentifierResult {
        match self {
            IdentifierKind::EmiratesId => IdentifierResult::EmiratesId(emirates_id::validate(input)),
            IdentifierKind::Iban => IdentifierResult::Iban(iban::validate(input)),
            IdentifierKind::Trn => IdentifierResult::Trn(trn::validate(input)),
            IdentifierKind::Mobile => IdentifierResult::Mobile(mobile::validate(input)),
            IdentifierKind::Passport => IdentifierResult::Passport(passport::validate(input)),
        }
    }

    pub fn check(&self, input: Option<&str>) -> bool {
        self.validate(input).is_valid()
    }

    pub fn mask(&self, input: Option<&str>) -> String {
        match self {
            IdentifierKind::EmiratesId => emirates_id::mask(input),
            IdentifierKind::Iban => iban::mask(input),
            IdentifierKind::Trn => trn::mask(input),
            IdentifierKind::Mobile => mobile::mask(input),
            IdentifierKind::Passport => passport::mask(input),
        }
    }

    /// Canonical form of the input, for the kinds that define one.
    pub fn sanitize(&self, input: Option<&str>) -> Option<String> {
        match self {
            IdentifierKind::EmiratesId => Some(emirates_id::sanitize(input)),
            IdentifierKind::Mobile => Some(mobile::sanitize(input)),
            IdentifierKind::Iban | IdentifierKind::Trn | IdentifierKind::Passport => None,
        }
    }

    pub fn parse_many<I, S>(&self, inputs: I) -> Vec<BatchEntry<IdentifierResult>>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        batch::run_batch(self.as_str(), inputs, |input| self.validate(input))
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = KitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        IdentifierKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                KitError::invalid_argument(
                    "kind",
                    format!(
                        "unknown identifier kind `{}` (expected one of: emirates-id, iban, trn, mobile, passport)",
                        s
                    ),
                )
            })
    }
}
