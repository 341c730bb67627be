pub mod models;
pub mod validation;
pub mod utils;
pub mod uae_validator;

pub use models::{BatchEntry, ErrorCode, Outcome, ValidationResult};
pub use uae_validator::{IdentifierKind, IdentifierResult};
pub use utils::KitError;
pub use validation::{emirates_id, iban, mobile, passport, trn, IdentifierValidator};
