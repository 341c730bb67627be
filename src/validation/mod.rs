pub mod batch;
pub mod checksum;
pub mod emirates_id;
pub mod iban;
pub mod mobile;
pub mod passport;
pub mod trn;

pub use batch::{parse_many, IdentifierValidator};
pub use emirates_id::EmiratesIdValidator;
pub use iban::IbanValidator;
pub use mobile::MobileValidator;
pub use passport::PassportValidator;
pub use trn::TrnValidator;
