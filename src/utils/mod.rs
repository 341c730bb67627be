pub mod clock;
pub mod error;
pub mod text;

pub use error::KitError;
