pub mod data;
pub mod lookup;

pub use data::*;
