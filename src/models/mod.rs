pub mod card;
pub mod catalog;

pub use card::*;
pub use catalog::*;
