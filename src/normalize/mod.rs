//! Turning sheet rows into gallery cards.

pub mod record;
pub mod search;
pub mod slug;

pub use record::{parse_int, split_traits, Normalizer};
pub use search::build_search_text;
pub use slug::slugify;
