pub mod model;
pub mod parse;
pub mod query;

pub use model::{Category, Item, RawRecord};
pub use parse::{ParseError, normalize, parse_items, parse_records};
pub use query::{Buckets, Directory};
