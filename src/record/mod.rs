pub mod header;
pub mod types;

pub use header::{HeaderError, parse_header};
pub use types::*;
