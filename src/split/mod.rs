pub mod monthly;
pub mod splitter_trait;

pub use monthly::{MonthlySplits, MonthlySplitter, Split};
pub use splitter_trait::CrossValidator;
