pub mod catalog;
pub mod grouping;
pub mod search;

pub use catalog::*;
pub use grouping::*;
pub use search::*;
