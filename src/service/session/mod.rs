pub mod reducer;
pub mod store;

pub use reducer::*;
pub use store::*;
