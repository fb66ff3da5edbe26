pub mod client;
pub mod sink;

pub use client::*;
pub use sink::*;
