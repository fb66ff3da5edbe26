pub mod branch;
pub mod catalog;
pub mod download;
pub mod session;
pub mod table;
