pub mod branch;
pub mod catalog;
pub mod mapping;
pub mod view;
