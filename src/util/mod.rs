pub mod path;
pub mod progress;
pub mod time;
pub mod token;
