pub mod list;
pub mod name;
pub mod remove;
pub mod write;
