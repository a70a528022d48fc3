pub mod image;
pub mod log;
