pub mod annotation;
pub mod config;
pub mod state;
