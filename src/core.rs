pub mod action;
pub mod error;
pub mod image_loader;
pub mod pair_textures;
pub mod persistence;
pub mod session;
