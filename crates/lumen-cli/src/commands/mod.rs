pub mod config;
pub mod histogram;
pub mod info;
pub mod render;
