//! CLI subcommand implementations.

pub mod export;
pub mod images;
pub mod os_images;
