pub mod config;
pub mod layout;
pub mod length;
pub mod registry;
