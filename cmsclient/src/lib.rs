pub mod config;
pub mod rest;

pub use config::ClientConfig;
pub use rest::RestContentBackend;
