pub mod arguments;
pub mod config;
pub mod directory;
pub mod errors; // Domain error type
pub mod logger;
pub mod paths;

#[cfg(feature = "web")]
pub mod webserver;
