//! Configuration system
//!
//! Structures are declared with [`config_struct!`](crate::config_struct) in
//! `schemas`, loaded from TOML by `utils`.

pub mod macros;
pub mod schemas;
pub mod utils;

pub use schemas::{Config, DirectoryConfig, IdStrategy, WebserverConfig};
pub use utils::{
    get_config_clone, install_config, load_config_from_path, parse_config, read_config_file,
    render_config, save_config, with_config,
};
