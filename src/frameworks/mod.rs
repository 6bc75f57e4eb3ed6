// Frameworks layer: runtime configuration, database wiring and process bootstrap.

pub mod config;
pub mod db;
pub mod server;
