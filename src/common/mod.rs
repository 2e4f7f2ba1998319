pub mod config;
pub mod error;
pub mod material;

pub use config::{KinematicsConfig, KinematicsConfigBuilder};
pub use error::ConfigError;
pub use material::Material;
