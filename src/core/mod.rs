pub mod config;
pub mod error;

pub use config::RollerConfig;
pub use error::{DiceError, Result};
