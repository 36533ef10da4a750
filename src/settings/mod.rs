mod config;
mod settings;

pub use self::config::*;
pub use settings::*;
