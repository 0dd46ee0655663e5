mod config;
mod coordinator;

pub use config::*;
pub use coordinator::*;
