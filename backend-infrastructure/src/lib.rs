pub mod config;
pub mod crypto;
pub mod repositories;

pub use config::*;
pub use crypto::*;
pub use repositories::*;
