// Repository and Service Port Traits (Interfaces)
// Define what the domain needs from infrastructure

pub mod codec;
pub mod repositories;

pub use codec::*;
pub use repositories::*;
