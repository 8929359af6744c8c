// Domain services
pub mod record_codec;

pub use record_codec::*;
