pub mod stock_stream_hub;

pub use stock_stream_hub::*;
