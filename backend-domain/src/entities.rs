// Domain entities
pub mod inventory_item;
pub mod requests;
pub mod runtime_config;
pub mod stock_record;

pub use inventory_item::*;
pub use requests::*;
pub use runtime_config::*;
pub use stock_record::*;
