// Domain value objects
pub mod field_value;
pub mod identifiers;
pub mod quantities;
pub mod stock_status;

pub use field_value::*;
pub use identifiers::*;
pub use quantities::*;
pub use stock_status::*;
